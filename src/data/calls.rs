use egui::Color32;

use crate::common::palette;
use crate::common::types::{CallDirection, CallEntry};

fn call(
    id: u64,
    contact_name: &str,
    contact_initials: &str,
    contact_color: Color32,
    direction: CallDirection,
    day_label: &str,
    time: &str,
    duration: Option<&str>,
) -> CallEntry {
    CallEntry {
        id,
        contact_name: contact_name.to_string(),
        contact_initials: contact_initials.to_string(),
        contact_color,
        direction,
        day_label: day_label.to_string(),
        time: time.to_string(),
        duration: duration.map(str::to_string),
    }
}

pub fn calls() -> Vec<CallEntry> {
    vec![
        call(
            1,
            "Sarah Johnson",
            "SJ",
            palette::PURPLE,
            CallDirection::Incoming,
            "Today",
            "10:23 AM",
            Some("14:32"),
        ),
        call(
            2,
            "Michael Chen",
            "MC",
            palette::PRIMARY,
            CallDirection::Outgoing,
            "Today",
            "9:15 AM",
            Some("5:45"),
        ),
        call(
            3,
            "Emily Davis",
            "ED",
            palette::AMBER,
            CallDirection::Missed,
            "Yesterday",
            "4:32 PM",
            None,
        ),
        call(
            4,
            "Marketing Team",
            "MT",
            palette::GREEN,
            CallDirection::Incoming,
            "Yesterday",
            "2:10 PM",
            Some("45:20"),
        ),
        call(
            5,
            "James Wilson",
            "JW",
            palette::RED,
            CallDirection::Outgoing,
            "Feb 21",
            "11:05 AM",
            Some("3:12"),
        ),
        call(
            6,
            "Sarah Johnson",
            "SJ",
            palette::PURPLE,
            CallDirection::Missed,
            "Feb 20",
            "6:43 PM",
            None,
        ),
    ]
}
