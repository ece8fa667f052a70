use egui::Color32;

use crate::common::palette;
use crate::common::types::Community;

fn community(
    id: u64,
    name: &str,
    member_count: u32,
    initials: &str,
    color: Color32,
    description: &str,
    unread_count: u32,
) -> Community {
    Community {
        id,
        name: name.to_string(),
        member_count,
        initials: initials.to_string(),
        color,
        description: description.to_string(),
        unread_count,
    }
}

pub fn communities() -> Vec<Community> {
    vec![
        community(
            1,
            "Design Hub",
            245,
            "DH",
            palette::PURPLE,
            "Share design resources and feedback",
            3,
        ),
        community(
            2,
            "Developer Network",
            1204,
            "DN",
            palette::PRIMARY,
            "Coding tips and tech discussions",
            0,
        ),
        community(
            3,
            "Photography",
            872,
            "PH",
            palette::AMBER,
            "Share and critique photography",
            12,
        ),
        community(
            4,
            "Book Club",
            124,
            "BC",
            palette::GREEN,
            "Monthly book discussions",
            0,
        ),
        community(
            5,
            "Fitness & Health",
            659,
            "FH",
            palette::RED,
            "Workout tips and healthy recipes",
            5,
        ),
    ]
}
