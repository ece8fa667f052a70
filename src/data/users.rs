use crate::common::palette;
use crate::common::types::{Presence, User};

pub const CURRENT_USER_ID: u64 = 1;

fn user(
    id: u64,
    username: &str,
    full_name: &str,
    status: Presence,
    initials: &str,
    color: egui::Color32,
) -> User {
    User {
        id,
        username: username.to_string(),
        full_name: Some(full_name.to_string()),
        status,
        initials: initials.to_string(),
        color,
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(
            1,
            "current_user",
            "Current User",
            Presence::Online,
            "ME",
            palette::PRIMARY,
        ),
        user(
            2,
            "sarah_chen",
            "Sarah Chen",
            Presence::Online,
            "SC",
            palette::PRIMARY,
        ),
        user(
            3,
            "alex_johnson",
            "Alex Johnson",
            Presence::Online,
            "AJ",
            palette::AMBER,
        ),
        user(
            4,
            "thomas_nelson",
            "Thomas Nelson",
            Presence::Offline,
            "TN",
            palette::RED,
        ),
        user(
            5,
            "emily_martinez",
            "Emily Martinez",
            Presence::Online,
            "EM",
            palette::PURPLE,
        ),
        user(
            6,
            "michael_davis",
            "Michael Davis",
            Presence::Offline,
            "MD",
            palette::GREEN,
        ),
    ]
}

pub fn current_user() -> User {
    user(
        CURRENT_USER_ID,
        "current_user",
        "Current User",
        Presence::Online,
        "ME",
        palette::PRIMARY,
    )
}

pub fn user_by_id(id: u64) -> Option<User> {
    users().into_iter().find(|user| user.id == id)
}
