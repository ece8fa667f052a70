use crate::common::types::{SavedItem, SavedKind};

fn item(
    id: u64,
    kind: SavedKind,
    title: &str,
    description: &str,
    date: &str,
    sender: Option<&str>,
    thumbnail: Option<&str>,
) -> SavedItem {
    SavedItem {
        id,
        kind,
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        sender: sender.map(str::to_string),
        thumbnail: thumbnail.map(str::to_string),
    }
}

pub fn saved_items() -> Vec<SavedItem> {
    vec![
        item(
            1,
            SavedKind::Message,
            "Project timeline discussion",
            "We need to finalize the timeline for the new product launch by next week...",
            "2 days ago",
            Some("Sarah Johnson"),
            None,
        ),
        item(
            2,
            SavedKind::File,
            "Q1 Marketing Report.pdf",
            "Quarterly marketing performance summary",
            "1 week ago",
            Some("Marketing Team"),
            None,
        ),
        item(
            3,
            SavedKind::Link,
            "Design System Documentation",
            "https://designsystem.company.com/docs",
            "2 weeks ago",
            Some("David Chen"),
            None,
        ),
        item(
            4,
            SavedKind::Image,
            "Logo Concepts",
            "Final versions of the logo redesign",
            "3 weeks ago",
            Some("Design Team"),
            Some("https://via.placeholder.com/100"),
        ),
        item(
            5,
            SavedKind::Message,
            "Meeting Notes: Client Presentation",
            "Key points from our client presentation meeting on Tuesday...",
            "1 month ago",
            Some("Emily Davis"),
            None,
        ),
    ]
}
