use crate::common::types::{MediaAttachment, Message, User};

use super::users;

fn text(id: u64, conversation_id: u64, sender: &User, content: &str, timestamp: &str, day: &str) -> Message {
    Message {
        id,
        conversation_id,
        sender: sender.clone(),
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        day_label: day.to_string(),
        media: None,
    }
}

fn image(url: &str) -> Option<MediaAttachment> {
    Some(MediaAttachment::Image {
        url: url.to_string(),
    })
}

fn file(name: &str, size: &str) -> Option<MediaAttachment> {
    Some(MediaAttachment::File {
        name: name.to_string(),
        size: size.to_string(),
    })
}

/// All seed messages, yesterday's first, in display order per conversation.
pub fn messages() -> Vec<Message> {
    let all = users::users();
    let me = &all[0];
    let sarah = &all[1];
    let alex = &all[2];
    let thomas = &all[3];
    let emily = &all[4];
    let michael = &all[5];

    let mut yesterday = vec![
        // Design Team
        text(1, 2, emily, "Hi team, I've uploaded the new design mockups for the landing page. Could everyone please review and provide feedback by EOD?", "10:30 AM", "Yesterday"),
        Message {
            media: image("https://images.unsplash.com/photo-1517292987719-0369a794ec0f?w=500"),
            ..text(2, 2, emily, "Here's a preview of the homepage:", "10:32 AM", "Yesterday")
        },
        text(3, 2, alex, "Looks good! I like the color palette. Maybe we could add more contrast to the CTA buttons?", "10:45 AM", "Yesterday"),
        text(4, 2, me, "I agree with Alex. The overall layout is clean, but the buttons could use more emphasis. Also, what about adding some testimonials in that empty space below the hero section?", "11:15 AM", "Yesterday"),
        // Sarah Chen
        text(7, 1, sarah, "Hey! Did you get a chance to look at the client presentation I sent over?", "11:30 AM", "Yesterday"),
        text(8, 1, me, "Yes, it looks fantastic! I really like the approach you took with the market analysis section.", "12:05 PM", "Yesterday"),
        Message {
            media: file("client_data_2023.xlsx", "3.8 MB"),
            ..text(9, 1, sarah, "Thanks! I spent extra time on that part. By the way, here are those files you requested:", "12:30 PM", "Yesterday")
        },
        // Alex Johnson
        text(10, 3, alex, "Hey, are you free this weekend for the conference?", "3:15 PM", "Yesterday"),
        text(11, 3, me, "Yes, I've already booked my ticket. Are you presenting anything?", "4:20 PM", "Yesterday"),
        Message {
            media: image("https://images.unsplash.com/photo-1542744173-05336fcc7ad4?w=500"),
            ..text(12, 3, alex, "I'll be doing a short talk on UX design trends. Here's a preview of one of my slides:", "5:00 PM", "Yesterday")
        },
        // Marketing Department
        text(13, 4, michael, "Team, we need to finalize the Q4 marketing strategy by Friday. Any updates?", "9:00 AM", "Yesterday"),
        text(14, 4, me, "I've completed the social media calendar and budget allocation. Will share the document by end of day.", "10:15 AM", "Yesterday"),
        Message {
            media: image("https://images.unsplash.com/photo-1560472355-536de3962603?w=500"),
            ..text(15, 4, thomas, "The campaign assets are ready for review. Take a look at the main banner:", "2:30 PM", "Yesterday")
        },
        // Thomas Nelson
        text(16, 5, thomas, "Hey, I wanted to thank you for your help with the project last week. It really made a difference.", "11:30 AM", "Yesterday"),
        text(17, 5, me, "No problem at all! It was a great learning experience for me too.", "12:45 PM", "Yesterday"),
        Message {
            media: file("ux_design_handbook.pdf", "12.3 MB"),
            ..text(18, 5, thomas, "By the way, here's that book I mentioned. It's a great resource for UX design principles.", "1:30 PM", "Yesterday")
        },
    ];

    let today = vec![
        // Design Team
        Message {
            media: file("homepage-redesign-v2.fig", "4.2 MB"),
            ..text(5, 2, emily, "I've updated the design based on your feedback:", "9:05 AM", "Today")
        },
        text(6, 2, thomas, "Perfect! This looks much better. The testimonials section is a great addition.", "9:47 AM", "Today"),
        text(19, 2, sarah, "Agreed! The revised color scheme makes the call-to-action buttons really stand out now.", "10:15 AM", "Today"),
        // Sarah Chen
        text(20, 1, sarah, "Morning! Just checking if you're all set for the client meeting at 2pm?", "8:30 AM", "Today"),
        text(21, 1, me, "Good morning! Yes, I've prepared all the materials and will be ready to present the analytics section.", "8:45 AM", "Today"),
        text(22, 1, sarah, "Great! I've sent you the final presentation deck. We should aim to wrap up within 45 minutes.", "9:00 AM", "Today"),
        Message {
            media: file("client_presentation_final.pptx", "5.7 MB"),
            ..text(23, 1, sarah, "I've sent you the files you requested, let me know if you need anything else!", "12:42 PM", "Today")
        },
        // Alex Johnson
        text(24, 3, me, "What time does your talk start on Saturday?", "9:30 AM", "Today"),
        text(25, 3, alex, "It's scheduled for 11:15 AM in the main hall. Would be great to see you there!", "10:05 AM", "Today"),
        // Marketing Department
        Message {
            media: image("https://images.unsplash.com/photo-1533750516457-a7f992034fec?w=500"),
            ..text(26, 4, michael, "The new campaign assets are ready for review", "8:15 AM", "Today")
        },
        text(27, 4, me, "These look great! The colors align perfectly with our brand guidelines.", "9:30 AM", "Today"),
    ];

    yesterday.extend(today);
    yesterday
}

/// Messages of one conversation, preserving insertion order.
pub fn messages_for(conversation_id: u64) -> Vec<Message> {
    messages()
        .into_iter()
        .filter(|message| message.conversation_id == conversation_id)
        .collect()
}
