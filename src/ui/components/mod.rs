pub mod calls_list;
pub mod chat_area;
pub mod communities_list;
pub mod conversation_list;
pub mod input_bar;
pub mod lightbox;
pub mod media_preview;
pub mod message_bubble;
pub mod saved_items_list;
pub mod sidebar;
pub mod status_badge;
