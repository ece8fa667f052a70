use crate::config::Preferences;

/// Cue points where the UI would trigger a notification sound. The audio
/// assets live on an external service, so the prototype only records that a
/// cue fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    MessageSent,
    SelectConversation,
    Notification,
    MediaPreview,
}

impl SoundCue {
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::MessageSent => "message-sent",
            SoundCue::SelectConversation => "select-conversation",
            SoundCue::Notification => "notification",
            SoundCue::MediaPreview => "media-preview",
        }
    }
}

pub fn play(cue: SoundCue, preferences: &Preferences) {
    if preferences.sound_cues {
        log::debug!("sound cue: {}", cue.name());
    }
}
