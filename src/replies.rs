/// Canned reply selection for the chat bot
///
/// The bot is a keyword matcher over the translated text: the first
/// matching keyword wins, and there is always a fallback. Matching is
/// case-insensitive substring containment, checked in a fixed priority
/// order.
/// One of the four fixed bot responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CannedReply {
    /// Matched "hello"
    Greeting,
    /// Matched "meeting"
    Scheduling,
    /// Matched "thank"
    Acknowledgment,
    /// No keyword matched
    Fallback,
}

impl CannedReply {
    /// The fixed response text for this reply
    pub fn text(&self) -> &'static str {
        match self {
            Self::Greeting => "Hi there! How can I help you today?",
            Self::Scheduling => "We'll schedule the meeting shortly!",
            Self::Acknowledgment => "You're very welcome!",
            Self::Fallback => "Thanks for your message! We'll respond soon.",
        }
    }
}

impl std::fmt::Display for CannedReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Select the reply for a piece of translated text
///
/// Keywords are checked in priority order; "hello" beats "meeting" beats
/// "thank" when several appear in the same message.
pub fn select_reply(translated_text: &str) -> CannedReply {
    let lowered = translated_text.to_lowercase();

    if lowered.contains("hello") {
        CannedReply::Greeting
    } else if lowered.contains("meeting") {
        CannedReply::Scheduling
    } else if lowered.contains("thank") {
        CannedReply::Acknowledgment
    } else {
        CannedReply::Fallback
    }
}
