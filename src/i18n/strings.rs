/// Static interface strings for one language.
#[derive(Debug)]
pub struct UiStrings {
    pub welcome: &'static str,
    pub input_placeholder: &'static str,
    pub send: &'static str,
    pub new_chat: &'static str,
    pub help: &'static str,
    pub footer: &'static str,
    /// Replies used by the offline backend.
    pub canned_replies: &'static [&'static str],
}

pub const ENGLISH: UiStrings = UiStrings {
    welcome: "Hi there! How can I help you today?",
    input_placeholder: "Type your message...",
    send: "Send",
    new_chat: "New Chat",
    help: "Help",
    footer: "© 2025 Neo Support | Help",
    canned_replies: &[
        "That's interesting. Tell me more about it.",
        "I see. How can I assist you with that?",
        "Thanks for sharing. Is there anything specific you'd like to know?",
        "I understand. What would you like to do next?",
        "That's a great question. Let me help you with that.",
    ],
};

pub const HINDI: UiStrings = UiStrings {
    welcome: "नमस्ते! आज मैं आपकी कैसे मदद कर सकता हूँ?",
    input_placeholder: "अपना संदेश टाइप करें...",
    send: "भेजें",
    new_chat: "नई चैट",
    help: "सहायता",
    footer: "© 2025 Neo Support | सहायता",
    canned_replies: &[
        "यह दिलचस्प है। मुझे इसके बारे में और बताएं।",
        "मैं समझता हूँ। मैं आपकी इसमें कैसे सहायता कर सकता हूँ?",
        "साझा करने के लिए धन्यवाद। क्या कोई विशेष बात है जो आप जानना चाहते हैं?",
        "मैं समझता हूँ। आप आगे क्या करना चाहेंगे?",
        "यह एक अच्छा सवाल है। मुझे आपकी मदद करने दीजिए।",
    ],
};
