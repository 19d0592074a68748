//! Rule tables and canned conversation text.

#[path = "rules/chat.rs"]
pub(crate) mod chat;
#[cfg(test)]
#[path = "rules/tests.rs"]
mod tests;

/// First bot turn of every chat session.
pub const WELCOME_MESSAGE: &str = "Hi! I'm AquaBot, your water access assistant. I can help you find water sources, \
check availability, and answer questions about pricing. How can I help you today?";

/// Reply when no keyword rule matches; lists the supported intents.
pub const FALLBACK_REPLY: &str = "I can help you with: 🚰 Finding water sources, 📍 ATM locations, \
💰 Price comparisons, 🚛 Tanker bookings, ⚡ Emergency supply, 🌊 Water quality info. What would you like to know?";

/// Canned prompts offered to the user beside the input box.
pub const QUICK_RESPONSES: [&str; 4] =
    ["Find water near me", "Check ATM locations", "Water tanker prices", "Emergency water supply"];
