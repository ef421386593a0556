//! Canned assistant replies.

use crate::language::Language;

/// Replies the simulated client-side policy picks from.
pub const SIMULATED_REPLIES: &[&str] = &[
    "That's interesting! Tell me more about it. 😊",
    "I understand how you feel. What happened next?",
    "That sounds wonderful! 🌟",
    "Thanks for sharing that with me! How are you feeling now?",
    "I'm here to listen. Please continue! 💙",
];

const SERVICE_EN: &[&str] = &[
    "That's interesting! Tell me more about it.",
    "I understand. How does that make you feel?",
    "Thanks for sharing that with me!",
    "What would you like to practice today?",
    "Great! Keep practicing your English.",
];

const SERVICE_JA: &[&str] = &[
    "そうですね！もっと教えてください 😊",
    "分かります。どう感じますか？",
    "ありがとう！何を練習したいですか？",
];

const SERVICE_ZH: &[&str] = &[
    "很有趣！请告诉我更多 😊",
    "我明白。你感觉怎么样？",
    "谢谢分享！你想练习什么？",
];

/// Replies the Chat Service picks from, by detected message language.
/// Languages without their own set fall back to English.
pub fn service_replies(language: Language) -> &'static [&'static str] {
    match language {
        Language::Japanese => SERVICE_JA,
        Language::Chinese => SERVICE_ZH,
        Language::English | Language::Indonesian => SERVICE_EN,
    }
}
