use nuwa_core::{Correction, Message, Sender};

/// One transcript line: `[HH:MM] you> text` or `[HH:MM] nuwa> text`.
pub fn message_line(message: &Message) -> String {
    let who = match message.from {
        Sender::User => "you",
        Sender::Ai => "nuwa",
    };
    format!(
        "[{}] {}> {}",
        message.timestamp.format("%H:%M"),
        who,
        message.text
    )
}

/// The correction panel shown after each turn.
pub fn correction_panel(correction: &Correction) -> String {
    let mut out = String::new();
    out.push_str("--- Correction ---\n");
    out.push_str(&format!("  You wrote:  {}\n", correction.user_text));
    out.push_str(&format!("  Corrected:  {}\n", correction.corrected_text));
    out.push_str(&format!("  English:    {}\n", correction.translations.english));
    out.push_str(&format!("  Indonesian: {}\n", correction.translations.indonesian));
    out.push_str(&format!("  Rule:       {}\n", correction.explanation.rule));
    out.push_str(&format!("  Formula:    {}", correction.explanation.formula));
    out
}
