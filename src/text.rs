//! Small formatting helpers shared by the CLI and persistence code.

use crate::store::User;

/// Number of whitespace-separated words. `None` and blank input count as zero.
pub fn calculate_word_count(text: Option<&str>) -> usize {
    text.map_or(0, |t| t.split_whitespace().count())
}

pub fn format_word_count(count: usize) -> String {
    match count {
        1 => "1 word".to_string(),
        n => format!("{n} words"),
    }
}

/// Name to greet the user by: full name, else the email's local part, else `"there"`.
pub fn display_name(user: Option<&User>) -> String {
    let Some(user) = user else {
        return "there".to_string();
    };

    if let Some(name) = user.full_name.as_deref().filter(|n| !n.is_empty()) {
        return name.to_string();
    }

    if user.email.is_empty() {
        return "there".to_string();
    }

    match user.email.split('@').next() {
        Some(local) if !local.is_empty() => local.to_string(),
        _ => user.email.clone(),
    }
}

/// Greeting for a local hour of day (0-23).
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}
