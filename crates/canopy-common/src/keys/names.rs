//! Key name folding shared by configured bindings and live key events.
//!
//! Config strings use friendly names (`"Period"`, `"Left"`), while
//! browsers and winit report W3C key values (`"ArrowLeft"`, `" "`, `"P"`).
//! Both fold into one lower-cased name.

/// Canonical lower-cased key name.
pub fn canonical_key(key: &str) -> String {
    if key == " " {
        return "space".to_string();
    }
    let lower = key.trim().to_lowercase();
    let folded = match lower.as_str() {
        "arrowup" => "up",
        "arrowdown" => "down",
        "arrowleft" => "left",
        "arrowright" => "right",
        "spacebar" => "space",
        "esc" => "escape",
        "del" => "delete",
        "return" => "enter",
        "period" => ".",
        "comma" => ",",
        "slash" => "/",
        "backslash" => "\\",
        _ => return lower,
    };
    folded.to_string()
}

/// Display form of a canonical key name.
pub(super) fn display_key(key: &str) -> String {
    if cfg!(target_os = "macos") {
        let symbol = match key {
            "enter" => Some("\u{21A9}"),
            "backspace" => Some("\u{232B}"),
            "delete" => Some("\u{2326}"),
            "escape" => Some("\u{238B}"),
            "tab" => Some("\u{21E5}"),
            "up" => Some("\u{2191}"),
            "down" => Some("\u{2193}"),
            "left" => Some("\u{2190}"),
            "right" => Some("\u{2192}"),
            _ => None,
        };
        if let Some(symbol) = symbol {
            return symbol.to_string();
        }
    }

    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
