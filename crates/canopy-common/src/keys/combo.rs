use crate::errors::PlatformError;

use super::names::{canonical_key, display_key};

pub const MOD_CTRL_OR_META: u8 = 0b001;
pub const MOD_ALT: u8 = 0b010;
pub const MOD_SHIFT: u8 = 0b100;

/// A canonical key chord.
///
/// Ctrl, Cmd and Super collapse into one bit so the same binding works on
/// every platform. Modifier order is irrelevant and the key is stored in
/// its [`canonical_key`] form, so two chords compare equal exactly when a
/// key press would match both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: CtrlOrMeta=1, Alt=2, Shift=4.
    pub mods: u8,
    pub key: String,
}

impl KeyCombo {
    /// Parse a configured binding like `"Ctrl+Shift+P"`, `"Cmd+,"` or
    /// `"Alt+Left"`.
    ///
    /// The last `+`-separated token is the key, even if it names a
    /// modifier. Repeated modifiers are accepted.
    pub fn parse(binding: &str) -> Result<Self, PlatformError> {
        let trimmed = binding.trim();
        if trimmed.is_empty() {
            return Err(PlatformError::KeybindError("empty keybind string".into()));
        }

        let tokens: Vec<&str> = trimmed.split('+').map(str::trim).collect();
        let Some((key, modifiers)) = tokens.split_last() else {
            return Err(PlatformError::KeybindError("empty keybind string".into()));
        };
        if key.is_empty() {
            return Err(PlatformError::KeybindError(format!(
                "keybind {binding:?} has no key component"
            )));
        }

        let mut mods = 0u8;
        for token in modifiers {
            mods |= modifier_bit(token).ok_or_else(|| {
                PlatformError::KeybindError(format!("unrecognized modifier: {token}"))
            })?;
        }

        Ok(Self {
            mods,
            key: canonical_key(key),
        })
    }

    /// Build from a raw key event as reported by the content engine or the
    /// windowing layer (`"P"`, `"ArrowLeft"`, `" "`).
    pub fn from_input(ctrl: bool, meta: bool, alt: bool, shift: bool, key: &str) -> Self {
        let mut mods = 0u8;
        if ctrl || meta {
            mods |= MOD_CTRL_OR_META;
        }
        if alt {
            mods |= MOD_ALT;
        }
        if shift {
            mods |= MOD_SHIFT;
        }
        Self {
            mods,
            key: canonical_key(key),
        }
    }

    pub fn ctrl_or_meta(&self) -> bool {
        self.mods & MOD_CTRL_OR_META != 0
    }

    pub fn alt(&self) -> bool {
        self.mods & MOD_ALT != 0
    }

    pub fn shift(&self) -> bool {
        self.mods & MOD_SHIFT != 0
    }

    /// Platform display string: `⌘⇧P` on macOS, `Ctrl+Shift+P` elsewhere.
    pub fn display(&self) -> String {
        let mac = cfg!(target_os = "macos");
        let mut parts: Vec<String> = Vec::new();
        if self.ctrl_or_meta() {
            parts.push(if mac { "\u{2318}" } else { "Ctrl" }.to_string());
        }
        if self.alt() {
            parts.push(if mac { "\u{2325}" } else { "Alt" }.to_string());
        }
        if self.shift() {
            parts.push(if mac { "\u{21E7}" } else { "Shift" }.to_string());
        }
        parts.push(display_key(&self.key));
        parts.join(if mac { "" } else { "+" })
    }
}

fn modifier_bit(token: &str) -> Option<u8> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" | "cmd" | "command" | "super" | "win" | "meta" => {
            Some(MOD_CTRL_OR_META)
        }
        "alt" | "option" | "opt" => Some(MOD_ALT),
        "shift" => Some(MOD_SHIFT),
        _ => None,
    }
}
