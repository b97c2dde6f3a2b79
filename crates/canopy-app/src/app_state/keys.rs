//! Winit key events to manager key input.

use canopy_webview::KeyInput;
use winit::keyboard::{Key, ModifiersState};

/// Build the key state the interceptor matches on. Returns `None` for keys
/// with no stable name (dead keys, unidentified).
pub(super) fn key_input(logical_key: &Key, mods: ModifiersState) -> Option<KeyInput> {
    let key = match logical_key {
        Key::Named(named) => format!("{named:?}"),
        Key::Character(c) => c.to_string(),
        _ => return None,
    };
    Some(KeyInput {
        key,
        ctrl: mods.control_key(),
        meta: mods.super_key(),
        alt: mods.alt_key(),
        shift: mods.shift_key(),
    })
}
