//! Shortcut interception at the content boundary.
//!
//! Each view reports raw key presses before the hosted page sees them. A
//! chord found in the [`ShortcutTable`] is consumed: navigation actions run
//! against the originating view, everything else goes to the host.

use canopy_common::{ActionScope, ShortcutAction};
use canopy_common::KeyCombo;
use canopy_platform::ShortcutTable;

use crate::backend::KeyInput;

/// What to do with one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interception {
    /// Not a shortcut; the page keeps the event.
    Pass,
    /// Run against the view that received the key.
    View(ShortcutAction),
    /// Forward to the host UI.
    Host(ShortcutAction),
}

/// Match a key press against the table.
pub fn intercept(table: &ShortcutTable, input: &KeyInput) -> Interception {
    let combo = KeyCombo::from_input(input.ctrl, input.meta, input.alt, input.shift, &input.key);
    match table.lookup(&combo) {
        Some(action) => match action.scope() {
            ActionScope::View => Interception::View(action),
            ActionScope::Host => Interception::Host(action),
        },
        None => Interception::Pass,
    }
}

/// Capture-phase `keydown` listener installed in every page.
///
/// Matched chords are stopped before page handlers run and reported as a
/// `shortcut` IPC message carrying the raw key state.
pub fn key_listener_script(table: &ShortcutTable) -> String {
    let entries = serde_json::to_string(&table.entries()).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"
(function() {{
    var table = {entries};
    var aliases = {{ arrowup: 'up', arrowdown: 'down', arrowleft: 'left', arrowright: 'right',
        ' ': 'space', spacebar: 'space', esc: 'escape', del: 'delete', 'return': 'enter' }};
    function normalize(key) {{
        var lower = String(key || '').toLowerCase();
        return aliases[lower] || lower;
    }}
    window.addEventListener('keydown', function(e) {{
        var key = normalize(e.key);
        var ctrlOrMeta = e.ctrlKey || e.metaKey;
        for (var i = 0; i < table.length; i++) {{
            var t = table[i];
            if (t.key === key && t.ctrlOrMeta === ctrlOrMeta && t.alt === e.altKey && t.shift === e.shiftKey) {{
                e.preventDefault();
                e.stopImmediatePropagation();
                window.ipc.postMessage(JSON.stringify({{
                    kind: 'shortcut',
                    payload: {{ key: e.key, ctrl: e.ctrlKey, meta: e.metaKey, alt: e.altKey, shift: e.shiftKey }}
                }}));
                return;
            }}
        }}
    }}, true);
}})();
"#
    )
}
