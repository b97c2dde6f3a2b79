pub mod actions;
pub mod diagnostics;
pub mod errors;
pub mod keys;
pub mod types;

pub use actions::{ActionScope, ShortcutAction};
pub use diagnostics::{Diagnostic, DiagnosticLevel, DiagnosticQueue};
pub use errors::{ConfigError, PlatformError, ViewError};
pub use keys::KeyCombo;
pub use types::{Rect, Size, ViewId};
