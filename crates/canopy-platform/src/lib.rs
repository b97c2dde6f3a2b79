//! Platform services: the shortcut table, directories and secret lookup.

pub mod input;
pub mod paths;
pub mod secrets;

pub use input::{ShortcutEntry, ShortcutTable};
pub use paths::{config_dir, config_file, data_dir, ensure_dirs, env_file, webview_data_dir};
pub use secrets::{EnvSecretStore, MemorySecretStore, SecretLookup, SecretStore};
