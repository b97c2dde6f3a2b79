mod app_state;
mod cli;

use std::path::Path;

use canopy_config::ShellConfig;
use canopy_platform::ShortcutTable;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Secrets for credential injection may live here. Variables already set
/// in the environment win.
fn load_dotenv() {
    let mut candidates = vec![std::path::PathBuf::from(".env")];
    if let Ok(path) = canopy_platform::env_file() {
        candidates.push(path);
    }

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

/// Level directive for `--log-level` values. Full directives pass through.
fn log_directive(level: &str) -> String {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => format!("canopy={level}"),
        other => other.to_string(),
    }
}

/// Aligned `label  chord` lines for `--print-shortcuts`.
fn shortcut_listing(table: &ShortcutTable) -> String {
    let rows = table.help_rows();
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, chord)| format!("{label:<width$}  {chord}\n"))
        .collect()
}

fn load_config(path: Option<&Path>) -> ShellConfig {
    canopy_config::load_config(path).unwrap_or_else(|e| {
        eprintln!("canopy: config load failed, using defaults: {e}");
        ShellConfig::default()
    })
}

fn main() {
    load_dotenv();

    let args = cli::parse();

    // Config comes first so its log level can seed the filter.
    let config = load_config(args.config.as_deref());

    if args.print_shortcuts {
        let table = ShortcutTable::from_config(&config.shortcuts);
        if args.json {
            match serde_json::to_string_pretty(&table.entries()) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("canopy: failed to encode shortcuts: {e}"),
            }
        } else {
            print!("{}", shortcut_listing(&table));
        }
        return;
    }

    let directive = args
        .log_level
        .as_deref()
        .map(log_directive)
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "canopy=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Canopy v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    tracing::info!(apps = config.apps.len(), "Config loaded");

    if let Err(e) = canopy_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return;
        }
    };
    let mut app = app_state::CanopyApp::new(config).with_devtools(args.devtools);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_levels_are_scoped_to_workspace() {
        assert_eq!(log_directive("debug"), "canopy=debug");
        assert_eq!(log_directive("canopy_webview=trace"), "canopy_webview=trace");
    }

    #[test]
    fn shortcut_listing_aligns_labels() {
        let table = ShortcutTable::from_config(&ShellConfig::default().shortcuts);
        let listing = shortcut_listing(&table);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 14);
        assert!(lines[0].starts_with("Command Palette "));
        if !cfg!(target_os = "macos") {
            assert!(lines[0].ends_with("  Ctrl+Shift+P"));
        }
        // "Command Palette" and "Switch to App 1" are the longest labels.
        for line in &lines {
            assert_eq!(&line[15..17], "  ");
            assert_ne!(line.as_bytes()[17], b' ');
        }
    }

    #[test]
    fn unreadable_config_falls_back_to_defaults() {
        let config = load_config(Some(Path::new("/nonexistent/canopy/config.toml")));
        assert_eq!(config.apps.len(), ShellConfig::default().apps.len());
    }
}
