//! Platform directories used by the shell.

mod ensure;
mod resolve;

pub use ensure::ensure_dirs;
pub use resolve::{cache_dir, config_dir, config_file, data_dir, env_file, webview_data_dir};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_ends_with_canopy() {
        let path = config_dir().unwrap();
        assert!(
            path.ends_with("canopy"),
            "config_dir should end with 'canopy', got: {path:?}"
        );
    }

    #[test]
    fn data_dir_ends_with_canopy() {
        let path = data_dir().unwrap();
        assert!(path.ends_with("canopy"), "got: {path:?}");
    }

    #[test]
    fn config_file_has_correct_name() {
        let path = config_file().unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "config.toml");
        assert!(path.parent().unwrap().ends_with("canopy"));
    }

    #[test]
    fn env_file_lives_next_to_config() {
        let env = env_file().unwrap();
        assert_eq!(env.parent(), config_file().unwrap().parent());
        assert_eq!(env.file_name().unwrap().to_str().unwrap(), ".env");
    }

    #[test]
    fn webview_data_dir_is_inside_data_dir() {
        let webview = webview_data_dir().unwrap();
        let data = data_dir().unwrap();
        assert!(
            webview.starts_with(&data),
            "webview_data_dir should be inside data_dir: {webview:?} vs {data:?}"
        );
    }
}
