//! Standard app list validation: well-formed, unique ids and web URLs.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::schema::ShellConfig;

static APP_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]{0,63}$").unwrap());

pub(crate) fn validate_apps(errors: &mut Vec<String>, config: &ShellConfig) {
    let mut seen = HashSet::new();

    for (i, app) in config.apps.iter().enumerate() {
        let id = app.id.trim().to_lowercase();
        if !APP_ID_RE.is_match(&id) {
            errors.push(format!(
                "apps[{i}].id = {:?} must be 1-64 chars of a-z, 0-9, '-' or '_'",
                app.id
            ));
        } else if !seen.insert(id.clone()) {
            errors.push(format!("apps[{i}].id = {id:?} is a duplicate"));
        }

        if !(app.url.starts_with("https://") || app.url.starts_with("http://")) {
            errors.push(format!(
                "apps[{i}].url = {:?} must be an http(s) URL",
                app.url
            ));
        }
    }
}
