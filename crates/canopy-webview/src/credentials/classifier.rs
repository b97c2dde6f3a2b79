use canopy_config::schema::CredentialsConfig;

#[derive(Debug, Clone)]
struct ServicePattern {
    name: String,
    /// Lower-cased.
    patterns: Vec<String>,
}

/// Ordered URL-substring classifier. The first service with a matching
/// pattern wins.
#[derive(Debug, Clone, Default)]
pub struct ServiceClassifier {
    services: Vec<ServicePattern>,
}

impl ServiceClassifier {
    pub fn from_config(config: &CredentialsConfig) -> Self {
        let services = config
            .services
            .iter()
            .map(|s| ServicePattern {
                name: s.name.clone(),
                patterns: s
                    .patterns
                    .iter()
                    .map(|p| p.trim().to_lowercase())
                    .filter(|p| !p.is_empty())
                    .collect(),
            })
            .collect();
        Self { services }
    }

    /// Service name for a URL, compared case-insensitively.
    pub fn classify(&self, url: &str) -> Option<&str> {
        let url = url.to_lowercase();
        self.services
            .iter()
            .find(|s| s.patterns.iter().any(|p| url.contains(p.as_str())))
            .map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
