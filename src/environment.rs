use std::fmt::{Debug, Display, Formatter};

/// Represents the backend deployments the dashboard can point at.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The deployed dashboard backend.
    #[default]
    Production,
    /// A custom backend, e.g. a local development server.
    Custom { backend_base_url: String },
}

impl Environment {
    /// Returns the base URL of the backend serving the weather and news feeds.
    pub fn backend_base_url(&self) -> String {
        match self {
            Environment::Production => "https://weather-backend-lit0.onrender.com".to_string(),
            Environment::Custom { backend_base_url } => backend_base_url.clone(),
        }
    }

    /// Build an environment from an optional CLI override.
    pub fn from_override(backend_url: Option<String>) -> Self {
        match backend_url {
            Some(url) => Environment::Custom {
                backend_base_url: url.trim_end_matches('/').to_string(),
            },
            None => Environment::Production,
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.backend_base_url())
    }
}
