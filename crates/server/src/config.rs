use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            _ => Self::Dev,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "development",
            Self::Prod => "production",
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub env: Environment,
    /// Upstream credential; `None` leaves the gateway in unconfigured mode
    /// where movie and genre endpoints answer 503 without contacting upstream.
    pub tmdb_api_key: Option<String>,
}

impl Config {
    pub fn new(env: Environment, tmdb_api_key: Option<String>) -> Self {
        let tmdb_api_key = tmdb_api_key.filter(|key| !key.trim().is_empty());
        Self { env, tmdb_api_key }
    }
}
