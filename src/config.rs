use crate::domain::error::DomainError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Voyage,
    Mock,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::OpenAi => write!(f, "openai"),
            ProviderKind::Voyage => write!(f, "voyage"),
            ProviderKind::Mock => write!(f, "mock"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "voyage" => Ok(ProviderKind::Voyage),
            "mock" => Ok(ProviderKind::Mock),
            _ => Err(format!("Unknown embedding provider: {s}")),
        }
    }
}

/// Embedding configuration sourced from the environment.
///
/// The API key is the gating credential: remote providers refuse to start
/// without it, before any store operation runs. The mock provider needs
/// none.
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderKind,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        let provider = match std::env::var("SEMSEARCH_EMBEDDING_PROVIDER") {
            Ok(s) => s.parse().map_err(DomainError::Config)?,
            Err(_) => ProviderKind::OpenAi,
        };
        let api_key = std::env::var("SEMSEARCH_EMBEDDING_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        let model = std::env::var("SEMSEARCH_EMBEDDING_MODEL").ok();
        Ok(Self {
            provider,
            api_key,
            model,
        })
    }

    /// The credential, or a fatal `Config` error when the provider needs one
    /// and it is absent.
    pub fn require_api_key(&self) -> Result<String, DomainError> {
        self.api_key.clone().ok_or_else(|| {
            DomainError::Config(format!(
                "SEMSEARCH_EMBEDDING_API_KEY is required for the {} provider",
                self.provider
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parses_case_insensitively() {
        assert_eq!("OpenAI".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert_eq!("voyage".parse::<ProviderKind>().unwrap(), ProviderKind::Voyage);
        assert_eq!("MOCK".parse::<ProviderKind>().unwrap(), ProviderKind::Mock);
    }

    #[test]
    fn test_unknown_provider_rejected() {
        assert!("cohere".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let cfg = Config {
            provider: ProviderKind::OpenAi,
            api_key: None,
            model: None,
        };
        let err = cfg.require_api_key().unwrap_err();
        assert!(matches!(err, crate::domain::error::DomainError::Config(_)));
    }
}
