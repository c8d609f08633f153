use std::path::PathBuf;

use crate::core::error::{AppError, Result};

/// Where the serving host's name is read from: an environment variable
/// first, then a file holding the name.
#[derive(Debug, Clone)]
pub struct HostnameLookup {
    env_var: String,
    file: PathBuf,
}

impl Default for HostnameLookup {
    fn default() -> Self {
        Self::new("HOSTNAME", "/etc/hostname")
    }
}

impl HostnameLookup {
    pub fn new(env_var: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            env_var: env_var.into(),
            file: file.into(),
        }
    }

    pub async fn resolve(&self) -> Result<String> {
        let from_env = std::env::var(&self.env_var).ok();
        let from_file = match from_env {
            Some(ref value) if !value.trim().is_empty() => None,
            _ => tokio::fs::read_to_string(&self.file).await.ok(),
        };

        pick_hostname(from_env, from_file).ok_or(AppError::HostnameFailure)
    }
}

fn pick_hostname(from_env: Option<String>, from_file: Option<String>) -> Option<String> {
    [from_env, from_file]
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_wins_over_file() {
        assert_eq!(
            pick_hostname(Some("pod-a".to_string()), Some("node-1\n".to_string())),
            Some("pod-a".to_string())
        );
    }

    #[test]
    fn test_blank_env_falls_back_to_file() {
        assert_eq!(
            pick_hostname(Some("  ".to_string()), Some("node-1\n".to_string())),
            Some("node-1".to_string())
        );
    }

    #[test]
    fn test_nothing_available() {
        assert_eq!(pick_hostname(None, Some("\n".to_string())), None);
        assert_eq!(pick_hostname(None, None), None);
    }

    #[tokio::test]
    async fn test_resolve_without_sources_fails() {
        let lookup = HostnameLookup::new(
            "CATEGORY_SERVICE_UNSET_HOSTNAME_VAR",
            "/nonexistent/category-service/hostname",
        );
        assert!(matches!(
            lookup.resolve().await,
            Err(AppError::HostnameFailure)
        ));
    }

    #[tokio::test]
    async fn test_resolve_reads_env_var() {
        std::env::set_var("CATEGORY_SERVICE_LOOKUP_TEST_HOSTNAME", "  pod-7 ");
        let lookup = HostnameLookup::new(
            "CATEGORY_SERVICE_LOOKUP_TEST_HOSTNAME",
            "/nonexistent/category-service/hostname",
        );
        assert_eq!(lookup.resolve().await.unwrap(), "pod-7");
    }
}
