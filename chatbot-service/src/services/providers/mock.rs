//! Mock provider implementation for development and testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;

/// Mock text provider, used when no API key is configured.
pub struct MockTextProvider {
    enabled: bool,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        Ok(format!("Mock response for: {}", prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_mock_reports_not_configured() {
        let provider = MockTextProvider::new(false);
        assert!(matches!(
            provider.generate("hi").await,
            Err(ProviderError::NotConfigured(_))
        ));
    }

    #[tokio::test]
    async fn enabled_mock_echoes_the_prompt() {
        let provider = MockTextProvider::new(true);
        let answer = provider.generate("hi").await.unwrap();
        assert_eq!(answer, "Mock response for: hi");
    }
}
