use async_trait::async_trait;
use chatbot_service::config::{ChatbotConfig, CommonConfig, GoogleConfig, ModelConfig};
use chatbot_service::services::providers::{ProviderError, TextProvider};
use chatbot_service::startup::Application;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub struct TestApp {
    pub address: String,
}

pub fn test_config() -> ChatbotConfig {
    // Port 0 = random port; empty API key selects the mock provider.
    ChatbotConfig {
        common: CommonConfig { port: 0 },
        models: ModelConfig {
            text_model: "gemini-2.0-flash".to_string(),
        },
        google: GoogleConfig {
            api_key: String::new(),
        },
    }
}

impl TestApp {
    /// Spawn the app with the default provider selection (mock, no API key).
    pub async fn spawn() -> Self {
        let app = Application::build(test_config())
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    /// Spawn the app with an explicit provider double.
    pub async fn spawn_with_provider(provider: Arc<dyn TextProvider>) -> Self {
        let app = Application::build_with_provider(test_config(), provider)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    async fn run(app: Application) -> Self {
        // The listener is bound during build, so requests issued right after
        // spawning will connect.
        let port = app.port();
        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
        }
    }
}

/// Provider double that records every prompt it receives.
pub struct CapturingProvider {
    pub answer: String,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl TextProvider for CapturingProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.answer.clone())
    }
}

/// Provider double that always fails with the given message.
pub struct FailingProvider {
    pub message: String,
}

#[async_trait]
impl TextProvider for FailingProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(ProviderError::ApiError(self.message.clone()))
    }
}

/// Provider double that records whether it was ever invoked.
pub struct TrackingProvider {
    pub invoked: Arc<AtomicBool>,
}

#[async_trait]
impl TextProvider for TrackingProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        self.invoked.store(true, Ordering::SeqCst);
        Err(ProviderError::ApiError(
            "provider should not have been reached".to_string(),
        ))
    }
}
