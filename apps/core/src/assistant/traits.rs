use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One prompt exchange with a language model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// System-level instructions
    pub system: String,
    /// User prompt, document text included
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Defines the public interface for a remote language model.
///
/// This trait abstracts the specific backend, allowing a hosted API, a local
/// server or a test double to be used interchangeably.
#[async_trait]
pub trait LanguageModel: Send + Sync + 'static {
    /// Model identifier reported alongside results it produced.
    fn name(&self) -> &str;

    /// Generates a complete text response for the request.
    async fn complete(&self, request: CompletionRequest) -> Result<String, AppError>;
}

/// A model that is never available. Every call fails, so callers fall back.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineModel;

#[async_trait]
impl LanguageModel for OfflineModel {
    fn name(&self) -> &str {
        "offline"
    }

    async fn complete(&self, _request: CompletionRequest) -> Result<String, AppError> {
        Err(AppError::Model("no language model configured".to_string()))
    }
}
