use crate::error::Result;
use crate::llm::{
    AnswerKind, DefinitionResult, GatewayConfig, GeminiClient, GenerationService,
    request_definition, request_image, request_quick_answer, request_speech, request_story,
};

/// Entry point for the five content operations.
///
/// Owns the generation service and its configuration. Operations take `&self`
/// and are independent, so one gateway can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct PromptGateway<S = GeminiClient> {
    service: S,
    config: GatewayConfig,
}

impl PromptGateway<GeminiClient> {
    pub fn new(config: GatewayConfig) -> Self {
        Self::from_client(GeminiClient::new(config))
    }

    /// Wraps an existing client, reading models and voice from the client's own config.
    pub fn from_client(client: GeminiClient) -> Self {
        let config = client.config().clone();
        Self {
            service: client,
            config,
        }
    }

    /// Builds a gateway from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(GatewayConfig::from_env()?))
    }

    pub async fn verify_api_key(&self) -> Result<()> {
        self.service.healthcheck().await
    }
}

impl<S: GenerationService> PromptGateway<S> {
    /// Pairs any service with the config that picks models and voice.
    ///
    /// The service keeps its own connection settings. For a `GeminiClient`
    /// prefer [`PromptGateway::from_client`], which cannot disagree with it.
    pub fn with_service(service: S, config: GatewayConfig) -> Self {
        Self { service, config }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub async fn get_definition(
        &self,
        term: &str,
        native_lang: &str,
        target_lang: &str,
    ) -> Result<DefinitionResult> {
        request_definition(&self.service, &self.config, term, native_lang, target_lang).await
    }

    /// `None` when the image could not be produced for any reason.
    pub async fn generate_image(&self, term: &str, target_lang: &str) -> Option<String> {
        request_image(&self.service, &self.config, term, target_lang).await
    }

    /// `None` when audio could not be produced for any reason.
    pub async fn generate_speech(&self, text: &str) -> Option<String> {
        request_speech(&self.service, &self.config, text).await
    }

    pub async fn generate_story(
        &self,
        words: &[String],
        native_lang: &str,
        target_lang: &str,
    ) -> Result<String> {
        request_story(&self.service, &self.config, words, native_lang, target_lang).await
    }

    pub async fn get_quick_ai_answer(
        &self,
        term: &str,
        kind: AnswerKind,
        native_lang: &str,
        target_lang: &str,
    ) -> Result<String> {
        request_quick_answer(
            &self.service,
            &self.config,
            term,
            kind,
            native_lang,
            target_lang,
        )
        .await
    }
}
