use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request to the generation service failed")]
    Transport(#[from] reqwest::Error),

    #[error("generation service returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("generation service response could not be decoded")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("generation service returned no text")]
    GenerationFailure,

    #[error("generation service returned no inline {0} data")]
    MissingInlineData(&'static str),

    #[error("definition response is not valid JSON")]
    Decode(#[from] serde_json::Error),

    #[error("definition response is malformed: {0}")]
    InvalidDefinition(String),
}

pub type Result<T> = std::result::Result<T, GatewayError>;
