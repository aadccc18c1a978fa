//! Prompt gateway for a language-learning app.
//!
//! Builds prompts for a generative-language service and reshapes its answers
//! into definitions, illustrations, audio and short texts.
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use lexigen::{AnswerKind, PromptGateway};
//!
//! let gateway = PromptGateway::from_env()?;
//! let definition = gateway.get_definition("run", "English", "Spanish").await?;
//! let image = gateway.generate_image("correr", "Spanish").await;
//! let tip = gateway
//!     .get_quick_ai_answer("correr", AnswerKind::Mistake, "English", "Spanish")
//!     .await?;
//! # let _ = (definition, image, tip);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod gateway;
pub mod llm;
pub mod seed;
mod utils;

pub use error::{GatewayError, Result};
pub use gateway::PromptGateway;
pub use llm::{
    AnswerKind, DefinitionResult, Example, GatewayConfig, GeminiClient, GenerationService,
};
pub use seed::term_seed;
