//! cmdr-core - Core library for cmdr
//!
//! Turns a natural-language request into shell commands with a hosted LLM and
//! runs them:
//!
//! - **prompt**: instruction template around the user request
//! - **llm**: LLM client trait, safety settings, Gemini client
//! - **parser**: model reply to command list
//! - **executor**: sequential shell execution and output aggregation
//! - **agent**: the request pipeline tying these together

pub mod agent;
pub mod error;
pub mod executor;
pub mod llm;
pub mod parser;
pub mod prompt;
pub mod types;

// Re-export commonly used types
pub use agent::{CommandAgent, SAFETY_REFUSAL_MESSAGE};
pub use error::{Error, Result};
pub use executor::{CommandOutcome, CommandRunner, ShellRunner};
pub use llm::{GeminiClient, LlmClient};
pub use types::{AgentRequest, AgentResponse};
