//! Request orchestration.
//!
//! [`CommandAgent`] ties the pipeline together:
//!
//! 1. build the prompt from the request text
//! 2. ask the LLM for commands (dangerous content blocked only at high severity)
//! 3. split the reply into commands
//! 4. run them one by one and join their output
//!
//! If the model returns no text nothing is executed and a fixed notice is
//! returned instead.

use crate::error::Result;
use crate::executor::{self, CommandRunner};
use crate::llm::{self, LlmClient};
use crate::parser;
use crate::prompt;
use crate::types::AgentResponse;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Returned when the provider declines to answer.
pub const SAFETY_REFUSAL_MESSAGE: &str =
    "Cannot execute the command for safety reasons imposed by the LLM Operator.";

/// Turns natural-language requests into executed shell commands.
///
/// Holds no per-request state; one instance serves concurrent requests.
#[derive(Clone)]
pub struct CommandAgent {
    llm: Arc<dyn LlmClient>,
    runner: Arc<dyn CommandRunner>,
}

impl CommandAgent {
    /// Create an agent from an LLM client and a command runner
    pub fn new(llm: Arc<dyn LlmClient>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { llm, runner }
    }

    /// Handle one request end to end.
    ///
    /// Per-command failures are embedded in the output. Provider errors and
    /// commands that cannot be launched are returned as `Err`.
    pub async fn handle_request(&self, request: &str) -> Result<AgentResponse> {
        let prompt = prompt::build_prompt(request);

        let reply = self
            .llm
            .generate(&prompt, &llm::command_safety_settings())
            .await?;

        let text = match reply {
            Some(text) if !text.is_empty() => text,
            _ => {
                warn!("LLM returned no text, refusing to execute");
                return Ok(AgentResponse::new(SAFETY_REFUSAL_MESSAGE));
            }
        };

        let commands = parser::parse_commands(&text);
        debug!(?commands, "Commands received");
        info!(count = commands.len(), "Executing commands");

        let output = executor::execute_commands(self.runner.as_ref(), &commands).await?;
        Ok(AgentResponse::new(output))
    }
}
