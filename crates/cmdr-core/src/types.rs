//! Request and response bodies shared by the server and clients.

use serde::{Deserialize, Serialize};

/// Body of `POST /agent`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRequest {
    /// Free-text description of what the user wants done
    pub msg: String,
}

/// Reply from `POST /agent`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Combined output of every executed command, or the refusal notice
    pub output: String,
}

impl AgentResponse {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}
