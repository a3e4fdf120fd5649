//! Application state.

use cmdr_core::{CommandAgent, GeminiClient, ShellRunner};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
    /// Request pipeline, shared by all requests
    pub agent: CommandAgent,
    /// Server start time
    pub start_time: Instant,
    /// Requests currently being handled
    pub active_requests: Arc<AtomicUsize>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config, agent: CommandAgent) -> Arc<Self> {
        Arc::new(Self {
            config: Arc::new(config),
            agent,
            start_time: Instant::now(),
            active_requests: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Whether an API key was provided at startup
    pub fn llm_configured(&self) -> bool {
        self.config.api_key.is_some()
    }
}

/// Build the agent from configuration: Gemini for generation, the system
/// shell for execution.
pub fn build_agent(config: &Config) -> anyhow::Result<CommandAgent> {
    let llm = GeminiClient::new(config.api_key.clone())?
        .with_base_url(config.base_url.clone())
        .with_model(config.model.clone());

    let mut runner = ShellRunner::new();
    if let Some(ref dir) = config.working_dir {
        runner = runner.with_working_directory(dir);
    }

    Ok(CommandAgent::new(Arc::new(llm), Arc::new(runner)))
}

/// Counts a request as active until dropped
pub struct ActiveRequest {
    counter: Arc<AtomicUsize>,
}

impl ActiveRequest {
    pub fn start(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self {
            counter: Arc::clone(counter),
        }
    }
}

impl Drop for ActiveRequest {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}
