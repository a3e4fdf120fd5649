//! Health check endpoint.

use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

#[cfg(not(target_os = "windows"))]
const SHELL: &str = "sh";
#[cfg(target_os = "windows")]
const SHELL: &str = "cmd";

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: HealthComponents,
    pub metrics: HealthMetrics,
}

#[derive(Serialize)]
pub struct HealthComponents {
    pub shell: bool,
    pub llm_configured: bool,
}

#[derive(Serialize)]
pub struct HealthMetrics {
    pub pending_requests: usize,
}

/// Check that the shell used for command execution is on PATH
fn check_shell() -> bool {
    which::which(SHELL).is_ok()
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    let shell_healthy = check_shell();
    let llm_configured = state.llm_configured();

    let pending_requests = state
        .active_requests
        .load(std::sync::atomic::Ordering::SeqCst);

    let status = if shell_healthy && llm_configured {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthStatus {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        components: HealthComponents {
            shell: shell_healthy,
            llm_configured,
        },
        metrics: HealthMetrics { pending_requests },
    })
}
