use std::sync::Arc;

use crate::analysis::github::SignalSource;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable GitHub signal source. Default: `GithubClient` against the public API.
    pub github: Arc<dyn SignalSource>,
}
