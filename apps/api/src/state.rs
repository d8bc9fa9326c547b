use std::sync::Arc;

use crate::analysis::evaluator::Evaluator;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The evaluator is constructed once during process initialization and passed
/// in explicitly rather than held as a global. Behind `Arc<dyn Evaluator>` so
/// tests can swap in stubs.
#[derive(Clone)]
pub struct AppState {
    pub evaluator: Arc<dyn Evaluator>,
    pub config: Config,
}
