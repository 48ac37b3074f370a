use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Forwards domain messages to the process-wide `tracing` subscriber.
struct ConsoleBridge;

impl DomainLogger for ConsoleBridge {
    fn info(&self, msg: &str) {
        tracing::info!(target: "rendezvous_planner::domain", "{}", msg);
    }
    fn warn(&self, msg: &str) {
        tracing::warn!(target: "rendezvous_planner::domain", "{}", msg);
    }
    fn error(&self, msg: &str) {
        tracing::error!(target: "rendezvous_planner::domain", "{}", msg);
    }
}

/// Console-backed DomainLogger, the default outside of tests
pub fn init_console_logger() -> Arc<dyn DomainLogger> {
    Arc::new(ConsoleBridge {})
}
