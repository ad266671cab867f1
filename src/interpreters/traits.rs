use crate::models::InterpretationResult;
use async_trait::async_trait;

/// Common trait for everything that turns a free-text query into filters.
/// Implementations never fail: a degraded interpretation beats no search.
#[async_trait]
pub trait Interpreter: Send + Sync {
    /// Interpret the query
    async fn interpret(&self, query: &str) -> InterpretationResult;

    /// Short name used in logs
    fn source_name(&self) -> &'static str;
}
