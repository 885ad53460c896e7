use serde::{Deserialize, Serialize};

/// When score aggregation happens.
///
/// This is an explicit configuration value carried by the application state
/// and passed into the service operations, never a process-wide mutable
/// flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecomputeMode {
    /// Ranking reads recompute scores from the recorded interests and
    /// upsert the score cache as a side effect. The default.
    #[default]
    OnRead,
    /// Recording an interest recomputes and upserts the cached score for
    /// the affected product and category; ranking reads serve from the
    /// cache.
    OnWrite,
}
