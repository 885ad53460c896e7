//! Concrete application state for the demo server.

use recs_core::{models::RecomputeMode, ports::Application};
use recs_sqlite::Db;

/// Application state: the SQLite repositories plus the recompute policy.
#[derive(Clone)]
pub struct DemoApp {
    /// The SQLite-backed repository
    pub db: Db,
    /// When score aggregation happens
    pub recompute: RecomputeMode,
}

impl Application for DemoApp {
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.db
    }

    fn recompute_mode(&self) -> RecomputeMode {
        self.recompute
    }
}
