use serde::{Deserialize, Serialize};

/// A user of the system. Users carry no attributes beyond their id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub user_id: String,
}
