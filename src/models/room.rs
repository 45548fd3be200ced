//! Room model. Rooms are fungible beyond identity.

use serde::{Deserialize, Serialize};

/// A room that can host one session per (day, hour).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room name (identity key).
    pub name: String,
}

impl Room {
    /// Creates a new room.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
