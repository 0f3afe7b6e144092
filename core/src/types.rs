//! Domain DTOs for the heroes API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently
//! so the client never depends on Axum internals. Integration tests catch any
//! schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// Server-assigned hero identifier.
pub type HeroId = u32;

/// A hero as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

/// Request payload for creating a hero. The backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
