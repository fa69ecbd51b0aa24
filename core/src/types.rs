//! Wire DTOs for the clinic API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! the integration tests catch any drift between the two crates. The server
//! is authoritative for every record: the client only ever holds snapshots.

use serde::{Deserialize, Serialize};

/// An animal registered at the clinic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Animal {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub age: u32,
}

/// A service (visit, vaccine, procedure) recorded for one animal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Service {
    pub id: i64,
    pub animal_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// Server-assigned timestamp, kept as the raw string the server sent.
    pub date: String,
}

/// Request payload for registering an animal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAnimal {
    pub name: String,
    pub species: String,
    pub age: u32,
}

/// Request payload for recording a service. The animal is part of the path,
/// not the body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewService {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}
