//! Domain logic for the questboard mission system.
//!
//! Everything here is free of database and HTTP dependencies so it can be
//! shared by the persistence layer, the API server and tests alike.

pub mod error;
pub mod mission_queue;
pub mod pagination;
pub mod progression;
pub mod types;
pub mod validation;
