//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Plain lookups and inserts take `&PgPool`; methods that take part in a
//! queue unit of work accept any [`sqlx::PgExecutor`], so callers can pass
//! the pool, a pooled connection, or an open transaction.

pub mod character_mission_repo;
pub mod character_repo;
pub mod mission_repo;

pub use character_mission_repo::CharacterMissionRepo;
pub use character_repo::CharacterRepo;
pub use mission_repo::MissionRepo;
