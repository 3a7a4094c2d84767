//! Shared query parameter types for API handlers.

use questboard_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use questboard_core::types::DbId;
use serde::Deserialize;

use crate::error::AppError;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// `skip` is accepted as an alias of `offset`.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    #[serde(alias = "skip")]
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Clamped `(limit, offset)` ready for the repository layer.
    pub fn resolve(&self) -> (i64, i64) {
        (
            clamp_limit(self.limit, DEFAULT_LIMIT, MAX_LIMIT),
            clamp_offset(self.offset),
        )
    }
}

/// `?character_id=` for mission-scoped queue actions.
///
/// Optional at the extractor level so a missing parameter surfaces as a JSON
/// `BAD_REQUEST` rather than axum's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CharacterIdParam {
    pub character_id: Option<DbId>,
}

impl CharacterIdParam {
    pub fn require(&self) -> Result<DbId, AppError> {
        self.character_id.ok_or_else(|| {
            AppError::BadRequest("character_id query parameter is required".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults() {
        assert_eq!(PaginationParams::default().resolve(), (100, 0));
    }

    #[test]
    fn resolve_clamps() {
        let p = PaginationParams {
            limit: Some(1000),
            offset: Some(-4),
        };
        assert_eq!(p.resolve(), (100, 0));
    }

    #[test]
    fn missing_character_id_is_bad_request() {
        let err = CharacterIdParam::default().require().unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn present_character_id_resolves() {
        let p = CharacterIdParam {
            character_id: Some(7),
        };
        assert_eq!(p.require().unwrap(), 7);
    }
}
