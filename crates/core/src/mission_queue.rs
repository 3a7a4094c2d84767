//! Mission queue slot statuses and state machine.
//!
//! This module lives in `core` (zero internal deps) so it can be used by both
//! the repository layer and the API. The status IDs match the
//! `mission_statuses` seed data (1-based SMALLSERIAL).

// ---------------------------------------------------------------------------
// Status IDs
// ---------------------------------------------------------------------------

/// Slot accepted but not yet started.
pub const STATUS_PENDING: i16 = 1;

/// Slot started; still part of the active queue.
pub const STATUS_IN_PROGRESS: i16 = 2;

/// Slot completed. Terminal, retained as history.
pub const STATUS_COMPLETED: i16 = 3;

/// Statuses that count toward queue size and head selection.
pub const ACTIVE_STATUSES: [i16; 2] = [STATUS_PENDING, STATUS_IN_PROGRESS];

/// First queue position handed out to a character with no slots.
pub const FIRST_QUEUE_POSITION: i32 = 1;

/// Next queue position after the highest one ever assigned to a character.
///
/// Completed slots keep their positions, so `max_assigned` must include
/// them. Positions are never reused.
pub fn next_queue_position(max_assigned: Option<i32>) -> i32 {
    match max_assigned {
        Some(max) => max.saturating_add(1),
        None => FIRST_QUEUE_POSITION,
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

pub mod state_machine {
    use super::{STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_PENDING};

    /// Returns the set of valid target status IDs reachable from `from_status`.
    ///
    /// Pending slots may be completed directly (accept-then-complete flow);
    /// starting is optional.
    pub fn valid_transitions(from_status: i16) -> &'static [i16] {
        match from_status {
            STATUS_PENDING => &[STATUS_IN_PROGRESS, STATUS_COMPLETED],
            STATUS_IN_PROGRESS => &[STATUS_COMPLETED],
            STATUS_COMPLETED => &[],
            _ => &[],
        }
    }

    /// Check whether a transition from `from` to `to` is valid.
    pub fn can_transition(from: i16, to: i16) -> bool {
        valid_transitions(from).contains(&to)
    }

    /// Validate a state transition, returning an error message for invalid ones.
    pub fn validate_transition(from: i16, to: i16) -> Result<(), String> {
        if can_transition(from, to) {
            Ok(())
        } else {
            Err(format!(
                "Invalid transition: {} ({from}) -> {} ({to})",
                status_name(from),
                status_name(to)
            ))
        }
    }

    /// Wire name for a status ID, matching `mission_statuses.name`.
    pub fn status_name(id: i16) -> &'static str {
        match id {
            STATUS_PENDING => "pending",
            STATUS_IN_PROGRESS => "in_progress",
            STATUS_COMPLETED => "completed",
            _ => "unknown",
        }
    }
}
