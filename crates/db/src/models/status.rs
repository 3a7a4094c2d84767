//! Status helper enums mapping to SMALLSERIAL/SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding `*_statuses` database table.

use questboard_core::mission_queue::{
    state_machine, STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_PENDING,
};
use serde::ser::Error as _;
use serde::Serializer;

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// Look up a variant by database status ID.
            pub fn from_id(id: StatusId) -> Option<Self> {
                match id {
                    $( x if x == $val => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Mission queue slot status.
    MissionStatus {
        Pending = STATUS_PENDING,
        InProgress = STATUS_IN_PROGRESS,
        Completed = STATUS_COMPLETED,
    }
}

impl MissionStatus {
    /// Wire name, matching `mission_statuses.name`.
    pub fn name(self) -> &'static str {
        state_machine::status_name(self.id())
    }
}

/// Serialize a raw status ID as its wire name (`"pending"`, ...).
pub fn serialize_status_name<S: Serializer>(id: &StatusId, serializer: S) -> Result<S::Ok, S::Error> {
    let status = MissionStatus::from_id(*id)
        .ok_or_else(|| S::Error::custom(format!("unknown mission status id {id}")))?;
    serializer.serialize_str(status.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_seed_order() {
        assert_eq!(MissionStatus::Pending.id(), 1);
        assert_eq!(MissionStatus::InProgress.id(), 2);
        assert_eq!(MissionStatus::Completed.id(), 3);
    }

    #[test]
    fn from_id_round_trips_known_ids() {
        assert_eq!(MissionStatus::from_id(2), Some(MissionStatus::InProgress));
        assert_eq!(MissionStatus::from_id(0), None);
    }

    #[test]
    fn names() {
        assert_eq!(MissionStatus::InProgress.name(), "in_progress");
    }
}
