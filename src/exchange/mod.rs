//! Persistence and exchange of automata.
//!
//! The engine itself performs no I/O. This module only converts between
//! [`Automaton`] values and a serializable, list-based [`AutomatonRecord`],
//! and wraps records in a versioned [`Snapshot`] that can be encoded as JSON
//! or compact binary. Where the bytes go is up to the caller.
//!
//! Restoring always replays the record through the builder, so a snapshot
//! cannot smuggle in an automaton the builder would have refused.

use crate::core::Automaton;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;
mod record;

pub use error::ExchangeError;
pub use record::{AutomatonRecord, TransitionRecord};

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Wire encoding used by [`Snapshot::encode`] and [`Snapshot::decode`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Pretty-printed JSON, readable by other tools
    #[default]
    Json,
    /// bincode
    Binary,
}

/// A serializable copy of an automaton with identifying metadata.
///
/// # Example
///
/// ```rust
/// use automaton_engine::core::{Automaton, AutomatonKind};
/// use automaton_engine::exchange::{Encoding, Snapshot};
///
/// let a = Automaton::new(AutomatonKind::Dfa, ["0", "1"]).unwrap();
/// let (a, _) = a.add_state();
///
/// let bytes = Snapshot::capture(&a).encode(Encoding::Binary).unwrap();
/// let restored = Snapshot::decode(Encoding::Binary, &bytes)
///     .unwrap()
///     .restore()
///     .unwrap();
///
/// assert_eq!(restored, a);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub exported_at: DateTime<Utc>,

    /// The automaton itself
    pub automaton: AutomatonRecord,
}

impl Snapshot {
    /// Take a snapshot of `automaton` stamped with a fresh id and the
    /// current time.
    pub fn capture(automaton: &Automaton) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            exported_at: Utc::now(),
            automaton: AutomatonRecord::from(automaton),
        }
    }

    /// Rebuild the automaton, rejecting snapshots from other format versions.
    pub fn restore(&self) -> Result<Automaton, ExchangeError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(ExchangeError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Automaton::try_from(self.automaton.clone())
    }

    pub fn to_json(&self) -> Result<String, ExchangeError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExchangeError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ExchangeError> {
        serde_json::from_str(json)
            .map_err(|e| ExchangeError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ExchangeError> {
        bincode::serialize(self).map_err(|e| ExchangeError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExchangeError> {
        bincode::deserialize(bytes)
            .map_err(|e| ExchangeError::DeserializationFailed(e.to_string()))
    }

    pub fn encode(&self, encoding: Encoding) -> Result<Vec<u8>, ExchangeError> {
        match encoding {
            Encoding::Json => self.to_json().map(String::into_bytes),
            Encoding::Binary => self.to_bytes(),
        }
    }

    pub fn decode(encoding: Encoding, bytes: &[u8]) -> Result<Self, ExchangeError> {
        match encoding {
            Encoding::Json => {
                let json = std::str::from_utf8(bytes)
                    .map_err(|e| ExchangeError::DeserializationFailed(e.to_string()))?;
                Self::from_json(json)
            }
            Encoding::Binary => Self::from_bytes(bytes),
        }
    }
}
