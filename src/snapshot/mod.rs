//! Versioned, serializable captures of a form's state.
//!
//! A snapshot records what can round-trip through a wire format: values,
//! validity/touched flags and connection lists. Validators are function
//! values and therefore excluded; restoring a snapshot yields a
//! validator-free form whose flags are trusted as captured.

use crate::core::{FieldId, FieldMap, FieldState, FieldValue, FormState};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable view of a single field.
/// Does NOT include validators (not serializable).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub value: FieldValue,
    pub is_valid: bool,
    pub is_touched: bool,
    pub connected_field_ids: Vec<FieldId>,
}

/// Serializable point-in-time capture of a whole form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FormSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was captured
    pub captured_at: DateTime<Utc>,

    /// Fields in declaration order
    pub fields: IndexMap<FieldId, FieldSnapshot>,

    /// Aggregate validity at capture time
    pub is_valid: bool,
}

impl FormSnapshot {
    /// Capture the current state of a form.
    pub fn capture(state: &FormState) -> Self {
        let fields = state
            .fields()
            .iter()
            .map(|(id, field)| {
                (
                    id.clone(),
                    FieldSnapshot {
                        value: field.value().clone(),
                        is_valid: field.is_valid(),
                        is_touched: field.is_touched(),
                        connected_field_ids: field.connected_field_ids().to_vec(),
                    },
                )
            })
            .collect();

        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            captured_at: Utc::now(),
            fields,
            is_valid: state.is_valid(),
        }
    }

    /// Rebuild a form state from this snapshot.
    ///
    /// Restored fields carry no validators; callers wanting live rules must
    /// re-create the fields and replay the captured values through the
    /// engine instead.
    pub fn restore(&self) -> FormState {
        let mut fields = FieldMap::new();
        for (id, snapshot) in &self.fields {
            fields.insert(
                id.clone(),
                FieldState::new(
                    snapshot.value.clone(),
                    snapshot.is_valid,
                    snapshot.is_touched,
                    Vec::new(),
                    snapshot.connected_field_ids.clone(),
                ),
            );
        }
        FormState::new(fields, self.is_valid)
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON, rejecting unsupported format versions.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from compact binary, rejecting unsupported format versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    fn check_version(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(())
    }
}
