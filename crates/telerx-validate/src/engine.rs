use crate::constraints::{ConstraintSet, PresenceConstraints, SchemaConstraints};
use crate::error::Result;
use crate::outcome::ValidationOutcome;
use crate::snapshot::StateSnapshot;

/// Error reported when the payload does not decode against the snapshot
/// model.
pub const DECODE_ERROR: &str = "failed to parse message";

/// Default constraint schema shipped with the crate.
const EMBEDDED_SCHEMA: &str = include_str!("../schemas/state.schema.json");

/// Result of one `parse_and_validate` call.
///
/// The snapshot is present exactly when decoding succeeded; a decoded
/// snapshot may still be semantically invalid, in which case the outcome
/// says why.
#[derive(Debug)]
pub struct Validation {
    pub snapshot: Option<StateSnapshot>,
    pub outcome: ValidationOutcome,
}

/// Decodes logical messages and evaluates semantic constraints.
///
/// The constraint tier is fixed at construction. The validator keeps no
/// per-message state — every call returns a fresh [`Validation`].
pub struct StateValidator {
    constraints: Box<dyn ConstraintSet>,
}

impl StateValidator {
    /// Build a validator using the embedded constraint schema. Falls back
    /// to structural presence checks if the schema fails to compile.
    pub fn new() -> Self {
        match SchemaConstraints::new(EMBEDDED_SCHEMA) {
            Ok(constraints) => Self {
                constraints: Box::new(constraints),
            },
            Err(err) => {
                tracing::warn!(error = %err, "embedded schema rejected, using presence checks");
                Self::presence_only()
            }
        }
    }

    /// Build a validator from an explicit schema document.
    pub fn with_schema(schema_json: &str) -> Result<Self> {
        let constraints = SchemaConstraints::new(schema_json)?;
        Ok(Self {
            constraints: Box::new(constraints),
        })
    }

    /// Build a validator that only applies structural presence checks.
    pub fn presence_only() -> Self {
        Self {
            constraints: Box::new(PresenceConstraints),
        }
    }

    /// Decode one logical message and evaluate it.
    ///
    /// Structural decode failure short-circuits: the outcome carries the
    /// single decode error and no semantic checks run.
    pub fn parse_and_validate(&self, bytes: &[u8]) -> Validation {
        let snapshot: StateSnapshot = match serde_json::from_slice(bytes) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::debug!(error = %err, len = bytes.len(), "snapshot decode failed");
                return Validation {
                    snapshot: None,
                    outcome: ValidationOutcome::single_error(DECODE_ERROR),
                };
            }
        };

        let outcome = self.constraints.evaluate(&snapshot);
        Validation {
            snapshot: Some(snapshot),
            outcome,
        }
    }
}

impl Default for StateValidator {
    fn default() -> Self {
        Self::new()
    }
}
