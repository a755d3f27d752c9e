//! Schema and semantic validation for telemetry state snapshots.
//!
//! Given the raw bytes of one logical message, [`StateValidator`] decodes
//! them into a [`StateSnapshot`] and evaluates semantic constraints,
//! producing a [`ValidationOutcome`] with one reason per defect.
//!
//! Semantic checks are a strategy selected once at construction: the
//! preferred tier runs the snapshot through a compiled JSON Schema, the
//! fallback tier applies fixed presence checks. Call sites never branch on
//! which tier is active.

pub mod constraints;
pub mod engine;
pub mod error;
pub mod outcome;
pub mod snapshot;

pub use constraints::{ConstraintSet, PresenceConstraints, SchemaConstraints};
pub use engine::{StateValidator, Validation, DECODE_ERROR};
pub use error::{Result, ValidatorError};
pub use outcome::ValidationOutcome;
pub use snapshot::StateSnapshot;
