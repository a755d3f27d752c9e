use jsonschema::Validator;
use serde_json::Value;

use crate::error::{Result, ValidatorError};
use crate::outcome::ValidationOutcome;
use crate::snapshot::StateSnapshot;

/// The sub-structures every well-formed snapshot must carry, with the
/// upstream schema names used in error messages.
const REQUIRED_STRUCTURES: [(&str, fn(&StateSnapshot) -> bool); 13] = [
    ("system", |s| s.system.is_some()),
    ("meteo_internal", |s| s.meteo_internal.is_some()),
    ("lrf", |s| s.lrf.is_some()),
    ("time", |s| s.time.is_some()),
    ("gps", |s| s.gps.is_some()),
    ("compass", |s| s.compass.is_some()),
    ("rotary", |s| s.rotary.is_some()),
    ("camera_day", |s| s.camera_day.is_some()),
    ("camera_heat", |s| s.camera_heat.is_some()),
    ("compass_calibration", |s| s.compass_calibration.is_some()),
    ("rec_osd", |s| s.rec_osd.is_some()),
    ("day_cam_glass_heater", |s| s.day_cam_glass_heater.is_some()),
    ("actual_space_time", |s| s.actual_space_time.is_some()),
];

/// Semantic constraint evaluation over a decoded snapshot.
///
/// Implementations are selected once when the validator is built; callers
/// never branch on which tier is active.
pub trait ConstraintSet: Send + Sync {
    /// Evaluate the snapshot, producing one error per violation.
    fn evaluate(&self, snapshot: &StateSnapshot) -> ValidationOutcome;
}

/// Preferred tier: compiled JSON Schema constraints.
pub struct SchemaConstraints {
    validator: Validator,
}

impl SchemaConstraints {
    /// Compile a schema document.
    pub fn new(schema_json: &str) -> Result<Self> {
        let schema: Value = serde_json::from_str(schema_json)?;
        let validator = jsonschema::validator_for(&schema)
            .map_err(|err| ValidatorError::CompileFailed(err.to_string()))?;
        Ok(Self { validator })
    }
}

impl ConstraintSet for SchemaConstraints {
    fn evaluate(&self, snapshot: &StateSnapshot) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::valid();

        // A snapshot that cannot be re-serialized is an engine failure,
        // not a content violation. Report it and stop.
        let value = match serde_json::to_value(snapshot) {
            Ok(value) => value,
            Err(err) => {
                outcome.push_error(format!("constraint engine failure: {err}"));
                return outcome;
            }
        };

        for violation in self.validator.iter_errors(&value) {
            let path = dotted_path(&violation.instance_path().to_string());
            let schema_path = violation.schema_path().to_string();
            match rule_id(&schema_path) {
                Some(rule) => {
                    outcome.push_error(format!("{path}: {violation} (rule: {rule})"));
                }
                None => outcome.push_error(format!("{path}: {violation}")),
            }
        }

        outcome
    }
}

/// Fallback tier: fixed structural presence checks, used when no schema
/// compiled at startup.
#[derive(Debug, Default)]
pub struct PresenceConstraints;

impl ConstraintSet for PresenceConstraints {
    fn evaluate(&self, snapshot: &StateSnapshot) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::valid();

        if snapshot.protocol_version == 0 {
            outcome.push_error("protocol_version must be greater than 0");
        }

        for (name, is_present) in REQUIRED_STRUCTURES {
            if !is_present(snapshot) {
                outcome.push_error(format!("Missing required field: {name}"));
            }
        }

        if snapshot.system_monotonic_time_us == 0 {
            outcome.push_warning("system_monotonic_time_us is zero");
        }

        outcome
    }
}

/// Convert a JSON Pointer (`/gps/latitude`) to the dotted form used in
/// error strings (`gps.latitude`); the document root renders as `<root>`.
fn dotted_path(pointer: &str) -> String {
    let trimmed = pointer.trim_start_matches('/');
    if trimmed.is_empty() {
        "<root>".to_string()
    } else {
        trimmed.replace('/', ".")
    }
}

/// The violated keyword is the last segment of the schema path.
fn rule_id(schema_path: &str) -> Option<&str> {
    schema_path.rsplit('/').next().filter(|seg| !seg.is_empty())
}
