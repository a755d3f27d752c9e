/// Result of one validation attempt.
///
/// `is_valid` is true exactly when no errors were recorded. Warnings are
/// collected for the operator but never affect validity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationOutcome {
    /// An outcome with no findings.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// An outcome carrying a single error.
    pub fn single_error(message: impl Into<String>) -> Self {
        let mut outcome = Self::valid();
        outcome.push_error(message);
        outcome
    }

    /// Record an error; the outcome becomes invalid.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.is_valid = false;
    }

    /// Record a warning; validity is unaffected.
    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self::valid()
    }
}
