/// Warnings and errors collected during one validation run.
///
/// Entries are only ever appended. Validators write to the report; the caller
/// reads it once the run is over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "warning recorded");
        self.warnings.push(message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "error recorded");
        self.errors.push(message);
    }

    /// Record `message` as an error unless `ok` holds
    pub fn check(&mut self, ok: bool, message: impl Into<String>) {
        if !ok {
            self.error(message);
        }
    }

    /// Record `message` as a warning unless `ok` holds
    pub fn check_warn(&mut self, ok: bool, message: impl Into<String>) {
        if !ok {
            self.warn(message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consume the report into `(warnings, errors)`
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.warnings, self.errors)
    }
}
