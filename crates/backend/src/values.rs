use serde_json::Value;

/// Typed, read-only access to named backend configuration fields.
///
/// Backend configuration arrives as a loosely-typed JSON document (the
/// outer layers merge CLI flags, config files, and defaults before handing
/// it over). `ConfigValues` gives the backends a small typed surface over
/// that document: a missing or null field reads as the type's zero value
/// rather than an error, so callers can treat "absent" and "empty" the
/// same way.
#[derive(Debug, Clone)]
pub struct ConfigValues {
    doc: Value,
}

impl ConfigValues {
    /// Wrap a configuration document.
    pub fn new(doc: Value) -> Self {
        Self { doc }
    }

    /// Read a string field. Missing, null, or non-string fields read as `""`.
    pub fn string(&self, field: &str) -> String {
        match self.doc.get(field) {
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        }
    }

    /// Read a boolean field. Missing or null fields read as `false`.
    ///
    /// Accepts a JSON boolean or the strings `"true"`/`"false"`, since some
    /// configuration layers stringify everything.
    pub fn bool(&self, field: &str) -> bool {
        match self.doc.get(field) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s == "true",
            _ => false,
        }
    }
}
