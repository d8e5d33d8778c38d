/// Caller name used for calls that are not inside any recognised definition.
pub const TOP_LEVEL_SCOPE: &str = "<module>";

/// One call expression that invokes the symbol being searched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// Name of the lexically enclosing function, or [`TOP_LEVEL_SCOPE`].
    caller: String,
    /// Argument expressions in source order, punctuation excluded.
    arguments: Vec<String>,
    file_path: String,
}

impl CallSite {
    pub fn new(caller: impl Into<String>, arguments: Vec<String>, file_path: impl Into<String>) -> Self {
        Self {
            caller: caller.into(),
            arguments,
            file_path: file_path.into(),
        }
    }

    pub fn caller(&self) -> &str {
        &self.caller
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn is_top_level(&self) -> bool {
        self.caller == TOP_LEVEL_SCOPE
    }

    pub fn into_parts(self) -> (String, Vec<String>, String) {
        (self.caller, self.arguments, self.file_path)
    }
}
