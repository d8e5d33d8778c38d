use std::collections::HashMap;

/// A function, method or constructor definition discovered while loading the corpus.
///
/// Several definitions may share a name: overloads, forward declarations and
/// same-named functions in different files are all kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    name: String,
    file_path: String,
    code: String,
    parameters: Option<String>,
    return_type: Option<String>,
}

impl FunctionDefinition {
    pub fn new(name: impl Into<String>, file_path: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_path: file_path.into(),
            code: code.into(),
            parameters: None,
            return_type: None,
        }
    }

    pub fn with_parameters(mut self, parameters: Option<String>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_return_type(mut self, return_type: Option<String>) -> Self {
        self.return_type = return_type;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Full source text of the definition.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn parameters(&self) -> Option<&str> {
        self.parameters.as_deref()
    }

    pub fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }
}

/// Symbol name -> every definition seen for it, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct DefinitionIndex {
    entries: HashMap<String, Vec<FunctionDefinition>>,
    total: usize,
}

impl DefinitionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, definition: FunctionDefinition) {
        self.entries
            .entry(definition.name().to_string())
            .or_default()
            .push(definition);
        self.total += 1;
    }

    pub fn definitions(&self, name: &str) -> &[FunctionDefinition] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The representative definition for `name`: the one with the longest
    /// source text. A bare declaration loses to the full body. Ties keep the
    /// earliest discovered entry.
    pub fn canonical(&self, name: &str) -> Option<&FunctionDefinition> {
        self.definitions(name).iter().fold(None, |best, candidate| match best {
            Some(current) if current.code().len() >= candidate.code().len() => Some(current),
            _ => Some(candidate),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of distinct symbol names.
    pub fn symbol_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of definitions across all names.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_prefers_longest_definition() {
        let mut index = DefinitionIndex::new();
        index.insert(FunctionDefinition::new("area", "shape.h", "int area(int w, int h);"));
        index.insert(FunctionDefinition::new(
            "area",
            "shape.c",
            "int area(int w, int h) {\n    return w * h;\n}",
        ));

        let canonical = index.canonical("area").expect("area should be indexed");
        assert_eq!(canonical.file_path(), "shape.c");
        assert_eq!(index.definitions("area").len(), 2);
    }

    #[test]
    fn test_canonical_tie_keeps_first_discovered() {
        let mut index = DefinitionIndex::new();
        index.insert(FunctionDefinition::new("f", "a.py", "def f(): pass"));
        index.insert(FunctionDefinition::new("f", "b.py", "def f(): pass"));

        assert_eq!(index.canonical("f").map(|d| d.file_path()), Some("a.py"));
    }

    #[test]
    fn test_unknown_name_has_no_definitions() {
        let index = DefinitionIndex::new();
        assert!(index.canonical("missing").is_none());
        assert!(index.definitions("missing").is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn test_counts() {
        let mut index = DefinitionIndex::new();
        index.insert(FunctionDefinition::new("a", "x.go", "func a() {}"));
        index.insert(FunctionDefinition::new("a", "y.go", "func a() { b() }"));
        index.insert(FunctionDefinition::new("b", "y.go", "func b() {}"));

        assert_eq!(index.len(), 3);
        assert_eq!(index.symbol_count(), 2);
        assert!(index.contains("b"));
    }

    #[test]
    fn test_definition_builders() {
        let def = FunctionDefinition::new("add", "m.rs", "fn add(a: i32) -> i32 { a }")
            .with_parameters(Some("(a: i32)".to_string()))
            .with_return_type(Some("i32".to_string()));

        assert_eq!(def.name(), "add");
        assert_eq!(def.parameters(), Some("(a: i32)"));
        assert_eq!(def.return_type(), Some("i32"));
    }
}
