use std::path::Path;

use tracing::debug;
use tree_sitter::{Parser, Tree};

use crate::domain::{DomainError, Language};

/// A tree-sitter parser bound to one language for the whole run.
///
/// TypeScript switches between the plain and TSX grammars per file, since a
/// `.tsx` file does not parse under the plain grammar.
pub struct TreeSitterParser {
    language: Language,
    parser: Parser,
    tsx: bool,
}

impl TreeSitterParser {
    pub fn new(language: Language) -> Result<Self, DomainError> {
        let mut parser = Parser::new();
        parser
            .set_language(&Self::get_ts_language(language, false))
            .map_err(|e| DomainError::parse(format!("Failed to set language {}: {}", language, e)))?;
        Ok(Self {
            language,
            parser,
            tsx: false,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn get_ts_language(language: Language, tsx: bool) -> tree_sitter::Language {
        match language {
            Language::Python => tree_sitter_python::LANGUAGE.into(),
            Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Language::TypeScript if tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Language::Go => tree_sitter_go::LANGUAGE.into(),
            Language::C => tree_sitter_c::LANGUAGE.into(),
            Language::Cpp => tree_sitter_cpp::LANGUAGE.into(),
            Language::CSharp => tree_sitter_c_sharp::LANGUAGE.into(),
            Language::Java => tree_sitter_java::LANGUAGE.into(),
            Language::Solidity => tree_sitter_solidity::LANGUAGE.into(),
            Language::ObjectiveC => tree_sitter_objc::LANGUAGE.into(),
            Language::Rust => tree_sitter_rust::LANGUAGE.into(),
            Language::Php => tree_sitter_php::LANGUAGE_PHP.into(),
        }
    }

    fn use_tsx(&mut self, tsx: bool) -> Result<(), DomainError> {
        if self.tsx == tsx {
            return Ok(());
        }
        self.parser
            .set_language(&Self::get_ts_language(self.language, tsx))
            .map_err(|e| DomainError::parse(format!("Failed to set language: {}", e)))?;
        self.tsx = tsx;
        Ok(())
    }

    /// Parse one file. `None` means tree-sitter gave up; the caller skips it.
    pub fn parse(&mut self, path: &Path, content: &str) -> Option<Tree> {
        if self.language == Language::TypeScript {
            let tsx = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("tsx"));
            if let Err(e) = self.use_tsx(tsx) {
                debug!("Skipping {}: {}", path.display(), e);
                return None;
            }
        }

        let tree = self.parser.parse(content, None);
        if tree.is_none() {
            debug!("Parser produced no tree for {}", path.display());
        }
        tree
    }
}
