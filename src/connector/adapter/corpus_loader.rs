use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use tree_sitter::Tree;
use walkdir::{DirEntry, WalkDir};

use super::grammar::{node_text, preorder, profile_for, GrammarProfile};
use super::{CallSiteScanner, TreeSitterParser};
use crate::application::CallSiteSource;
use crate::domain::{CallSite, DefinitionIndex, DomainError, FunctionDefinition, Language};

/// One loaded source file: path, text and syntax tree.
pub struct SourceUnit {
    path: PathBuf,
    path_str: String,
    content: String,
    tree: Tree,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, content: String, tree: Tree) -> Self {
        let path = path.into();
        let path_str = path.display().to_string();
        Self {
            path,
            path_str,
            content,
            tree,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path as reported in call sites and definitions.
    pub fn path_str(&self) -> &str {
        &self.path_str
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }
}

/// Walks a repository once, parsing every file of one language and indexing
/// its definitions.
pub struct CorpusLoader {
    profile: Box<dyn GrammarProfile>,
    parser: TreeSitterParser,
}

impl CorpusLoader {
    pub fn new(language: Language) -> Result<Self, DomainError> {
        Ok(Self {
            profile: profile_for(language),
            parser: TreeSitterParser::new(language)?,
        })
    }

    pub fn load(mut self, root: &Path) -> Corpus {
        let mut units = Vec::new();
        let mut index = DefinitionIndex::new();
        let mut skipped = 0usize;

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Error walking directory: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() || !self.profile.accepts(path) {
                continue;
            }

            let content = match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    debug!("Skipping unreadable file {}: {}", path.display(), e);
                    skipped += 1;
                    continue;
                }
            };
            let Some(tree) = self.parser.parse(path, &content) else {
                skipped += 1;
                continue;
            };

            let unit = SourceUnit::new(path, content, tree);
            let found = index_definitions(self.profile.as_ref(), &unit, &mut index);
            debug!("Loaded {} ({} definitions)", unit.path_str(), found);
            units.push(unit);
        }

        info!(
            "Loaded {} {} files from {} ({} skipped), {} definitions of {} symbols",
            units.len(),
            self.profile.language(),
            root.display(),
            skipped,
            index.len(),
            index.symbol_count()
        );

        Corpus {
            units,
            index,
            profile: self.profile,
        }
    }
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

fn index_definitions(profile: &dyn GrammarProfile, unit: &SourceUnit, index: &mut DefinitionIndex) -> usize {
    let source = unit.content();
    let mut found = 0;
    for (node, _) in preorder(unit.tree().root_node()) {
        if let Some(definition) = profile.match_definition(node, source) {
            index.insert(
                FunctionDefinition::new(definition.name, unit.path_str(), node_text(definition.node, source))
                    .with_parameters(definition.parameters)
                    .with_return_type(definition.return_type),
            );
            found += 1;
        }
    }
    found
}

/// Every parsed file of a run plus the definition index built from them.
pub struct Corpus {
    units: Vec<SourceUnit>,
    index: DefinitionIndex,
    profile: Box<dyn GrammarProfile>,
}

impl Corpus {
    pub fn language(&self) -> Language {
        self.profile.language()
    }

    pub fn units(&self) -> &[SourceUnit] {
        &self.units
    }

    pub fn index(&self) -> &DefinitionIndex {
        &self.index
    }
}

impl CallSiteSource for Corpus {
    fn find_call_sites(&self, symbol: &str) -> Result<Vec<CallSite>, DomainError> {
        let scanner = CallSiteScanner::new(self.profile.as_ref());
        Ok(self
            .units
            .iter()
            .flat_map(|unit| scanner.scan(unit, symbol))
            .collect())
    }

    fn canonical_definition(&self, symbol: &str) -> Option<&FunctionDefinition> {
        self.index.canonical(symbol)
    }
}
