use std::str::FromStr;

use crate::domain::DomainError;

/// Languages (and dialect families) a reverse call tree can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Go,
    C,
    Cpp,
    CSharp,
    Java,
    Solidity,
    ObjectiveC,
    Rust,
    Php,
}

impl Language {
    pub const ALL: [Language; 12] = [
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Go,
        Language::C,
        Language::Cpp,
        Language::CSharp,
        Language::Java,
        Language::Solidity,
        Language::ObjectiveC,
        Language::Rust,
        Language::Php,
    ];

    /// Resolve a user supplied tag, folding known aliases (`c++`, `c#`, ...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "python" | "py" => Some(Language::Python),
            "javascript" | "js" | "jsx" | "node" => Some(Language::JavaScript),
            "typescript" | "ts" | "tsx" => Some(Language::TypeScript),
            "go" | "golang" => Some(Language::Go),
            "c" => Some(Language::C),
            "cpp" | "c++" | "cxx" | "cc" => Some(Language::Cpp),
            "csharp" | "c#" | "cs" | "c-sharp" => Some(Language::CSharp),
            "java" => Some(Language::Java),
            "solidity" | "sol" => Some(Language::Solidity),
            "objc" | "objective-c" | "objectivec" | "obj-c" => Some(Language::ObjectiveC),
            "rust" | "rs" => Some(Language::Rust),
            "php" => Some(Language::Php),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Go => "go",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Java => "java",
            Language::Solidity => "solidity",
            Language::ObjectiveC => "objc",
            Language::Rust => "rust",
            Language::Php => "php",
        }
    }

    /// Comma separated list of canonical tags, for error and help messages.
    pub fn supported_tags() -> String {
        Self::ALL
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| {
            DomainError::unsupported_language(format!(
                "'{}' (expected one of: {})",
                s.trim(),
                Self::supported_tags()
            ))
        })
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
