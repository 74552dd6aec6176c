// Reference listing types
// Languages and source listings shown alongside the animations

use serde::{Deserialize, Serialize};

use crate::trace::types::AlgorithmKind;

/// Languages the reference listings are written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Cpp,
    Java,
    Python,
    JavaScript,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Cpp,
        Language::Java,
        Language::Python,
        Language::JavaScript,
    ];

    /// Convert from string representation (for serialization)
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "C++" | "Cpp" | "cpp" => Some(Language::Cpp),
            "Java" | "java" => Some(Language::Java),
            "Python" | "python" => Some(Language::Python),
            "JavaScript" | "javascript" | "js" => Some(Language::JavaScript),
            _ => None,
        }
    }

    /// Human-readable name for UI display
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
        }
    }

    /// File extension used for listing downloads
    pub fn file_extension(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::Python => "py",
            Language::JavaScript => "js",
        }
    }
}

/// One reference implementation of an animated algorithm
#[derive(Debug, Clone, Serialize)]
pub struct CodeListing {
    pub algorithm: AlgorithmKind,
    pub language: Language,
    pub source: &'static str,
}

impl CodeListing {
    /// Suggested name for the listing's download button
    pub fn file_name(&self) -> String {
        format!(
            "{}.{}",
            self.algorithm.to_string(),
            self.language.file_extension()
        )
    }

    pub fn line_count(&self) -> usize {
        self.source.lines().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_round_trip() {
        for language in Language::ALL {
            assert_eq!(
                Language::from_string(language.display_name()),
                Some(language)
            );
        }
        assert_eq!(Language::from_string("Rust"), None);
    }

    #[test]
    fn test_file_name() {
        let listing = CodeListing {
            algorithm: AlgorithmKind::MajorityVote,
            language: Language::Python,
            source: "def f():\n    pass\n",
        };
        assert_eq!(listing.file_name(), "MajorityVote.py");
        assert_eq!(listing.line_count(), 2);
    }
}
