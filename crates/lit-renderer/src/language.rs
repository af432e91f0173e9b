//! Source languages recognized in example directories.

use std::path::{Path, PathBuf};

/// No lexer is registered for a source file's extension.
#[derive(Debug, thiserror::Error)]
#[error("no lexer for {}", path.display())]
pub struct UnsupportedLanguage {
    /// The offending source file.
    pub path: PathBuf,
}

/// Supported source languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Go source, the primary runnable language.
    Go,
    /// Shell session transcript (`$ command` followed by its output).
    Console,
}

impl Language {
    /// Look up a language by file extension (without the dot).
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "go" => Some(Self::Go),
            "sh" => Some(Self::Console),
            _ => None,
        }
    }

    /// Determine the language of a source file from its extension.
    pub fn from_path(path: &Path) -> Result<Self, UnsupportedLanguage> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| UnsupportedLanguage {
                path: path.to_path_buf(),
            })
    }

    /// Lexer name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Console => "console",
        }
    }

    /// Whether files of this language are published and hashed.
    #[must_use]
    pub fn is_runnable(self) -> bool {
        matches!(self, Self::Go)
    }

    /// Marker identifying a runnable program entry point.
    #[must_use]
    pub fn entry_marker(self) -> Option<&'static str> {
        match self {
            Self::Go => Some("package main"),
            Self::Console => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            Language::from_path(Path::new("examples/hello/hello.go")).unwrap(),
            Language::Go
        );
        assert_eq!(
            Language::from_path(Path::new("examples/hello/hello.sh")).unwrap(),
            Language::Console
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Language::from_path(Path::new("examples/hello/notes.txt")).unwrap_err();
        assert_eq!(err.path, PathBuf::from("examples/hello/notes.txt"));
        assert_eq!(err.to_string(), "no lexer for examples/hello/notes.txt");
    }

    #[test]
    fn test_missing_extension() {
        assert!(Language::from_path(Path::new("examples/hello/Makefile")).is_err());
    }

    #[test]
    fn test_runnable_and_markers() {
        assert!(Language::Go.is_runnable());
        assert!(!Language::Console.is_runnable());
        assert_eq!(Language::Go.entry_marker(), Some("package main"));
        assert_eq!(Language::Console.entry_marker(), None);
    }
}
