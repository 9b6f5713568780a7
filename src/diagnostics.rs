//! Recoverable problems collected during a run.
//!
//! Nothing here aborts a build. Loader and assembler push entries into a
//! [`Diagnostics`] value that is returned next to their result, and the
//! binary prints them once the run is complete.

use std::fmt;

/// What kind of input problem was recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Date did not match `[build.date_format]`; sorted as the earliest date.
    DateFallback,
    /// Required front matter field is empty.
    FrontMatter,
    /// File could not be read or parsed and was left out.
    SkippedFile,
    /// Two artifacts mapped to the same file; the first one is kept.
    PathCollision,
}

impl DiagnosticKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::DateFallback => "date",
            Self::FrontMatter => "frontmatter",
            Self::SkippedFile => "skipped",
            Self::PathCollision => "collision",
        }
    }
}

/// A single recovered problem, tied to the post or file it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Slug or source path.
    pub subject: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`: {}", self.kind.name(), self.subject, self.message)
    }
}

/// Ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(
        &mut self,
        kind: DiagnosticKind,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.items.push(Diagnostic {
            kind,
            subject: subject.into(),
            message: message.into(),
        });
    }

    pub fn extend(&mut self, other: Self) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Diagnostics of one kind, in the order they were recorded.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(move |d| d.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
