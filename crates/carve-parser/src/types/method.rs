use serde::{Deserialize, Serialize};

use super::LexicalSpan;

/// A detected method declaration with its full body.
///
/// `start` is the first non-annotation token of the signature, `body_start`
/// the opening `{` and `end` the matching `}` (inclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCandidate {
    pub name: String,
    /// Whitespace-normalized declaration text up to the opening brace.
    pub signature: String,
    pub modifiers: Vec<String>,
    pub annotations: Vec<String>,
    pub type_parameters: Option<String>,
    pub return_type: String,
    pub parameters: String,
    pub throws: Vec<String>,
    pub start: usize,
    pub body_start: usize,
    pub end: usize,
    pub start_line: u32,
    pub end_line: u32,
    /// Number of enclosing method candidates.
    pub depth: usize,
    /// Index of the innermost enclosing candidate in the same scan.
    pub parent: Option<usize>,
}

impl MethodCandidate {
    /// The declaration text, from the signature through the closing brace.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..=self.end]
    }

    /// Whether `other` lies entirely inside this candidate's range.
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    #[must_use]
    pub const fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }

    #[must_use]
    pub fn to_record(&self, source: &str) -> MethodRecord {
        MethodRecord {
            name: self.name.clone(),
            signature: self.signature.clone(),
            start_line: self.start_line,
            end_line: self.end_line,
            depth: self.depth,
            text: self.text(source).to_string(),
        }
    }
}

/// The external form of an extracted method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRecord {
    pub name: String,
    pub signature: String,
    pub start_line: u32,
    pub end_line: u32,
    pub depth: usize,
    pub text: String,
}

/// Everything derived from one scan pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutput {
    pub spans: Vec<LexicalSpan>,
    /// Candidates in declaration order, outer methods before nested ones.
    pub methods: Vec<MethodCandidate>,
}

impl ScanOutput {
    #[must_use]
    pub fn records(&self, source: &str) -> Vec<MethodRecord> {
        self.methods
            .iter()
            .map(|method| method.to_record(source))
            .collect()
    }

    pub fn top_level(&self) -> impl Iterator<Item = &MethodCandidate> {
        self.methods.iter().filter(|method| method.is_top_level())
    }

    /// Candidates whose innermost enclosing candidate is `self.methods[index]`.
    pub fn children_of(&self, index: usize) -> impl Iterator<Item = &MethodCandidate> {
        self.methods
            .iter()
            .filter(move |method| method.parent == Some(index))
    }
}
