//! Field paths and structured field errors.

use std::fmt;

use serde::Serialize;

/// Dot-separated path to a field in the validated resource.
///
/// # Examples
///
/// ```
/// use netcheck::validation::FieldPath;
///
/// let path = FieldPath::new("spec").child("networking").child("pods");
/// assert_eq!(path.to_string(), "spec.networking.pods");
/// assert_eq!(FieldPath::parse("spec.networking").child("pods"), path);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Creates an empty path.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Creates a path with a single segment.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::root().child(name)
    }

    /// Parses a dotted path. Empty segments are dropped.
    #[must_use]
    pub fn parse(dotted: &str) -> Self {
        Self {
            segments: dotted
                .split('.')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Returns a new path with `name` appended.
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// Returns true if this path has no segments.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "<root>");
        }
        write!(f, "{}", self.segments.join("."))
    }
}

impl Serialize for FieldPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Category of a field error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldErrorKind {
    /// A mandatory field has no value.
    Required,
    /// The field's network overlaps a network it must be disjoint from.
    Intersects,
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "Required value"),
            Self::Intersects => write!(f, "Invalid value"),
        }
    }
}

/// A validation failure attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Error category
    pub kind: FieldErrorKind,
    /// Path of the offending field
    pub field: FieldPath,
    /// The offending value; `None` for [`FieldErrorKind::Required`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_value: Option<String>,
    /// Human-readable message
    pub detail: String,
}

impl FieldError {
    /// Creates a [`FieldErrorKind::Required`] error.
    #[must_use]
    pub fn required(field: FieldPath, detail: impl Into<String>) -> Self {
        Self {
            kind: FieldErrorKind::Required,
            field,
            bad_value: None,
            detail: detail.into(),
        }
    }

    /// Creates a [`FieldErrorKind::Intersects`] error for `value`.
    #[must_use]
    pub fn intersects(
        field: FieldPath,
        value: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind: FieldErrorKind::Intersects,
            field,
            bad_value: Some(value.into()),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.bad_value {
            Some(value) => write!(
                f,
                "{}: {}: {value:?}: {}",
                self.field, self.kind, self.detail
            ),
            None => write!(f, "{}: {}: {}", self.field, self.kind, self.detail),
        }
    }
}

impl std::error::Error for FieldError {}

/// Ordered list of field errors; empty means valid.
pub type FieldErrorList = Vec<FieldError>;
