//! Hierarchical session paths.

use std::fmt;

/// A dot-delimited location inside a session store.
///
/// Paths always have at least one segment and no segment contains a dot,
/// so the rendered form parses back to the same path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorePath {
    segments: Vec<String>,
}

impl StorePath {
    /// Create a single-segment path.
    ///
    /// Dots in `key` are replaced with underscores.
    pub fn root(key: impl AsRef<str>) -> Self {
        Self {
            segments: vec![sanitize(key.as_ref())],
        }
    }

    /// Parse a rendered path such as `_component_states.track_Counter.index`.
    ///
    /// Returns `None` for an empty path or one with empty segments.
    pub fn parse(s: &str) -> Option<Self> {
        let segments: Vec<String> = s.split('.').map(String::from).collect();
        if segments.iter().any(|seg| seg.is_empty()) {
            return None;
        }
        Some(Self { segments })
    }

    /// Extend the path by one segment.
    pub fn child(&self, segment: impl AsRef<str>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(sanitize(segment.as_ref()));
        Self { segments }
    }

    /// The path segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The innermost segment.
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }
}

fn sanitize(segment: &str) -> String {
    if segment.is_empty() {
        "_".to_string()
    } else {
        segment.replace('.', "_")
    }
}

impl fmt::Display for StorePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
