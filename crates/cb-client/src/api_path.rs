use cb_core::{CoreError, Result as CoreErrorResult};

use std::fmt;

/// Path of a backend request, relative to the base URL.
///
/// The prefix is taken as written. Every segment added with
/// [`ApiPath::segment`] is sent as exactly one percent-encoded path segment,
/// so an id containing `/`, `?` or `#` can never reach another endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    prefix: String,
    segments: Vec<String>,
}

impl ApiPath {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            segments: Vec::new(),
        }
    }

    /// Append one segment (an id or a fixed word such as `stats`)
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Empty, `.` and `..` segments would be dropped or resolved by URL
    /// normalization and change the target endpoint.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        match self
            .segments
            .iter()
            .find(|s| s.is_empty() || *s == "." || *s == "..")
        {
            Some(bad) => Err(CoreError::validation(
                "id",
                format!("'{bad}' is not a usable path segment"),
            )),
            None => Ok(()),
        }
    }
}

impl From<&str> for ApiPath {
    fn from(prefix: &str) -> Self {
        Self::new(prefix)
    }
}

impl From<String> for ApiPath {
    fn from(prefix: String) -> Self {
        Self::new(prefix)
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix)?;
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
