//! Hierarchical rule errors
//!
//! This module provides the structured error type produced by rules, with
//! support for severity, an opaque wrapped cause, and nested child errors
//! from delegated sub-evaluations.
//!
//! String fields use `Cow<'static, str>` for zero-allocation in the common
//! case of static messages.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// RULE ERROR
// ============================================================================

/// A structured error reported by a rule, optionally carrying nested errors.
///
/// Severity is a marker only: a critical error does not stop the remaining
/// rule walk. The `cause` field wraps an opaque underlying error (not itself
/// a [`RuleError`]); `children` holds the findings of a nested evaluation a
/// rule chose to fold into one parent error.
///
/// # Examples
///
/// ## Simple error
///
/// ```rust
/// use structure_validator::RuleError;
///
/// let error = RuleError::new("value out of range");
/// assert!(!error.is_critical);
/// ```
///
/// ## Error with a cause and children
///
/// ```rust
/// use structure_validator::RuleError;
///
/// let error = RuleError::new("nested struct validation failed")
///     .with_child(RuleError::new("value must be positive"))
///     .with_child(RuleError::new("name is empty").critical());
/// assert_eq!(error.children.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RuleError {
    /// Human-readable description of the violation.
    pub message: Cow<'static, str>,

    /// Severity marker. Does not alter evaluation control flow.
    pub is_critical: bool,

    /// Optional underlying error being wrapped.
    ///
    /// `Arc` rather than `Box` so the error stays cheaply clonable.
    pub cause: Option<Arc<dyn std::error::Error + Send + Sync>>,

    /// Nested errors from a delegated sub-evaluation, in sub-evaluation order.
    pub children: Vec<RuleError>,
}

impl RuleError {
    /// Creates a new warning-severity error with a message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use structure_validator::RuleError;
    ///
    /// // Static strings — zero allocation:
    /// let error = RuleError::new("name is empty");
    ///
    /// // Dynamic strings — allocates only when needed:
    /// let error = RuleError::new(format!("length {} exceeds limit", 12));
    /// ```
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            is_critical: false,
            cause: None,
            children: Vec::new(),
        }
    }

    /// Marks this error as critical.
    #[must_use = "builder methods must be chained or built"]
    pub fn critical(mut self) -> Self {
        self.is_critical = true;
        self
    }

    /// Sets the underlying cause being wrapped.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Replaces the child errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_children(mut self, children: Vec<RuleError>) -> Self {
        self.children = children;
        self
    }

    /// Appends a single child error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_child(mut self, child: RuleError) -> Self {
        self.children.push(child);
        self
    }

    /// Returns true if this error has child errors.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the number of errors in this tree (including self).
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(RuleError::total_error_count)
            .sum::<usize>()
    }

    /// Flattens the error tree into a single list (depth-first).
    #[must_use]
    pub fn flatten(&self) -> Vec<&RuleError> {
        let mut result = vec![self];
        for child in &self.children {
            result.extend(child.flatten());
        }
        result
    }

    /// Converts the error tree to a JSON value (for serialization).
    ///
    /// The cause is rendered through its `Display` impl since the wrapped
    /// error type is opaque.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        json!({
            "message": self.message,
            "is_critical": self.is_critical,
            "cause": self.cause.as_ref().map(|c| c.to_string()),
            "children": self.children.iter().map(RuleError::to_json_value).collect::<Vec<_>>(),
        })
    }

    /// Synthetic critical error appended when an analysis deadline elapses.
    pub(crate) fn timeout(budget: Duration) -> Self {
        Self::new(format!("TIMEOUT_EXCEEDED after: {budget:?}")).critical()
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_critical {
            write!(f, "[CRITICAL] ")?;
        } else {
            write!(f, "[WARNING] ")?;
        }

        write!(f, "{}", self.message)?;

        if let Some(cause) = &self.cause {
            write!(f, "\nCaused by: {cause}")?;
        }

        if !self.children.is_empty() {
            write!(f, "\nNested errors:")?;
            for (i, child) in self.children.iter().enumerate() {
                write!(f, "\n  {}. {}", i + 1, child)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for RuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|c| c as &(dyn std::error::Error + 'static))
    }
}

/// Renders an optional error, using the literal `<nil>` placeholder for
/// `None`.
///
/// # Examples
///
/// ```rust
/// use structure_validator::error::render;
///
/// assert_eq!(render(None), "<nil>");
/// ```
#[must_use]
pub fn render(error: Option<&RuleError>) -> String {
    match error {
        Some(error) => error.to_string(),
        None => "<nil>".to_string(),
    }
}

// ============================================================================
// ENGINE ERROR
// ============================================================================

/// Fatal construction-time failures of an engine.
///
/// These signal programming errors in how an engine was assembled, not
/// runtime conditions: the panicking accessors surface them as panics, while
/// the `try_` variants return them for callers that assemble engines
/// dynamically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Adding a rule would exceed the configured capacity.
    #[error("exceeded maximum number of rules ({max_rules})")]
    CapacityExceeded {
        /// The configured capacity that would be exceeded.
        max_rules: usize,
    },
}

// ============================================================================
// TESTS
// ============================================================================
