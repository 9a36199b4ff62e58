//! Rule type and metadata
//!
//! A rule is a named, prioritized predicate over a value of type `T` that
//! optionally reports a structured [`RuleError`]. Rules carry no behavior of
//! their own beyond invoking their validation function.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::RuleError;

// ============================================================================
// RULE METADATA
// ============================================================================

/// Descriptive metadata attached to a rule. No behavioral effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleMetadata {
    /// Short identifier, e.g. `"max_length_string"`.
    pub name: Cow<'static, str>,

    /// Longer human-readable description.
    pub description: Cow<'static, str>,
}

impl RuleMetadata {
    /// Creates metadata with a name and an empty description.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            description: Cow::Borrowed(""),
        }
    }

    /// Sets the description.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = description.into();
        self
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A validation rule over values of type `T`.
///
/// The validation function must be pure with respect to the input: it reads
/// the value and returns `Some(RuleError)` on violation, `None` otherwise.
/// It is stored behind an `Arc` so rules clone cheaply and can be handed to
/// the evaluation worker thread.
///
/// Lower `priority` values run earlier; the engine's sort is stable, so
/// equal-priority rules keep their insertion order.
///
/// # Examples
///
/// ```rust
/// use structure_validator::{Rule, RuleError, RuleMetadata};
///
/// let max_length = Rule::new(|value: &String| {
///     (value.len() > 8).then(|| RuleError::new("too big max length").critical())
/// })
/// .with_metadata(RuleMetadata::named("max_length_string"));
///
/// assert!(max_length.check(&"short".to_string()).is_none());
/// assert!(max_length.check(&"way too long".to_string()).is_some());
/// ```
pub struct Rule<T> {
    validate: Arc<dyn Fn(&T) -> Option<RuleError> + Send + Sync>,
    priority: i32,
    metadata: RuleMetadata,
}

impl<T> Rule<T> {
    /// Creates a rule with priority 0 and empty metadata.
    pub fn new<F>(validate: F) -> Self
    where
        F: Fn(&T) -> Option<RuleError> + Send + Sync + 'static,
    {
        Self {
            validate: Arc::new(validate),
            priority: 0,
            metadata: RuleMetadata::default(),
        }
    }

    /// Sets the rule's priority. Lower values run earlier.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Attaches descriptive metadata.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_metadata(mut self, metadata: RuleMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Runs the rule's validation function against a value.
    #[must_use = "the reported error must be collected"]
    pub fn check(&self, value: &T) -> Option<RuleError> {
        (self.validate)(value)
    }

    /// Returns the rule's priority.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns the rule's metadata.
    #[must_use]
    pub fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }
}

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            validate: Arc::clone(&self.validate),
            priority: self.priority,
            metadata: self.metadata.clone(),
        }
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("priority", &self.priority)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_passes_value_through() {
        let rule = Rule::new(|v: &i32| (*v < 0).then(|| RuleError::new("negative")));
        assert!(rule.check(&1).is_none());
        assert_eq!(rule.check(&-1).unwrap().message, "negative");
    }

    #[test]
    fn builder_sets_priority_and_metadata() {
        let rule = Rule::new(|_: &i32| None)
            .with_priority(7)
            .with_metadata(RuleMetadata::named("noop").with_description("does nothing"));

        assert_eq!(rule.priority(), 7);
        assert_eq!(rule.metadata().name, "noop");
        assert_eq!(rule.metadata().description, "does nothing");
    }

    #[test]
    fn clone_shares_validate_fn() {
        let rule = Rule::new(|v: &String| v.is_empty().then(|| RuleError::new("empty")));
        let copy = rule.clone();
        assert!(copy.check(&String::new()).is_some());
    }

    #[test]
    fn debug_omits_closure() {
        let rule = Rule::new(|_: &i32| None).with_priority(3);
        let rendered = format!("{rule:?}");
        assert!(rendered.contains("priority: 3"));
    }
}
