//! Rule engine and configuration
//!
//! The engine is an ordered, capacity-bounded container of rules for one
//! value type, paired with the configuration shared with the validator that
//! executes it. Once an engine is handed to a validator it is frozen: the
//! validator never mutates it, so one engine can back any number of
//! concurrent analyses.

use std::time::Duration;

use serde::Serialize;

use crate::error::EngineError;
use crate::rule::Rule;

// ============================================================================
// ENGINE CONFIG
// ============================================================================

/// Configuration shared between an [`Engine`] and its validator.
///
/// # Timeout semantics
///
/// `timeout` is the wall-clock budget for one `analyze` call, measured from
/// its start. `None` (the default) means unbounded: no deadline is armed and
/// the rule walk always runs to completion. An explicit `Duration::ZERO`
/// arms a deadline that has already elapsed, so the first deadline check
/// fires and `analyze` returns a single synthetic timeout error without
/// evaluating any rule.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use structure_validator::EngineConfig;
///
/// let config = EngineConfig::new()
///     .with_max_rules(10)
///     .with_timeout(Duration::from_secs(1));
/// assert_eq!(config.max_rules(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineConfig {
    max_rules: usize,
    timeout: Option<Duration>,
}

/// Default rule capacity when none is configured.
pub const DEFAULT_MAX_RULES: usize = 25;

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_rules: DEFAULT_MAX_RULES,
            timeout: None,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with the defaults: capacity
    /// [`DEFAULT_MAX_RULES`], no timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule capacity. A value of zero is coerced to 1.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_rules(mut self, max_rules: usize) -> Self {
        self.max_rules = max_rules.max(1);
        self
    }

    /// Sets the wall-clock budget for one `analyze` call.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Removes the timeout, making analyses unbounded.
    #[must_use = "builder methods must be chained or built"]
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Returns the rule capacity.
    #[must_use]
    pub fn max_rules(&self) -> usize {
        self.max_rules
    }

    /// Returns the configured timeout, or `None` when unbounded.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// An ordered, capacity-bounded holder of rules for values of type `T`.
///
/// Capacity overflow is a programming error in how the engine was assembled,
/// not a runtime condition: [`Engine::add_rule`] panics, and callers are
/// expected to size `max_rules` correctly up front. Dynamic assemblers can
/// use [`Engine::try_add_rule`] instead.
///
/// # Examples
///
/// ```rust
/// use structure_validator::{Engine, EngineConfig, Rule, RuleError};
///
/// let mut engine = Engine::new(EngineConfig::new().with_max_rules(10));
/// engine.add_rule(Rule::new(|v: &String| {
///     (v.len() > 8).then(|| RuleError::new("too big max length").critical())
/// }));
/// assert_eq!(engine.len(), 1);
/// ```
pub struct Engine<T> {
    rules: Vec<Rule<T>>,
    config: EngineConfig,
}

// Manual impls: `Rule<T>` is Clone and Debug for any `T`, so the derive
// bounds on `T` would be spurious.
impl<T> Clone for Engine<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Engine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("rules", &self.rules)
            .field("config", &self.config)
            .finish()
    }
}

impl<T> Engine<T> {
    /// Creates an empty engine bound to `config`.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            rules: Vec::with_capacity(config.max_rules()),
            config,
        }
    }

    /// Creates an engine pre-seeded with `rules`.
    ///
    /// Each rule goes through the same capacity guard as [`Engine::add_rule`].
    ///
    /// # Panics
    ///
    /// Panics if `rules` holds more entries than the configured capacity.
    #[must_use]
    pub fn with_rules(config: EngineConfig, rules: impl IntoIterator<Item = Rule<T>>) -> Self {
        let mut engine = Self::new(config);
        for rule in rules {
            engine.add_rule(rule);
        }
        engine
    }

    /// Appends a rule to the collection.
    ///
    /// # Panics
    ///
    /// Panics if the engine already holds `max_rules` entries.
    pub fn add_rule(&mut self, rule: Rule<T>) {
        if let Err(error) = self.try_add_rule(rule) {
            panic!("{error}");
        }
    }

    /// Appends a rule, reporting capacity overflow instead of panicking.
    ///
    /// On error the existing rule collection is left unchanged.
    pub fn try_add_rule(&mut self, rule: Rule<T>) -> Result<(), EngineError> {
        if self.rules.len() >= self.config.max_rules() {
            return Err(EngineError::CapacityExceeded {
                max_rules: self.config.max_rules(),
            });
        }

        self.rules.push(rule);
        Ok(())
    }

    /// Returns the rules ordered by ascending priority.
    ///
    /// The sort is stable: rules with equal priority keep their insertion
    /// order.
    #[must_use]
    pub fn rules(&self) -> Vec<Rule<T>> {
        let mut rules = self.rules.clone();
        rules.sort_by_key(Rule::priority);
        rules
    }

    /// Returns the shared configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the number of rules held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the engine holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
