//! Deadline-bounded rule execution
//!
//! The validator runs an engine's rules against one value under the engine's
//! configured wall-clock budget. Each `analyze` call uses exactly two units
//! of execution: a background worker that walks the rules sequentially and a
//! foreground collector that arbitrates between the worker's output and the
//! deadline. Rules are never run in parallel with each other.

use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use crate::engine::Engine;
use crate::error::RuleError;

// ============================================================================
// VALIDATOR
// ============================================================================

/// Executes an [`Engine`]'s rules against values of type `T`.
///
/// The validator holds no per-call mutable state and never mutates the
/// engine, so one validator (or clones of it) can serve any number of
/// concurrent [`analyze`](Validator::analyze) calls.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use structure_validator::{Engine, EngineConfig, Rule, RuleError, Validator};
///
/// let config = EngineConfig::new()
///     .with_max_rules(10)
///     .with_timeout(Duration::from_secs(1));
/// let engine = Engine::with_rules(config, vec![Rule::new(|v: &String| {
///     (v.len() > 8).then(|| RuleError::new("too big max length").critical())
/// })]);
///
/// let validator = Validator::new(engine);
/// let errors = validator.analyze("aaaaaaaaa".to_string());
/// assert_eq!(errors.len(), 1);
/// ```
pub struct Validator<T> {
    engine: Arc<Engine<T>>,
}

impl<T> Validator<T>
where
    T: Send + 'static,
{
    /// Creates a validator for `engine`, freezing it.
    #[must_use]
    pub fn new(engine: Engine<T>) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns the engine being executed.
    #[must_use]
    pub fn engine(&self) -> &Engine<T> {
        &self.engine
    }

    /// Runs the engine's rules against `value` in priority order and returns
    /// the reported errors.
    ///
    /// The deadline is fixed when the call starts. The worker checks it
    /// before each rule and stops without evaluating further rules once it
    /// has elapsed; the collector returns at the deadline with a single
    /// synthetic critical timeout error appended, regardless of how many
    /// rules remain. Absent a timeout the result is exactly the errors the
    /// rules reported, in priority order.
    ///
    /// Cancellation is cooperative and checked only at rule boundaries: a
    /// rule whose validation function runs past the deadline is not
    /// interrupted. The call still returns at the deadline, while the
    /// abandoned worker thread finishes its in-flight rule in the background
    /// and exits on its next send or deadline check.
    ///
    /// A panicking rule is not converted into a [`RuleError`]; its panic
    /// unwinds the worker thread and the call returns whatever was collected
    /// before it.
    #[must_use = "the collected errors must be inspected"]
    pub fn analyze(&self, value: T) -> Vec<RuleError> {
        let timeout = self.engine.config().timeout();
        let deadline = timeout.map(|budget| Instant::now() + budget);
        let (sender, receiver) = mpsc::channel();

        let engine = Arc::clone(&self.engine);
        // Deliberately detached: dropping the handle lets an abandoned
        // worker outlive the call, per the cancellation contract above.
        let _worker = thread::spawn(move || {
            for rule in engine.rules() {
                if deadline.is_some_and(|d| Instant::now() >= d) {
                    return;
                }
                if let Some(error) = rule.check(&value) {
                    // The collector is gone once the deadline fired; stop.
                    if sender.send(error).is_err() {
                        return;
                    }
                }
            }
        });

        let mut errors = Vec::new();
        loop {
            let received = match (deadline, timeout) {
                (Some(deadline), Some(budget)) => {
                    // The deadline wins over anything still queued: checked
                    // up front so an already-elapsed budget (e.g. zero)
                    // reports a timeout rather than racing worker shutdown.
                    let now = Instant::now();
                    if now >= deadline {
                        errors.push(RuleError::timeout(budget));
                        return errors;
                    }
                    receiver.recv_timeout(deadline - now)
                }
                _ => receiver.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };

            match received {
                Ok(error) => errors.push(error),
                Err(RecvTimeoutError::Timeout) => {
                    if let Some(budget) = timeout {
                        errors.push(RuleError::timeout(budget));
                    }
                    return errors;
                }
                Err(RecvTimeoutError::Disconnected) => return errors,
            }
        }
    }
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<T> std::fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("engine", &*self.engine)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
