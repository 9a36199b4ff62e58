//! # structure-validator
//!
//! A priority-ordered rule engine with deadline-bounded evaluation and
//! hierarchical, renderable errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use structure_validator::prelude::*;
//!
//! let max_length = Rule::new(|v: &String| {
//!     (v.len() > 8).then(|| RuleError::new("too big max length").critical())
//! })
//! .with_metadata(RuleMetadata::named("max_length_string"));
//!
//! let config = EngineConfig::new()
//!     .with_max_rules(10)
//!     .with_timeout(Duration::from_secs(1));
//! let engine = Engine::with_rules(config, vec![max_length]);
//!
//! let errors = Validator::new(engine).analyze("aaaaaaaaa".to_string());
//! assert_eq!(errors.len(), 1);
//! println!("{}", errors[0]);
//! ```
//!
//! ## Design
//!
//! - [`Rule`] — a named, prioritized predicate over `&T` yielding an
//!   optional [`RuleError`]. Lower priority runs earlier.
//! - [`Engine`] — an ordered, capacity-bounded rule container plus shared
//!   [`EngineConfig`]. Capacity overflow is a construction-time panic.
//! - [`Validator`] — runs an engine's rules sequentially on a worker thread
//!   while the calling thread collects errors against the configured
//!   deadline. Rule violations and timeouts are data in the returned vec,
//!   never panics.
//! - [`RuleError`] — severity flag, message, optional opaque cause, and
//!   nested child errors for delegated sub-evaluations.
//!
//! Deadline enforcement is cooperative: the worker checks the deadline
//! between rules, never inside one. See [`Validator::analyze`] for the
//! exact contract.

pub mod engine;
pub mod error;
pub mod prelude;
pub mod rule;
pub mod validator;

pub use engine::{DEFAULT_MAX_RULES, Engine, EngineConfig};
pub use error::{EngineError, RuleError};
pub use rule::{Rule, RuleMetadata};
pub use validator::Validator;
