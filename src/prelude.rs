//! Prelude module for convenient imports.
//!
//! Provides a single `use structure_validator::prelude::*;` import that
//! brings in every type needed to declare rules, assemble an engine, and
//! run an analysis.
//!
//! # Examples
//!
//! ```rust
//! use structure_validator::prelude::*;
//!
//! let engine = Engine::with_rules(
//!     EngineConfig::new(),
//!     vec![Rule::new(|v: &i32| (*v < 0).then(|| RuleError::new("negative")))],
//! );
//! assert!(Validator::new(engine).analyze(1).is_empty());
//! ```

pub use crate::engine::{DEFAULT_MAX_RULES, Engine, EngineConfig};
pub use crate::error::{EngineError, RuleError};
pub use crate::rule::{Rule, RuleMetadata};
pub use crate::validator::Validator;
