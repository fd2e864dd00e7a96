//! Expand a template with single-character placeholder runs into every
//! combination of per-variable values.
//!
//! # Example
//!
//! ```rust
//! use pattern_expander::{Rule, expand};
//!
//! let rules = [
//!     Rule::from_range('a', 1, 2).unwrap(),
//!     Rule::from_values('b', ["x", "yy"]).unwrap().with_pad_char('_'),
//! ];
//!
//! // `aaa` pads to three chars with '0', `bb` to two chars with '_'.
//! assert_eq!(
//!     expand("file-aaa-bb.txt", &rules),
//!     [
//!         "file-001-_x.txt",
//!         "file-001-yy.txt",
//!         "file-002-_x.txt",
//!         "file-002-yy.txt",
//!     ]
//! );
//! ```

mod expander;
pub mod logging;
mod rule;
mod rule_def;
pub mod template;

pub use expander::{Expansion, expand, expand_iter, expansion_count};
pub use rule::{DEFAULT_PAD_CHAR, Rule, RuleArgs, RuleError};
pub use rule_def::parse_rule;
pub use template::{Part, Template};
