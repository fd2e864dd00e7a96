//! Textual rule definitions.
//!
//! A definition has the form `VAR[/PAD]=VALUES`:
//!
//! - `a=1..12` is the range 1 to 12 with the default pad character.
//! - `a/ =1..12` pads with spaces.
//! - `c=red,green,blue` is a value list. Items are taken verbatim, so
//!   `c=a,,b` has an empty middle value.

use std::str::FromStr;

use crate::rule::{Rule, RuleArgs, RuleError};

/// Parse one `VAR[/PAD]=VALUES` definition into a [`Rule`].
pub fn parse_rule(def: &str) -> Result<Rule, RuleError> {
    let malformed = || RuleError::Malformed(def.to_string());
    let (head, values) = def.split_once('=').ok_or_else(malformed)?;

    let split = head.chars().next().map_or(0, char::len_utf8);
    let (variable, rest) = head.split_at(split);
    let pad = match rest {
        "" => None,
        rest => Some(rest.strip_prefix('/').ok_or_else(malformed)?.to_string()),
    };

    let args = match parse_range(values) {
        Some((start, end)) => RuleArgs::Range {
            start: Some(start),
            end: Some(end),
            pad,
        },
        None if values.is_empty() => RuleArgs::Values {
            values: Some(Vec::new()),
            pad,
        },
        None => RuleArgs::Values {
            values: Some(values.split(',').map(str::to_string).collect()),
            pad,
        },
    };
    Rule::new(variable, args)
}

/// `START..END` with both ends decimal integers.
fn parse_range(s: &str) -> Option<(i64, i64)> {
    let (start, end) = s.split_once("..")?;
    Some((start.parse().ok()?, end.parse().ok()?))
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rule(s)
    }
}
