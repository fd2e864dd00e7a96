//! Substitution rules: one variable, its ordered values, and a pad character.

use std::borrow::Cow;
use std::fmt;

/// Pad character used when none is given.
pub const DEFAULT_PAD_CHAR: char = '0';

/// Reasons a [`Rule`] could not be constructed.
///
/// Every variant is an invalid-arguments failure; the variant records which
/// part of the argument shape was wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A field required by the chosen shape was not supplied.
    MissingArgument(&'static str),
    /// The variable or pad was not exactly one character.
    NotSingleChar { field: &'static str, value: String },
    /// The value list was empty.
    EmptyValues,
    /// A range whose end comes before its start.
    ReversedRange { start: i64, end: i64 },
    /// A textual rule definition that does not fit `VAR[/PAD]=VALUES`.
    Malformed(String),
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Incorrect arguments provided to the Rule constructor: ")?;
        match self {
            Self::MissingArgument(field) => write!(f, "missing {field}"),
            Self::NotSingleChar { field, value } => {
                write!(f, "{field} must be a single character, got {value:?}")
            }
            Self::EmptyValues => write!(f, "value list is empty"),
            Self::ReversedRange { start, end } => {
                write!(f, "range end {end} is before start {start}")
            }
            Self::Malformed(def) => write!(f, "cannot parse rule definition {def:?}"),
        }
    }
}

impl std::error::Error for RuleError {}

/// Loosely-typed constructor arguments, for callers that assemble rules at
/// runtime and want a single entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleArgs {
    /// Explicit list of values, already stringified.
    Values {
        values: Option<Vec<String>>,
        pad: Option<String>,
    },
    /// Inclusive integer range.
    Range {
        start: Option<i64>,
        end: Option<i64>,
        pad: Option<String>,
    },
}

/// Where a rule's values come from.
///
/// Ranges keep only their bounds; values are produced on demand so a wide
/// range costs nothing until it is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Domain {
    List(Vec<String>),
    Range { start: i64, end: i64 },
}

/// The substitution domain of one placeholder variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    variable: char,
    domain: Domain,
    pad_char: char,
}

impl Rule {
    /// Build a rule from the dynamic argument shape.
    ///
    /// `variable` and any pad must be exactly one character, and every field
    /// of the chosen shape must be present.
    pub fn new(variable: &str, args: RuleArgs) -> Result<Self, RuleError> {
        let variable = single_char("variable", variable)?;
        let (rule, pad) = match args {
            RuleArgs::Values { values, pad } => {
                let values = values.ok_or(RuleError::MissingArgument("values"))?;
                (Self::from_values(variable, values)?, pad)
            }
            RuleArgs::Range { start, end, pad } => {
                let start = start.ok_or(RuleError::MissingArgument("range start"))?;
                let end = end.ok_or(RuleError::MissingArgument("range end"))?;
                (Self::from_range(variable, start, end)?, pad)
            }
        };
        match pad {
            Some(pad) => Ok(rule.with_pad_char(single_char("pad character", &pad)?)),
            None => Ok(rule),
        }
    }

    /// Rule over an explicit list of values, each converted with `ToString`.
    ///
    /// Order and duplicates are preserved.
    pub fn from_values<I>(variable: char, values: I) -> Result<Self, RuleError>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        if values.is_empty() {
            return Err(RuleError::EmptyValues);
        }
        Ok(Self {
            variable,
            domain: Domain::List(values),
            pad_char: DEFAULT_PAD_CHAR,
        })
    }

    /// Rule over every integer in `start..=end`, ascending.
    pub fn from_range(variable: char, start: i64, end: i64) -> Result<Self, RuleError> {
        if end < start {
            return Err(RuleError::ReversedRange { start, end });
        }
        Ok(Self {
            variable,
            domain: Domain::Range { start, end },
            pad_char: DEFAULT_PAD_CHAR,
        })
    }

    pub fn with_pad_char(self, pad_char: char) -> Self {
        Self { pad_char, ..self }
    }

    pub fn variable(&self) -> char {
        self.variable
    }

    /// All values in order. Builds every string, so avoid on wide ranges.
    pub fn values(&self) -> Vec<String> {
        (0..self.value_count()).map(|i| self.value(i).into_owned()).collect()
    }

    /// Number of values, saturating at `usize::MAX` for ranges wider than that.
    pub fn value_count(&self) -> usize {
        match &self.domain {
            Domain::List(values) => values.len(),
            Domain::Range { start, end } => {
                let count = i128::from(*end) - i128::from(*start) + 1;
                usize::try_from(count).unwrap_or(usize::MAX)
            }
        }
    }

    /// The value at `index`, which must be below [`Rule::value_count`].
    pub fn value(&self, index: usize) -> Cow<'_, str> {
        match &self.domain {
            Domain::List(values) => Cow::Borrowed(&values[index]),
            Domain::Range { start, .. } => {
                Cow::Owned((i128::from(*start) + index as i128).to_string())
            }
        }
    }

    pub fn pad_char(&self) -> char {
        self.pad_char
    }

    /// Append `value` left-padded to `width` chars. Wider values go in whole.
    pub(crate) fn padded(&self, value: &str, width: usize, out: &mut String) {
        let len = value.chars().count();
        out.extend(std::iter::repeat_n(self.pad_char, width.saturating_sub(len)));
        out.push_str(value);
    }
}

fn single_char(field: &'static str, s: &str) -> Result<char, RuleError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(RuleError::NotSingleChar {
            field,
            value: s.to_string(),
        }),
    }
}
