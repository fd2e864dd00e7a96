//! Placeholder run detection.
//!
//! A pattern is split into literal text and placeholder runs. A run is a
//! maximal stretch of one rule variable repeated; its length in chars is the
//! minimum width of whatever gets substituted there.

use itertools::Itertools;

use crate::rule::Rule;

/// One piece of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Literal(String),
    /// A run governed by `rules[rule]`, `width` chars long.
    Slot { rule: usize, width: usize },
}

/// A pattern resolved against a rule list.
///
/// Rendering is internal to expansion; callers go through
/// [`expand`](crate::expand):
///
/// ```compile_fail
/// use pattern_expander::{Rule, Template};
///
/// let rules = [Rule::from_range('a', 1, 2).unwrap()];
/// Template::parse("a", &rules).render(&rules, &[]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    parts: Vec<Part>,
}

impl Template {
    /// Split `pattern` into parts.
    ///
    /// Characters that are no rule's variable stay literal. When several rules
    /// share a variable, the first one governs its runs.
    pub fn parse(pattern: &str, rules: &[Rule]) -> Self {
        let mut parts: Vec<Part> = Vec::new();
        for (ch, run) in &pattern.chars().chunk_by(|&c| c) {
            match rules.iter().position(|r| r.variable() == ch) {
                Some(rule) => parts.push(Part::Slot {
                    rule,
                    width: run.count(),
                }),
                None => match parts.last_mut() {
                    Some(Part::Literal(text)) => text.extend(run),
                    _ => parts.push(Part::Literal(run.collect())),
                },
            }
        }
        Self { parts }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Indices of the rules that govern at least one run, ascending.
    pub fn used_rules(&self) -> Vec<usize> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Slot { rule, .. } => Some(*rule),
                Part::Literal(_) => None,
            })
            .sorted_unstable()
            .dedup()
            .collect()
    }

    /// Substitute `rules[i].value(picks[i])` into every run of rule `i`.
    ///
    /// `picks` is indexed by rule; entries for rules with no run are ignored.
    pub(crate) fn render(&self, rules: &[Rule], picks: &[usize]) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::Slot { rule, width } => {
                    let rule_def = &rules[*rule];
                    rule_def.padded(&rule_def.value(picks[*rule]), *width, &mut out);
                }
            }
        }
        out
    }
}
