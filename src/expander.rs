//! Cartesian expansion of a pattern over its rules.

use std::iter::FusedIterator;
use std::ops::Range;

use itertools::{Itertools, MultiProduct};
use tracing::{debug, trace};

use crate::rule::Rule;
use crate::template::Template;

/// Expand `pattern` into one string per combination of rule values.
///
/// The first rule varies slowest and the last fastest. The output length is
/// the product of the value counts of the rules whose variable occurs in
/// `pattern`. Other rules contribute nothing, so a pattern without
/// placeholders always yields exactly `[pattern]`.
pub fn expand(pattern: &str, rules: &[Rule]) -> Vec<String> {
    expand_iter(pattern, rules).collect()
}

/// Lazy form of [`expand`], yielding the same strings in the same order.
pub fn expand_iter<'a>(pattern: &str, rules: &'a [Rule]) -> Expansion<'a> {
    let template = Template::parse(pattern, rules);
    let used = template.used_rules();
    for (i, rule) in rules.iter().enumerate() {
        if !used.contains(&i) {
            trace!(variable = %rule.variable(), "rule governs no runs in pattern");
        }
    }
    let remaining = combination_count(rules, &used);
    debug!(pattern, rules = rules.len(), outputs = remaining, "expanding pattern");
    Expansion {
        combos: used
            .iter()
            .map(|&i| 0..rules[i].value_count())
            .multi_cartesian_product(),
        picks: vec![0; rules.len()],
        template,
        rules,
        used,
        remaining,
    }
}

/// Number of strings [`expand`] would return, without building them.
///
/// Saturates at `usize::MAX`.
pub fn expansion_count(pattern: &str, rules: &[Rule]) -> usize {
    let used = Template::parse(pattern, rules).used_rules();
    combination_count(rules, &used)
}

fn combination_count(rules: &[Rule], used: &[usize]) -> usize {
    used.iter()
        .fold(1usize, |acc, &i| acc.saturating_mul(rules[i].value_count()))
}

/// Iterator over the expansions of one pattern. See [`expand_iter`].
pub struct Expansion<'a> {
    template: Template,
    rules: &'a [Rule],
    /// Rules with at least one run, in rule order.
    used: Vec<usize>,
    combos: MultiProduct<Range<usize>>,
    /// Current value index per rule.
    picks: Vec<usize>,
    remaining: usize,
}

impl Iterator for Expansion<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        if !self.used.is_empty() {
            let combo = self.combos.next()?;
            for (&rule, index) in self.used.iter().zip(combo) {
                self.picks[rule] = index;
            }
        }
        Some(self.template.render(self.rules, &self.picks))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Expansion<'_> {}

impl FusedIterator for Expansion<'_> {}

#[cfg(test)]
mod tests;
