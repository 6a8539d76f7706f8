//! The evaluation passes over a flattened document
//!
//! Every rule is checked against every key; nothing short-circuits, so one
//! run reports every violated rule.

use check_json_core::{PropertyMap, EXISTS_CONTEXT_LEVELS};
use tracing::{debug, debug_span};

use crate::context::format_context;
use crate::rule::{Rule, RuleSet};

/// Outcome of one or more passes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// One formatted message per violated (key, rule) pair or missing key
    pub failures: Vec<String>,
    /// Rule checks that could not be decided, such as a range rule meeting a
    /// non-numeric value
    pub errors: Vec<String>,
}

impl Evaluation {
    pub fn extend(&mut self, other: Evaluation) {
        self.failures.extend(other.failures);
        self.errors.extend(other.errors);
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.errors.is_empty()
    }
}

/// Evaluates rules against one read-only property map
#[derive(Debug, Clone, Copy)]
pub struct RuleProcessor<'a> {
    properties: &'a PropertyMap,
}

impl<'a> RuleProcessor<'a> {
    #[must_use]
    pub fn new(properties: &'a PropertyMap) -> Self {
        Self { properties }
    }

    /// Run the equality, range and existence passes of a rule set, in that order
    #[must_use]
    pub fn evaluate(&self, rules: &RuleSet) -> Evaluation {
        let span = debug_span!("evaluate", severity = %rules.severity(), rules = rules.len());
        let _guard = span.enter();

        let mut evaluation = self.check_equals(rules.equals());
        evaluation.extend(self.check_ranges(rules.ranges()));
        evaluation.failures.extend(self.check_exists(rules.exists()));

        debug!(
            failures = evaluation.failures.len(),
            errors = evaluation.errors.len(),
            "rule set evaluated"
        );
        evaluation
    }

    /// Report every pattern that matches no key at all
    #[must_use]
    pub fn check_exists(&self, rules: &[Rule]) -> Vec<String> {
        let mut found = vec![false; rules.len()];

        for key in self.properties.keys() {
            for (rule, hit) in rules.iter().zip(found.iter_mut()) {
                if !*hit && rule.matches(key) {
                    *hit = true;
                }
            }
        }

        rules
            .iter()
            .zip(found)
            .filter(|(_, hit)| !hit)
            .map(|(rule, _)| {
                debug!(pattern = rule.key_pattern(), "no key matches pattern");
                format_context(
                    self.properties,
                    rule.key_pattern(),
                    None,
                    EXISTS_CONTEXT_LEVELS,
                )
            })
            .collect()
    }

    /// Check matched values against the accepted literals of equality rules
    #[must_use]
    pub fn check_equals(&self, rules: &[Rule]) -> Evaluation {
        self.check_key_values(rules)
    }

    /// Check matched values against the thresholds of range rules
    #[must_use]
    pub fn check_ranges(&self, rules: &[Rule]) -> Evaluation {
        self.check_key_values(rules)
    }

    // Keys outer, rules inner: messages come out in document order.
    fn check_key_values(&self, rules: &[Rule]) -> Evaluation {
        let mut evaluation = Evaluation::default();

        for (key, value) in self.properties {
            for rule in rules.iter().filter(|rule| rule.matches(key)) {
                match rule.is_violated_by(key, value) {
                    Ok(false) => {}
                    Ok(true) => {
                        debug!(key = %key, value = %value, rule = rule.spec(), "rule violated");
                        evaluation.failures.push(format_context(
                            self.properties,
                            key,
                            Some(value),
                            rule.context_levels(),
                        ));
                    }
                    Err(e) => {
                        debug!(key = %key, rule = rule.spec(), error = %e, "rule undecidable");
                        evaluation.errors.push(format!("{e} (rule '{}')", rule.spec()));
                    }
                }
            }
        }

        evaluation
    }
}
