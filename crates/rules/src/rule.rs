//! Rules parsed from command-line strings
//!
//! Equality and range rules are written `key_regex,value,level`; existence
//! rules are a bare `key_regex`. Everything that can be wrong with a rule
//! (part count, regex syntax, range syntax, level) is caught here, before a
//! document is ever fetched.

use check_json_core::{
    Error, Result, Scalar, Severity, ACCEPTED_VALUE_SEPARATOR, EXISTS_CONTEXT_LEVELS,
    RULE_FIELD_SEPARATOR,
};
use regex::Regex;

use crate::range::{parse_integer, RangeSpec};

/// What a rule checks once its pattern matched a key
#[derive(Debug, Clone, PartialEq)]
pub enum RuleKind {
    /// At least one key must match the pattern
    Exists,
    /// The value must be one of the accepted literals
    Equals(Vec<String>),
    /// The value must pass the threshold range
    Range(RangeSpec),
}

/// A validated rule
#[derive(Debug, Clone)]
pub struct Rule {
    spec: String,
    key_pattern: String,
    pattern: Regex,
    kind: RuleKind,
    context_levels: usize,
}

impl Rule {
    /// Parse an existence rule: the whole string is the key pattern
    pub fn exists(spec: &str) -> Result<Self> {
        Ok(Self {
            spec: spec.to_owned(),
            key_pattern: spec.to_owned(),
            pattern: compile_pattern(spec, spec)?,
            kind: RuleKind::Exists,
            context_levels: EXISTS_CONTEXT_LEVELS,
        })
    }

    /// Parse an equality rule `key_regex,value1:value2,level`
    pub fn equals(spec: &str) -> Result<Self> {
        let (key_pattern, expected, context_levels) = split_spec(spec)?;
        let accepted = expected
            .split(ACCEPTED_VALUE_SEPARATOR)
            .map(str::to_owned)
            .collect();

        Ok(Self {
            spec: spec.to_owned(),
            key_pattern: key_pattern.to_owned(),
            pattern: compile_pattern(spec, key_pattern)?,
            kind: RuleKind::Equals(accepted),
            context_levels,
        })
    }

    /// Parse a threshold rule `key_regex,[@]start:end,level`
    pub fn range(spec: &str) -> Result<Self> {
        let (key_pattern, expression, context_levels) = split_spec(spec)?;

        Ok(Self {
            spec: spec.to_owned(),
            key_pattern: key_pattern.to_owned(),
            pattern: compile_pattern(spec, key_pattern)?,
            kind: RuleKind::Range(RangeSpec::parse(expression)?),
            context_levels,
        })
    }

    /// The rule string as it was given
    #[must_use]
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// The key regex as it was given, before anchoring
    #[must_use]
    pub fn key_pattern(&self) -> &str {
        &self.key_pattern
    }

    #[must_use]
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    #[must_use]
    pub fn context_levels(&self) -> usize {
        self.context_levels
    }

    /// Whether the pattern matches at the start of `key`
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.pattern.is_match(key)
    }

    /// Whether the value at `key` breaks this rule.
    ///
    /// Existence rules are decided over the whole map, never per value, so
    /// they are never violated here.
    pub fn is_violated_by(&self, key: &str, value: &Scalar) -> Result<bool> {
        match &self.kind {
            RuleKind::Exists => Ok(false),
            RuleKind::Equals(accepted) => {
                let actual = value.to_string();
                Ok(!accepted.iter().any(|candidate| *candidate == actual))
            }
            RuleKind::Range(range) => Ok(range.fails(parse_integer(key, value)?)),
        }
    }
}

/// Split `key_regex,value,level` from the right so the regex may contain commas
fn split_spec(spec: &str) -> Result<(&str, &str, usize)> {
    let mut parts = spec.rsplitn(3, RULE_FIELD_SEPARATOR);
    let (Some(levels), Some(value), Some(key_pattern)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::malformed_rule_spec(
            spec,
            "expected 'key_regex,value,level'",
        ));
    };

    let context_levels = levels.trim().parse::<usize>().map_err(|_| {
        Error::malformed_rule_spec(
            spec,
            format!("context level '{levels}' is not a non-negative integer"),
        )
    })?;

    Ok((key_pattern, value, context_levels))
}

/// Compile a key pattern anchored at the start of the key, not at its end.
///
/// The pattern must compile on its own first: an unbalanced group would
/// otherwise close the anchoring group and leave later branches unanchored.
fn compile_pattern(spec: &str, key_pattern: &str) -> Result<Regex> {
    let invalid =
        |e: regex::Error| Error::malformed_rule_spec(spec, format!("invalid key regex: {e}"));

    Regex::new(key_pattern).map_err(invalid)?;
    Regex::new(&format!("^(?:{key_pattern})")).map_err(invalid)
}

/// All rules of one severity class
#[derive(Debug, Clone)]
pub struct RuleSet {
    severity: Severity,
    equals: Vec<Rule>,
    ranges: Vec<Rule>,
    exists: Vec<Rule>,
}

impl RuleSet {
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            equals: Vec::new(),
            ranges: Vec::new(),
            exists: Vec::new(),
        }
    }

    /// Parse every rule string of a severity class, failing on the first bad one
    pub fn parse<S: AsRef<str>>(
        severity: Severity,
        equals: &[S],
        ranges: &[S],
        exists: &[S],
    ) -> Result<Self> {
        Ok(Self {
            severity,
            equals: parse_all(equals, Rule::equals)?,
            ranges: parse_all(ranges, Rule::range)?,
            exists: parse_all(exists, Rule::exists)?,
        })
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn equals(&self) -> &[Rule] {
        &self.equals
    }

    #[must_use]
    pub fn ranges(&self) -> &[Rule] {
        &self.ranges
    }

    #[must_use]
    pub fn exists(&self) -> &[Rule] {
        &self.exists
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.equals.len() + self.ranges.len() + self.exists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn parse_all<S: AsRef<str>>(specs: &[S], parse: fn(&str) -> Result<Rule>) -> Result<Vec<Rule>> {
    specs.iter().map(|spec| parse(spec.as_ref())).collect()
}
