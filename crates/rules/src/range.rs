//! Nagios threshold ranges
//!
//! See <https://nagios-plugins.org/doc/guidelines.html#THRESHOLDFORMAT>.
//! A range describes the values that pass; a leading `@` inverts it so that
//! values inside the range are the ones reported.
//!
//! | expression | passes when |
//! |---|---|
//! | `10` | `0 <= v <= 10` |
//! | `10:` | `v >= 10` |
//! | `~:10` | `v <= 10` |
//! | `10:20` | `10 <= v <= 20` |
//! | `@10:20` | `v < 10 \|\| v > 20` |

use check_json_core::{
    Error, Result, Scalar, RANGE_BOUND_SEPARATOR, RANGE_INVERT_PREFIX, RANGE_OPEN_LOWER_MARKER,
};
use std::fmt;
use std::str::FromStr;

/// Shape of a range once the optional `@` has been stripped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// `~:M`, no lower bound
    AtMost(i64),
    /// `N:`, no upper bound
    AtLeast(i64),
    /// `N:M`, or `M` meaning `0:M`
    Between(i64, i64),
}

/// A parsed threshold expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    invert: bool,
    bounds: Bounds,
}

impl RangeSpec {
    /// Parse a threshold expression, rejecting anything outside the Nagios forms
    pub fn parse(expression: &str) -> Result<Self> {
        let (invert, body) = match expression.strip_prefix(RANGE_INVERT_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, expression),
        };

        let parts: Vec<&str> = body.split(RANGE_BOUND_SEPARATOR).collect();
        let bounds = match parts.as_slice() {
            [end] => Bounds::Between(0, parse_bound(expression, end)?),
            [start, ""] => Bounds::AtLeast(parse_bound(expression, start)?),
            [start, end] if start.trim() == RANGE_OPEN_LOWER_MARKER => {
                Bounds::AtMost(parse_bound(expression, end)?)
            }
            [start, end] => Bounds::Between(
                parse_bound(expression, start)?,
                parse_bound(expression, end)?,
            ),
            _ => {
                return Err(Error::invalid_range_format(
                    expression,
                    format!("expected at most one '{RANGE_BOUND_SEPARATOR}' separator"),
                ))
            }
        };

        Ok(Self { invert, bounds })
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.invert
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Inclusive lower bound, `None` for the `~` marker
    #[must_use]
    pub fn lower_bound(&self) -> Option<i64> {
        match self.bounds {
            Bounds::AtMost(_) => None,
            Bounds::AtLeast(lower) | Bounds::Between(lower, _) => Some(lower),
        }
    }

    /// Inclusive upper bound, `None` when unbounded above
    #[must_use]
    pub fn upper_bound(&self) -> Option<i64> {
        match self.bounds {
            Bounds::AtLeast(_) => None,
            Bounds::AtMost(upper) | Bounds::Between(_, upper) => Some(upper),
        }
    }

    #[must_use]
    pub fn is_open_lower(&self) -> bool {
        matches!(self.bounds, Bounds::AtMost(_))
    }

    /// Whether `value` should be reported
    #[must_use]
    pub fn fails(&self, value: i64) -> bool {
        let inside = match self.bounds {
            Bounds::AtMost(upper) => value <= upper,
            Bounds::AtLeast(lower) => value >= lower,
            Bounds::Between(lower, upper) => lower <= value && value <= upper,
        };
        inside == self.invert
    }
}

impl FromStr for RangeSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.invert {
            write!(f, "{RANGE_INVERT_PREFIX}")?;
        }
        match self.bounds {
            Bounds::AtMost(upper) => write!(f, "{RANGE_OPEN_LOWER_MARKER}:{upper}"),
            Bounds::AtLeast(lower) => write!(f, "{lower}:"),
            Bounds::Between(lower, upper) => write!(f, "{lower}:{upper}"),
        }
    }
}

fn parse_bound(expression: &str, bound: &str) -> Result<i64> {
    bound.trim().parse::<i64>().map_err(|_| {
        Error::invalid_range_format(expression, format!("'{bound}' is not an integer bound"))
    })
}

/// Read a property as an integer for range comparison.
///
/// Integral numbers and integer strings are accepted; floats are truncated
/// toward zero. Booleans, null and other strings are not numbers.
pub fn parse_integer(key: &str, value: &Scalar) -> Result<i64> {
    let parsed = match value {
        Scalar::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Scalar::String(s) => s.trim().parse::<i64>().ok(),
        Scalar::Null | Scalar::Bool(_) => None,
    };

    parsed.ok_or_else(|| Error::non_numeric_value(key, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn fails(expression: &str, value: i64) -> bool {
        RangeSpec::parse(expression).unwrap().fails(value)
    }

    #[test]
    fn bare_number_has_implicit_zero_lower_bound() {
        let spec = RangeSpec::parse("16").unwrap();
        assert_eq!(spec.lower_bound(), Some(0));
        assert_eq!(spec.upper_bound(), Some(16));

        assert!(!fails("16", 15));
        assert!(fails("10", 15));
        assert!(fails("10", -1));
        assert!(!fails("10", 0));
    }

    #[test]
    fn trailing_colon_leaves_upper_unbounded() {
        let spec = RangeSpec::parse("16:").unwrap();
        assert_eq!(spec.upper_bound(), None);

        assert!(fails("16:", 15));
        assert!(!fails("16:", 16));
        assert!(!fails("16:", i64::MAX));
    }

    #[test]
    fn tilde_leaves_lower_unbounded() {
        let spec = RangeSpec::parse("~:10").unwrap();
        assert!(spec.is_open_lower());
        assert_eq!(spec.lower_bound(), None);

        assert!(fails("~:10", 15));
        assert!(!fails("~:16", 15));
        assert!(!fails("~:10", i64::MIN));
    }

    #[test]
    fn explicit_bounds_are_inclusive() {
        assert!(fails("16:20", 15));
        assert!(!fails("16:20", 16));
        assert!(!fails("16:20", 20));
        assert!(fails("16:20", 21));
        assert!(!fails("-5:-1", -3));
    }

    #[test]
    fn at_prefix_reports_values_inside() {
        assert!(fails("@10:20", 15));
        assert!(fails("@10:20", 10));
        assert!(!fails("@10:20", 21));
        assert!(fails("@~:16", 15));
        assert!(!fails("@16:", 15));
        assert!(fails("@16:", 16));
        assert!(fails("@10", 0));
    }

    #[test]
    fn reversed_bounds_are_evaluated_literally() {
        assert!(fails("20:10", 15));
        assert!(!fails("@20:10", 15));
    }

    #[test]
    fn unrecognised_forms_are_rejected() {
        for expression in ["", "@", "~", "~:", ":5", "1:2:3", "abc", "1.5", "5:x", "@@5"] {
            let err = RangeSpec::parse(expression).unwrap_err();
            assert!(
                matches!(err, Error::InvalidRangeFormat { .. }),
                "{expression:?} gave {err}"
            );
        }
    }

    #[test]
    fn display_normalises_expression() {
        assert_eq!(RangeSpec::parse("10").unwrap().to_string(), "0:10");
        assert_eq!(RangeSpec::parse("@10:20").unwrap().to_string(), "@10:20");
        assert_eq!(RangeSpec::parse("~:5").unwrap().to_string(), "~:5");
        assert_eq!(RangeSpec::parse("16:").unwrap().to_string(), "16:");
        assert_eq!("@ 3 : 7".parse::<RangeSpec>().unwrap().to_string(), "@3:7");
    }

    #[test]
    fn integers_are_read_from_numbers_and_strings() {
        assert_eq!(parse_integer("k", &Scalar::from(15)).unwrap(), 15);
        assert_eq!(parse_integer("k", &Scalar::from(" 15 ")).unwrap(), 15);
        assert_eq!(parse_integer("k", &Scalar::from("-4")).unwrap(), -4);

        let float = Scalar::from_json(&json!(15.9)).unwrap();
        assert_eq!(parse_integer("k", &float).unwrap(), 15);
        let negative = Scalar::from_json(&json!(-2.5)).unwrap();
        assert_eq!(parse_integer("k", &negative).unwrap(), -2);
    }

    #[test]
    fn non_numeric_values_are_a_distinct_error() {
        for value in [Scalar::from("ALARM"), Scalar::Null, Scalar::from(true)] {
            let err = parse_integer("a.b", &value).unwrap_err();
            assert!(matches!(err, Error::NonNumericValue { ref key, .. } if key == "a.b"));
        }
    }

    proptest! {
        #[test]
        fn proptest_inversion_complements_every_form(
            lower in -1000i64..1000,
            width in 0i64..1000,
            value in -3000i64..3000
        ) {
            let upper = lower + width;
            for body in [
                format!("{upper}"),
                format!("{lower}:"),
                format!("~:{upper}"),
                format!("{lower}:{upper}"),
            ] {
                let plain = RangeSpec::parse(&body).unwrap();
                let inverted = RangeSpec::parse(&format!("@{body}")).unwrap();
                prop_assert_ne!(plain.fails(value), inverted.fails(value));
            }
        }

        #[test]
        fn proptest_display_reparses_to_same_range(
            lower in -1000i64..1000,
            upper in -1000i64..1000,
            invert in any::<bool>()
        ) {
            let prefix = if invert { "@" } else { "" };
            let spec = RangeSpec::parse(&format!("{prefix}{lower}:{upper}")).unwrap();
            prop_assert_eq!(RangeSpec::parse(&spec.to_string()).unwrap(), spec);
        }
    }
}
