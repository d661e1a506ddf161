//! Structural equality behind the `equalTo` assertion.

use crate::Assertions;
use crate::normalize::numeric_value;
use rules_core::DataValue;
use rules_core::text::trim;

/// Compares two values recursively.
///
/// - Lists are equal when they have the same length and equal items in order.
/// - Maps are equal when they have the same keys and equal values per key.
/// - Strings are compared after trimming surrounding whitespace.
/// - Values that both pass the `number` assertion are compared numerically,
///   so `1` equals `"1"`.
/// - Anything else must have the same type and value.
pub fn deep_equal<A: Assertions + ?Sized>(
    assertions: &A,
    actual: &DataValue,
    expected: &DataValue,
) -> bool {
    match (actual, expected) {
        (DataValue::List(a), DataValue::List(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b)
                    .all(|(x, y)| deep_equal(assertions, x, y))
        }
        (DataValue::Map(a), DataValue::Map(b)) => {
            a.len() == b.len()
                && a.iter().all(|(key, x)| {
                    b.get(key)
                        .is_some_and(|y| deep_equal(assertions, x, y))
                })
        }
        (DataValue::String(a), DataValue::String(b)) => trim(a) == trim(b),
        _ if assertions.number(actual) && assertions.number(expected) => {
            numeric_value(actual) == numeric_value(expected)
        }
        _ => strict_equal(actual, expected),
    }
}

fn strict_equal(actual: &DataValue, expected: &DataValue) -> bool {
    match (actual, expected) {
        (DataValue::Null, DataValue::Null) => true,
        (DataValue::Bool(a), DataValue::Bool(b)) => a == b,
        (DataValue::Pattern(a), DataValue::Pattern(b)) => a == b,
        (a, b) => match (a.as_float(), b.as_float()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}
