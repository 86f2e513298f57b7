use serde_json::Value;

use crate::core::WbError;

/// Reads a JSON price as whole minor units.
///
/// `null` is absent. Integers pass through; floats are floored, which keeps
/// `floor(x / 100)` exact after [`minor_to_whole`]. Anything else is a data error.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(crate) fn minor_units(v: &Value) -> Result<Option<i64>, WbError> {
    if v.is_null() {
        return Ok(None);
    }
    if let Some(i) = v.as_i64() {
        return Ok(Some(i));
    }
    match v.as_f64() {
        Some(f) if f.floor() >= i64::MIN as f64 && f.floor() <= i64::MAX as f64 => {
            Ok(Some(f.floor() as i64))
        }
        Some(f) => Err(WbError::Data(format!("price {f} out of range for i64"))),
        None => Err(WbError::Data(format!("price is not a number: {v}"))),
    }
}

/// Converts minor units (kopecks) to whole units, flooring.
pub(crate) const fn minor_to_whole(minor: i64) -> i64 {
    minor.div_euclid(100)
}
