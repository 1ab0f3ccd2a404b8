use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A generated value for a single column cell.
///
/// Numerics use an exact unscaled/scale pair rather than `f64` so the
/// declared scale survives rendering to the digit: a scale-2 column always
/// prints exactly two fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Decimal { unscaled: i64, scale: u32 },
    Timestamp(NaiveDateTime),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Decimal { unscaled, scale } => {
                if *scale == 0 {
                    write!(f, "{}", unscaled)
                } else {
                    let divisor = 10i64.pow(*scale);
                    let sign = if *unscaled < 0 { "-" } else { "" };
                    let magnitude = unscaled.unsigned_abs();
                    write!(
                        f,
                        "{}{}.{:0width$}",
                        sign,
                        magnitude / divisor as u64,
                        magnitude % divisor as u64,
                        width = *scale as usize
                    )
                }
            }
            Value::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}
