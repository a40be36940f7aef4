use std::cmp::Ordering;
use std::ops::Add;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};
use serde::{Serialize, Serializer};

/// Numeric sustainability score as stored in SQLite.
///
/// Integer and real storage classes are kept apart so the exported JSON shows
/// the same number form as the source row (`80` vs `80.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    Integer(i64),
    Real(f64),
}

impl Score {
    pub const ZERO: Score = Score::Integer(0);

    pub fn as_f64(self) -> f64 {
        match self {
            Score::Integer(value) => value as f64,
            Score::Real(value) => value,
        }
    }

    /// Rounds to `digits` decimal places. Integers are returned unchanged.
    ///
    /// Rounding works on the exact binary value with ties to even, so `2.675`
    /// (stored as 2.67499...) becomes `2.67`.
    pub fn rounded(self, digits: usize) -> Score {
        match self {
            Score::Integer(_) => self,
            Score::Real(value) if !value.is_finite() => self,
            Score::Real(value) => {
                let text = format!("{value:.digits$}");
                Score::Real(text.parse().unwrap_or(value))
            }
        }
    }

    /// Numeric ordering: `-0.0`, `0.0` and `0` are equal, and integers are
    /// compared against reals without going through a lossy cast.
    pub fn numeric_cmp(&self, other: &Score) -> Ordering {
        match (*self, *other) {
            (Score::Integer(a), Score::Integer(b)) => a.cmp(&b),
            (Score::Integer(a), Score::Real(b)) => cmp_integer_real(a, b),
            (Score::Real(a), Score::Integer(b)) => cmp_integer_real(b, a).reverse(),
            (Score::Real(a), Score::Real(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }
}

// 2^63 as f64; every finite real outside [-2^63, 2^63) is beyond any i64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn cmp_integer_real(integer: i64, real: f64) -> Ordering {
    if real.is_nan() {
        return Ordering::Equal;
    }
    if real >= I64_BOUND {
        return Ordering::Less;
    }
    if real < -I64_BOUND {
        return Ordering::Greater;
    }

    let whole = real.trunc();
    match integer.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64
            .partial_cmp(&(real - whole))
            .unwrap_or(Ordering::Equal),
        unequal => unequal,
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Score) -> Score {
        match (self, rhs) {
            (Score::Integer(a), Score::Integer(b)) => a
                .checked_add(b)
                .map(Score::Integer)
                .unwrap_or_else(|| Score::Real(a as f64 + b as f64)),
            (a, b) => Score::Real(a.as_f64() + b.as_f64()),
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Score::Integer(value) => serializer.serialize_i64(*value),
            Score::Real(value) => serializer.serialize_f64(*value),
        }
    }
}

impl FromSql for Score {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(value) => Ok(Score::Integer(value)),
            ValueRef::Real(value) => Ok(Score::Real(value)),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Score::Integer(value)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Score::Real(value)
    }
}
