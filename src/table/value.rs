use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A single cell of a [`Table`](super::Table)
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Numeric view of the cell. Text, missing and NaN cells have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) if !v.is_nan() => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// NaN floats count as missing, same as an empty CSV cell.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Missing => true,
            CellValue::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Int(_) | CellValue::Float(_) if !self.is_missing() => 0,
            CellValue::Text(_) => 1,
            _ => 2,
        }
    }

    /// Ordering used everywhere distinct values are enumerated.
    ///
    /// Numbers sort numerically (ints and floats compare as f64), text sorts
    /// lexicographically, numbers come before text and missing cells last.
    pub fn sort_cmp(&self, other: &CellValue) -> Ordering {
        match (self.rank(), other.rank()) {
            (0, 0) => {
                let a = self.as_f64().unwrap_or_default();
                let b = other.as_f64().unwrap_or_default();
                a.total_cmp(&b)
            }
            (1, 1) => self.as_str().cmp(&other.as_str()),
            (ra, rb) => ra.cmp(&rb),
        }
    }

    /// Equality under [`CellValue::sort_cmp`], so `Int(1)` matches `Float(1.0)`.
    pub fn same_as(&self, other: &CellValue) -> bool {
        self.sort_cmp(other) == Ordering::Equal
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Missing => Ok(()),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Int(v) => serializer.serialize_i64(*v),
            CellValue::Float(v) if v.is_finite() => serializer.serialize_f64(*v),
            CellValue::Text(s) => serializer.serialize_str(s),
            _ => serializer.serialize_none(),
        }
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Missing)
    }
}
