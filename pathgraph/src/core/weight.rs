use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    num::ParseFloatError,
    str::FromStr,
};

use thiserror::Error;

use super::error::Error;

/// Edge weight, a finite non-negative floating-point number.
///
/// Dijkstra's algorithm requires that all edges have non-negative weights,
/// and the graph rejects anything else at
/// [`connect`](crate::graph::Graph::connect) time. Storing the weight in this
/// type moves that check into the type system: once a `Weight` exists, it is
/// known to be valid.
///
/// Since NaN can never be a `Weight`, the type implements [`Eq`], [`Ord`] and
/// [`Hash`], which is needed for edges to have structural identity. Negative
/// zero is normalized to positive zero so that the bit-wise hash agrees with
/// equality.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);

    /// Cost of an edge in an unweighted graph.
    pub const UNIT: Weight = Weight(1.0);

    /// Returns `None` if the value is negative, infinite or NaN.
    pub fn new(x: f64) -> Option<Weight> {
        if x.is_finite() && x >= 0.0 {
            // -0.0 >= 0.0 holds, so normalize it here.
            Some(Weight(x + 0.0))
        } else {
            None
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Eq for Weight {}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Weight {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl TryFrom<f64> for Weight {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Weight::new(value).ok_or(Error::InvalidWeight(value))
    }
}

impl TryFrom<f32> for Weight {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Weight::try_from(f64::from(value))
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWeightError {
    #[error("{0}")]
    Float(#[from] ParseFloatError),
    #[error("weight must be a finite non-negative number")]
    OutOfRange,
}

impl FromStr for Weight {
    type Err = ParseWeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weight::new(s.parse()?).ok_or(ParseWeightError::OutOfRange)
    }
}

macro_rules! impl_from_int {
    ($ty:ty) => {
        impl From<$ty> for Weight {
            fn from(value: $ty) -> Self {
                // Every value of these types is exactly representable in f64.
                Weight(f64::from(value))
            }
        }
    };
}

impl_from_int!(u8);
impl_from_int!(u16);
impl_from_int!(u32);
