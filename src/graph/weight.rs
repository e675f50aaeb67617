use std::fmt::{self, Debug, Display};
use std::ops::Add;

use num_traits::Zero;
use ordered_float::OrderedFloat;

use crate::{Error, Result};

/// Trait for edge weights
///
/// Only types that cannot represent negative values implement it: the unsigned
/// primitive integers and [`NonNegativeF64`], which checks its value when it is
/// constructed. A graph with signed weights does not type check.
pub trait Weight: Copy + Ord + Debug + Zero {
    /// Adds two weights, saturating at the largest representable value
    fn accumulate(self, rhs: Self) -> Self;
}

macro_rules! impl_unsigned_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn accumulate(self, rhs: Self) -> Self {
                    self.saturating_add(rhs)
                }
            }
        )*
    };
}

impl_unsigned_weight!(u8, u16, u32, u64, u128, usize);

/// A floating point weight that is known to be neither negative nor NaN
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonNegativeF64(OrderedFloat<f64>);

impl NonNegativeF64 {
    /// Wraps `value`, rejecting NaN and negative numbers
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(Error::NotANumber);
        }
        if value < 0.0 {
            return Err(Error::NegativeWeight(value));
        }
        Ok(NonNegativeF64(OrderedFloat(value)))
    }

    pub fn get(self) -> f64 {
        self.0.into_inner()
    }
}

impl TryFrom<f64> for NonNegativeF64 {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl Display for NonNegativeF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for NonNegativeF64 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        NonNegativeF64(self.0 + rhs.0)
    }
}

impl Zero for NonNegativeF64 {
    fn zero() -> Self {
        NonNegativeF64(OrderedFloat(0.0))
    }

    fn is_zero(&self) -> bool {
        self.0.into_inner() == 0.0
    }
}

impl Weight for NonNegativeF64 {
    // Sums of non-negative floats overflow to infinity, never below zero
    fn accumulate(self, rhs: Self) -> Self {
        self + rhs
    }
}
