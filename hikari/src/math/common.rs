use num::traits::{Float, Num, NumCast};
use std::fmt::Debug;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Generic types that can be stored in the math containers
pub trait ValueType:
    Num + NumCast + PartialOrd + Copy + Debug + AddAssign + SubAssign + MulAssign + DivAssign
{
}

/// Floating point [ValueType]s that support the geometric operations
pub trait FloatValueType: ValueType + Float {}

// Impls for all matching types
impl<T> ValueType for T where
    T: Num + NumCast + PartialOrd + Copy + Debug + AddAssign + SubAssign + MulAssign + DivAssign
{
}
impl<T> FloatValueType for T where T: ValueType + Float {}
