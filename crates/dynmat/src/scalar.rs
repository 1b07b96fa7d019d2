use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use num_traits::{NumCast, Zero};

/// Element types storable in a `DynamicVector` or `DynamicMatrix` that
/// take part in arithmetic.
///
/// `Default` supplies the value freshly constructed containers are filled
/// with; `Zero` seeds dot-product and matrix-product accumulators. `NumCast`
/// lets the wide-operand operators go through `f64`.
pub trait Scalar:
    Clone
    + Default
    + PartialEq
    + Debug
    + Zero
    + NumCast
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(impl Scalar for $t {})*
    };
}

impl_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
