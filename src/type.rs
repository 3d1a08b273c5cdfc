use std::fmt::Debug;

use num_traits::{Bounded, Num, NumCast};

/// A trait for types that can be used as point coordinates.
///
/// This trait is sealed and cannot be implemented for external types, so that
/// distance arithmetic is only ever performed on the primitive numeric types
/// the tree was designed around.
pub trait CoordNum:
    private::Sealed + Num + NumCast + PartialOrd + Copy + Debug + Send + Sync + Bounded
{
}

impl CoordNum for i8 {}
impl CoordNum for u8 {}
impl CoordNum for i16 {}
impl CoordNum for u16 {}
impl CoordNum for i32 {}
impl CoordNum for u32 {}
impl CoordNum for f32 {}
impl CoordNum for f64 {}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
