use std::fmt;

use crate::scalar::GeneralFloat;

/// Data types (dtypes) that can be used as element types in arithmetic Tensors.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ScalarType {
    /// 8-bit unsigned integer, `u8`
    Byte,
    /// 8-bit signed, integer, `i8`
    Char,
    /// 16-bit signed integer, `i16`
    Short,
    /// 32-bit signed integer, `i32`
    Int,
    /// 64-bit signed integer, `i64`
    Long,
    /// 16-bit floating point, [`ndtensor::scalar::f16`](`crate::scalar`), requires the `half` feature.
    Half,
    /// 32-bit floating point, `f32`
    Float,
    /// 64-bit floating point, `f64`
    Double,
    /// 32-bit complex floating point, [`ndtensor::scalar::Complex<f32>`](`crate::scalar`), requires the
    /// `num-complex` feature.
    ComplexFloat,
    /// 64-bit complex floating point, [`ndtensor::scalar::Complex<f64>`](`crate::scalar`), requires the
    /// `num-complex` feature.
    ComplexDouble,
    /// Boolean, `bool`
    Bool,
    /// 16-bit floating point using the bfloat16 format, [`ndtensor::scalar::bf16`](`crate::scalar`), requires the
    /// `half` feature.
    BFloat16,
    /// 16-bit unsigned integer, `u16`
    UInt16,
    /// 32-bit unsigned integer, `u32`
    UInt32,
    /// 64-bit unsigned integer, `u64`
    UInt64,
}
impl ScalarType {
    /// Returns `true` for the floating point types, real or complex.
    pub fn is_floating_point(self) -> bool {
        matches!(
            self,
            ScalarType::Half
                | ScalarType::Float
                | ScalarType::Double
                | ScalarType::BFloat16
                | ScalarType::ComplexFloat
                | ScalarType::ComplexDouble
        )
    }
}

/// A trait for element types that support the arithmetic and rendering operations of a Tensor.
///
/// Container operations (construction, indexing, equality, transposition) accept any element type; elementwise
/// addition and the textual rendering of a tensor require its elements to implement this trait.
pub trait Scalar: Clone + Default + PartialEq + 'static {
    /// The [`ScalarType`] enum variant of the implementing type.
    const TYPE: ScalarType;

    /// Add two elements.
    ///
    /// Integer addition wraps around on overflow, and `bool` addition is a logical or.
    fn add(&self, other: &Self) -> Self;

    /// Write the textual form of the element.
    ///
    /// Floating point elements use the `%g` like conversion of [`GeneralFloat`].
    fn fmt_scalar(&self, f: &mut fmt::Formatter) -> fmt::Result;
}

macro_rules! impl_scalar_int {
    ($rust_type:ty, $scalar_type_variant:ident) => {
        impl Scalar for $rust_type {
            const TYPE: ScalarType = ScalarType::$scalar_type_variant;
            fn add(&self, other: &Self) -> Self {
                self.wrapping_add(*other)
            }
            fn fmt_scalar(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }
    };
}
macro_rules! impl_scalar_float {
    ($rust_type:ty, $scalar_type_variant:ident, $to_f64:expr) => {
        impl Scalar for $rust_type {
            const TYPE: ScalarType = ScalarType::$scalar_type_variant;
            fn add(&self, other: &Self) -> Self {
                *self + *other
            }
            fn fmt_scalar(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let to_f64: fn($rust_type) -> f64 = $to_f64;
                fmt::Display::fmt(&GeneralFloat(to_f64(*self)), f)
            }
        }
    };
}

impl_scalar_int!(u8, Byte);
impl_scalar_int!(i8, Char);
impl_scalar_int!(i16, Short);
impl_scalar_int!(i32, Int);
impl_scalar_int!(i64, Long);
impl_scalar_int!(u16, UInt16);
impl_scalar_int!(u32, UInt32);
impl_scalar_int!(u64, UInt64);
impl_scalar_float!(f32, Float, |x| x as f64);
impl_scalar_float!(f64, Double, |x| x);
#[cfg(feature = "half")]
impl_scalar_float!(crate::scalar::f16, Half, |x| x.to_f64());
#[cfg(feature = "half")]
impl_scalar_float!(crate::scalar::bf16, BFloat16, |x| x.to_f64());

impl Scalar for bool {
    const TYPE: ScalarType = ScalarType::Bool;
    fn add(&self, other: &Self) -> Self {
        *self || *other
    }
    fn fmt_scalar(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(feature = "num-complex")]
macro_rules! impl_scalar_complex {
    ($rust_type:ty, $scalar_type_variant:ident) => {
        impl Scalar for crate::scalar::Complex<$rust_type> {
            const TYPE: ScalarType = ScalarType::$scalar_type_variant;
            fn add(&self, other: &Self) -> Self {
                crate::scalar::Complex::new(self.re + other.re, self.im + other.im)
            }
            fn fmt_scalar(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    f,
                    "({},{})",
                    GeneralFloat(self.re as f64),
                    GeneralFloat(self.im as f64)
                )
            }
        }
    };
}
#[cfg(feature = "num-complex")]
impl_scalar_complex!(f32, ComplexFloat);
#[cfg(feature = "num-complex")]
impl_scalar_complex!(f64, ComplexDouble);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::{format, String};

    struct Rendered<'a, S>(&'a S);
    impl<S: Scalar> fmt::Display for Rendered<'_, S> {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            self.0.fmt_scalar(f)
        }
    }
    fn render<S: Scalar>(s: &S) -> String {
        format!("{}", Rendered(s))
    }

    #[test]
    fn scalar_types() {
        assert_eq!(u8::TYPE, ScalarType::Byte);
        assert_eq!(i8::TYPE, ScalarType::Char);
        assert_eq!(i16::TYPE, ScalarType::Short);
        assert_eq!(i32::TYPE, ScalarType::Int);
        assert_eq!(i64::TYPE, ScalarType::Long);
        assert_eq!(f32::TYPE, ScalarType::Float);
        assert_eq!(f64::TYPE, ScalarType::Double);
        assert_eq!(bool::TYPE, ScalarType::Bool);
        assert_eq!(u16::TYPE, ScalarType::UInt16);
        assert_eq!(u32::TYPE, ScalarType::UInt32);
        assert_eq!(u64::TYPE, ScalarType::UInt64);
        assert!(f32::TYPE.is_floating_point());
        assert!(!i64::TYPE.is_floating_point());
        assert!(!bool::TYPE.is_floating_point());
    }

    #[test]
    fn bool_addition_is_logical_or() {
        assert!(Scalar::add(&true, &false));
        assert!(Scalar::add(&false, &true));
        assert!(Scalar::add(&true, &true));
        assert!(!Scalar::add(&false, &false));
    }

    #[test]
    fn integer_addition_wraps() {
        assert_eq!(Scalar::add(&u8::MAX, &1), 0);
        assert_eq!(Scalar::add(&i32::MAX, &1), i32::MIN);
        assert_eq!(Scalar::add(&-7_i64, &3), -4);
    }

    #[test]
    fn float_addition() {
        assert_eq!(Scalar::add(&0.5_f32, &0.25), 0.75);
        assert_eq!(Scalar::add(&-2.0_f64, &4.5), 2.5);
    }

    #[test]
    fn rendering() {
        assert_eq!(render(&5.1_f64), "5.1");
        assert_eq!(render(&5.1_f32), "5.1");
        assert_eq!(render(&-0.000001_f64), "-1e-06");
        assert_eq!(render(&-16_i32), "-16");
        assert_eq!(render(&200_u8), "200");
        assert_eq!(render(&true), "true");
    }

    #[cfg(feature = "half")]
    #[test]
    fn half_scalars() {
        use crate::scalar::{bf16, f16};

        let sum = Scalar::add(&f16::from_f32(1.5), &f16::from_f32(2.0));
        assert_eq!(sum, f16::from_f32(3.5));
        assert_eq!(render(&sum), "3.5");
        assert_eq!(render(&bf16::from_f32(0.5)), "0.5");
        assert_eq!(f16::TYPE, ScalarType::Half);
        assert_eq!(bf16::TYPE, ScalarType::BFloat16);
    }

    #[cfg(feature = "num-complex")]
    #[test]
    fn complex_scalars() {
        use crate::scalar::Complex;

        let sum = Scalar::add(&Complex::new(1.0_f64, -2.0), &Complex::new(0.5, 2.0));
        assert_eq!(sum, Complex::new(1.5, 0.0));
        assert_eq!(render(&sum), "(1.5,0)");
        assert_eq!(Complex::<f32>::TYPE, ScalarType::ComplexFloat);
    }
}
