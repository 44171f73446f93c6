//! Optional scalar types and the numeric text conversion shared by all floating point elements.
//!
//! Half precision floating point types are provided by the `half` feature if enabled, and complex numbers by the
//! `num-complex` feature. Both are re-exported here so users don't need to depend on the crates directly.

use std::fmt::{self, Write};

cfg_if::cfg_if! { if #[cfg(feature = "half")] {
    pub use half::bf16;
    pub use half::f16;
} }

cfg_if::cfg_if! { if #[cfg(feature = "num-complex")] {
    pub use num_complex::Complex;
} }

/// Number of significant digits used when rendering floating point elements.
pub const PRECISION: usize = 6;

/// Write a floating point value the way C's `%g` conversion does with a precision of [`PRECISION`].
///
/// The value is rounded to [`PRECISION`] significant digits. If the decimal exponent `X` of the rounded value
/// satisfies `-4 <= X < PRECISION` the fixed notation is used, otherwise the scientific notation `d.ddde±XX` with at
/// least two exponent digits. In both cases trailing zeros of the fraction, and a trailing decimal point, are removed.
///
/// ```rust
/// use ndtensor::scalar::GeneralFloat;
///
/// assert_eq!(GeneralFloat(5.1).to_string(), "5.1");
/// assert_eq!(GeneralFloat(500000.0).to_string(), "500000");
/// assert_eq!(GeneralFloat(-0.000001).to_string(), "-1e-06");
/// assert_eq!(GeneralFloat(1234567.0).to_string(), "1.23457e+06");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneralFloat(pub f64);
impl fmt::Display for GeneralFloat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // The exponent of the rounded value selects the notation
        let mut buf = SmallBuf::new();
        write!(buf, "{:.*e}", PRECISION - 1, value)?;
        let (mantissa, exponent) = buf.as_str().split_once('e').ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= PRECISION as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                trim_fraction(mantissa),
                sign,
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (PRECISION as i32 - 1 - exponent) as usize;
            let mut fixed = SmallBuf::new();
            write!(fixed, "{:.*}", decimals, value)?;
            f.write_str(trim_fraction(fixed.as_str()))
        }
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// A fixed capacity stack buffer for a single formatted number.
///
/// With a precision of [`PRECISION`] digits a finite `f64` never needs more than a sign, `PRECISION` digits, a point,
/// four zeros after the point and an exponent, so 32 bytes are plenty.
struct SmallBuf {
    bytes: [u8; 32],
    len: usize,
}
impl SmallBuf {
    fn new() -> Self {
        Self {
            bytes: [0; 32],
            len: 0,
        }
    }

    fn as_str(&self) -> &str {
        // Only whole `&str`s are ever copied in
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }
}
impl Write for SmallBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > self.bytes.len() {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GeneralFloat;
    use crate::alloc::ToString;

    fn g(value: f64) -> crate::alloc::String {
        GeneralFloat(value).to_string()
    }

    #[test]
    fn fixed_notation() {
        assert_eq!(g(5.1), "5.1");
        assert_eq!(g(0.55), "0.55");
        assert_eq!(g(-2.0), "-2");
        assert_eq!(g(4.5), "4.5");
        assert_eq!(g(100.0), "100");
        assert_eq!(g(500000.0), "500000");
        assert_eq!(g(0.0001), "0.0001");
        assert_eq!(g(3.14159265), "3.14159");
        assert_eq!(g(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(g(-0.000001), "-1e-06");
        assert_eq!(g(0.00001234), "1.234e-05");
        assert_eq!(g(1000000.0), "1e+06");
        assert_eq!(g(1234567.0), "1.23457e+06");
        assert_eq!(g(1e100), "1e+100");
        assert_eq!(g(-2.5e-300), "-2.5e-300");
    }

    #[test]
    fn rounding_carries_into_next_decade() {
        assert_eq!(g(999999.7), "1e+06");
        assert_eq!(g(9.999999), "10");
        assert_eq!(g(0.000099999999), "0.0001");
    }

    #[test]
    fn special_values() {
        assert_eq!(g(0.0), "0");
        assert_eq!(g(-0.0), "-0");
        assert_eq!(g(f64::NAN), "nan");
        assert_eq!(g(f64::INFINITY), "inf");
        assert_eq!(g(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn single_precision_input() {
        assert_eq!(g(5.1_f32 as f64), "5.1");
        assert_eq!(g(0.1_f32 as f64), "0.1");
    }
}
