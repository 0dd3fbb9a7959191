//! The `math` module provides checked integer helpers that are generic over
//! the runtime `Balance` type.
//!
//! All computations are carried out on `u128` with a 256-bit intermediate
//! product, so `a * b / c` never overflows as long as the final result fits
//! into the target type.
//!
//! # Available functions
//!
//! - [`multiply_by_rational`]: computes `a * b / c` with an explicit
//!   [`Rounding`] mode.
//! - [`integer_sqrt`]: floor of the square root of an unsigned value.
//!
//! # Examples
//!
//! ```
//! # use helpers::math::multiply_by_rational;
//! # use sp_arithmetic::Rounding;
//! // 10 * 1 / 3, rounding up.
//! assert_eq!(Ok(4_u128), multiply_by_rational(10_u128, 1, 3, Rounding::Up));
//! ```

use sp_arithmetic::{
    helpers_128bit::multiply_by_rational_with_rounding,
    traits::{AtLeast32BitUnsigned, IntegerSquareRoot},
    ArithmeticError::{self, DivisionByZero, Overflow},
    Rounding,
};


/// Computes `a * b / c` rounding the result according to `rounding`.
///
/// # Errors
///
/// * [`DivisionByZero`] if `c` is zero.
/// * [`Overflow`] if any operand does not fit into `u128` or the result does
///   not fit into `B`.
pub fn multiply_by_rational<B>(a: B, b: B, c: B, rounding: Rounding) -> Result<B, ArithmeticError>
where
    B: AtLeast32BitUnsigned + Copy,
{
    if c.is_zero() {
        return Err(DivisionByZero)
    }

    let a: u128 = a.try_into().map_err(|_| Overflow)?;
    let b: u128 = b.try_into().map_err(|_| Overflow)?;
    let c: u128 = c.try_into().map_err(|_| Overflow)?;

    let res = multiply_by_rational_with_rounding(a, b, c, rounding).ok_or(Overflow)?;

    <B as TryFrom<u128>>::try_from(res).map_err(|_| Overflow)
}

/// Floor of the square root of `x`.
pub fn integer_sqrt<B>(x: B) -> B
where
    B: AtLeast32BitUnsigned + Copy,
{
    x.integer_sqrt()
}
