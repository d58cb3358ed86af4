// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Represents an exact decimal value of arbitrary scale.
//!
//! [`DecimalValue`] stores a sign, an unsigned 256-bit integer mantissa and a base-10
//! scale, so that the represented number is `(-1)^sign * mantissa / 10^scale`. Values
//! are always held in canonical form (no trailing fractional zeros, zero is unsigned),
//! which makes the derived equality and hashing value-based.
//!
//! Addition, subtraction and multiplication are exact. Any result which does not fit
//! the 256-bit mantissa is reported as [`ArithmeticError::Overflow`] rather than being
//! rounded. Division truncates toward zero at an explicit number of fractional digits.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    ops::Neg,
    str::FromStr,
};

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::parsing::split_decimal_literal;

/// The number of fractional digits kept by divisions feeding comparisons or output.
///
/// Quotients are truncated toward zero at this precision, which never overstates a
/// computed amount and keeps repeating decimals from flipping comparisons.
pub const DIVISION_PRECISION: u32 = 18;

/// The maximum scale for which `10^scale` fits in the 256-bit mantissa.
///
/// floor(log10(2^256 - 1)) = 77
pub const MAX_SCALE: u32 = 77;

/// An error which can occur when parsing or converting a decimal string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input is not a plain decimal (or, where required, atomic integer) string.
    #[error("malformed amount '{0}'")]
    Malformed(String),
    /// The input has more fractional digits than the given number of decimals allows.
    #[error("amount '{value}' has more fractional digits than {decimals} decimals allow")]
    DecimalOverflow {
        /// The offending input.
        value: String,
        /// The decimal-place count which was exceeded.
        decimals: u8,
    },
    /// The input is well-formed but its digits do not fit the 256-bit mantissa.
    #[error("amount '{0}' is out of the representable range")]
    OutOfRange(String),
}

/// An error which can occur during decimal arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// The exact result does not fit the 256-bit mantissa (or the target type).
    #[error("decimal arithmetic overflow")]
    Overflow,
    /// The divisor was zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Represents an exact, immutable decimal number.
///
/// Parsed from and rendered to canonical decimal strings: an optional `-`, the integer
/// digits (a single `0` when the integer part is zero) and, only when non-zero, a `.`
/// followed by the fractional digits without trailing zeros.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalValue {
    negative: bool,
    mantissa: U256,
    scale: u32,
}

impl DecimalValue {
    /// The value zero.
    pub const ZERO: Self = Self {
        negative: false,
        mantissa: U256::ZERO,
        scale: 0,
    };

    /// Parses a plain decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error:
    /// - [`ParseError::Malformed`] if `s` is not a plain decimal literal (see
    ///   [`split_decimal_literal`]).
    /// - [`ParseError::OutOfRange`] if the digits do not fit the mantissa, or more than
    ///   [`MAX_SCALE`] significant fractional digits are given.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let literal = split_decimal_literal(s).ok_or_else(|| ParseError::Malformed(s.to_string()))?;

        if literal.min_precision() > MAX_SCALE as usize {
            return Err(ParseError::OutOfRange(s.to_string()));
        }

        let integer = literal.integer.trim_start_matches('0');
        let fraction = &literal.fraction[..literal.min_precision()];
        let digits = format!("{integer}{fraction}");
        let mantissa = if digits.is_empty() {
            U256::ZERO
        } else {
            U256::from_str_radix(&digits, 10).map_err(|_| ParseError::OutOfRange(s.to_string()))?
        };

        Ok(Self::normalized(
            literal.negative,
            mantissa,
            fraction.len() as u32,
        ))
    }

    /// Creates a value from an atomic (smallest-unit) integer `mantissa` and the
    /// token's `decimals`, i.e. `mantissa / 10^decimals`.
    #[must_use]
    pub fn from_atomic(mantissa: U256, decimals: u8) -> Self {
        Self::normalized(false, mantissa, u32::from(decimals))
    }

    /// Parses an atomic-unit string and shifts the decimal point left by `decimals`.
    ///
    /// # Errors
    ///
    /// Returns an error:
    /// - [`ParseError::Malformed`] if `s` is not a plain decimal literal.
    /// - [`ParseError::DecimalOverflow`] if `s` has a non-zero fractional part, which
    ///   would be a quantity smaller than one atomic unit.
    /// - [`ParseError::OutOfRange`] if the digits do not fit the mantissa.
    pub fn from_atomic_string(s: &str, decimals: u8) -> Result<Self, ParseError> {
        let atomic = Self::parse(s)?;
        if !atomic.is_integer() {
            return Err(ParseError::DecimalOverflow {
                value: s.to_string(),
                decimals: 0,
            });
        }

        Ok(Self::normalized(
            atomic.negative,
            atomic.mantissa,
            u32::from(decimals),
        ))
    }

    /// Returns the atomic-unit integer string of this value for a token with `decimals`,
    /// shifting the decimal point right by `decimals`.
    ///
    /// # Errors
    ///
    /// Returns an error:
    /// - [`ParseError::DecimalOverflow`] if the value has more fractional digits than
    ///   `decimals`. Callers must round explicitly beforehand; nothing is truncated here.
    /// - [`ParseError::OutOfRange`] if the shifted integer does not fit the mantissa.
    pub fn to_atomic_string(&self, decimals: u8) -> Result<String, ParseError> {
        let decimals_u32 = u32::from(decimals);
        if self.scale > decimals_u32 {
            return Err(ParseError::DecimalOverflow {
                value: self.to_string(),
                decimals,
            });
        }

        let atomic = self
            .mantissa_at(decimals_u32)
            .map_err(|_| ParseError::OutOfRange(self.to_string()))?;

        Ok(Self::normalized(self.negative, atomic, 0).to_string())
    }

    /// Returns the canonical decimal string (identical to the `Display` output).
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Returns the sum `self + rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the exact sum does not fit.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        let scale = self.scale.max(rhs.scale);
        let a = self.mantissa_at(scale)?;
        let b = rhs.mantissa_at(scale)?;

        let (negative, mantissa) = if self.negative == rhs.negative {
            (
                self.negative,
                a.checked_add(b).ok_or(ArithmeticError::Overflow)?,
            )
        } else if a >= b {
            (self.negative, a - b)
        } else {
            (rhs.negative, b - a)
        };

        Ok(Self::normalized(negative, mantissa, scale))
    }

    /// Returns the difference `self - rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the exact difference does not fit.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.checked_add(&rhs.neg())
    }

    /// Returns the product `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the exact product does not fit.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        let mantissa = self
            .mantissa
            .checked_mul(rhs.mantissa)
            .ok_or(ArithmeticError::Overflow)?;

        Ok(Self::normalized(
            self.negative != rhs.negative,
            mantissa,
            self.scale + rhs.scale,
        ))
    }

    /// Returns the quotient `self / rhs` truncated toward zero to `precision`
    /// fractional digits.
    ///
    /// # Errors
    ///
    /// Returns an error:
    /// - [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    /// - [`ArithmeticError::Overflow`] if scaling the operands does not fit.
    pub fn checked_div(&self, rhs: &Self, precision: u32) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        // q = trunc(a.m * 10^(b.s + p - a.s) / b.m)
        let exponent = i64::from(rhs.scale) + i64::from(precision) - i64::from(self.scale);
        let (numerator, denominator) = if exponent >= 0 {
            let shift = pow10(u32::try_from(exponent).map_err(|_| ArithmeticError::Overflow)?)?;
            (
                self.mantissa
                    .checked_mul(shift)
                    .ok_or(ArithmeticError::Overflow)?,
                rhs.mantissa,
            )
        } else {
            let shift = pow10(u32::try_from(-exponent).map_err(|_| ArithmeticError::Overflow)?)?;
            (
                self.mantissa,
                rhs.mantissa
                    .checked_mul(shift)
                    .ok_or(ArithmeticError::Overflow)?,
            )
        };

        Ok(Self::normalized(
            self.negative != rhs.negative,
            numerator / denominator,
            precision,
        ))
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Returns `true` if the value is strictly less than zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns `true` if the value has no fractional part.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.scale == 0
    }

    /// Returns the absolute value.
    #[must_use]
    pub const fn abs(&self) -> Self {
        Self {
            negative: false,
            mantissa: self.mantissa,
            scale: self.scale,
        }
    }

    /// Converts into a [`rust_decimal::Decimal`] without rounding.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the scale exceeds 28 or the mantissa does
    /// not fit the 96-bit `Decimal` mantissa.
    pub fn to_rust_decimal(&self) -> Result<Decimal, ArithmeticError> {
        let magnitude = u128::try_from(self.mantissa)
            .ok()
            .and_then(|m| i128::try_from(m).ok())
            .ok_or(ArithmeticError::Overflow)?;
        let signed = if self.negative { -magnitude } else { magnitude };
        Decimal::try_from_i128_with_scale(signed, self.scale).map_err(|_| ArithmeticError::Overflow)
    }

    fn normalized(negative: bool, mut mantissa: U256, mut scale: u32) -> Self {
        if mantissa.is_zero() {
            return Self::ZERO;
        }

        let ten = U256::from(10u8);
        while scale > 0 && (mantissa % ten).is_zero() {
            mantissa /= ten;
            scale -= 1;
        }

        Self {
            negative,
            mantissa,
            scale,
        }
    }

    /// Returns the mantissa expressed at `scale`, which must not be below `self.scale`.
    fn mantissa_at(&self, scale: u32) -> Result<U256, ArithmeticError> {
        debug_assert!(scale >= self.scale);
        if scale == self.scale {
            return Ok(self.mantissa);
        }
        self.mantissa
            .checked_mul(pow10(scale - self.scale)?)
            .ok_or(ArithmeticError::Overflow)
    }

    /// Splits the magnitude into integer digits (empty for zero) and fractional digits.
    fn digit_parts(&self) -> (String, String) {
        if self.is_zero() {
            return (String::new(), String::new());
        }

        let digits = self.mantissa.to_string();
        let scale = self.scale as usize;

        if scale == 0 {
            (digits, String::new())
        } else if digits.len() > scale {
            let (integer, fraction) = digits.split_at(digits.len() - scale);
            (integer.to_string(), fraction.to_string())
        } else {
            (String::new(), format!("{digits:0>scale$}"))
        }
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.mantissa.cmp(&other.mantissa);
        }

        let scale = self.scale.max(other.scale);
        if let (Ok(a), Ok(b)) = (self.mantissa_at(scale), other.mantissa_at(scale)) {
            return a.cmp(&b);
        }

        // Digit-wise comparison when the common scale does not fit the mantissa
        let (a_int, a_frac) = self.digit_parts();
        let (b_int, b_frac) = other.digit_parts();
        a_int
            .len()
            .cmp(&b_int.len())
            .then_with(|| a_int.cmp(&b_int))
            .then_with(|| a_frac.cmp(&b_frac))
    }
}

/// Returns `10^exp` as a [`U256`].
fn pow10(exp: u32) -> Result<U256, ArithmeticError> {
    if exp > MAX_SCALE {
        return Err(ArithmeticError::Overflow);
    }

    let ten = U256::from(10u8);
    let mut result = U256::from(1u8);
    for _ in 0..exp {
        result *= ten;
    }
    Ok(result)
}

impl Default for DecimalValue {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Neg for DecimalValue {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return self;
        }
        Self {
            negative: !self.negative,
            ..self
        }
    }
}

impl Neg for &DecimalValue {
    type Output = DecimalValue;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl PartialOrd for DecimalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl From<u64> for DecimalValue {
    fn from(value: u64) -> Self {
        Self::normalized(false, U256::from(value), 0)
    }
}

impl From<u32> for DecimalValue {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<Decimal> for DecimalValue {
    fn from(value: Decimal) -> Self {
        let mantissa = value.mantissa();
        Self::normalized(
            mantissa < 0,
            U256::from(mantissa.unsigned_abs()),
            value.scale(),
        )
    }
}

impl TryFrom<DecimalValue> for Decimal {
    type Error = ArithmeticError;

    fn try_from(value: DecimalValue) -> Result<Self, Self::Error> {
        value.to_rust_decimal()
    }
}

impl FromStr for DecimalValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Debug for DecimalValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({self})", stringify!(DecimalValue))
    }
}

impl Display for DecimalValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (integer, fraction) = self.digit_parts();
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(if integer.is_empty() { "0" } else { &integer })?;
        if !fraction.is_empty() {
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}

impl Serialize for DecimalValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DecimalValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
