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

//! Core parsing functions for plain decimal literals.
//!
//! A plain decimal literal is an optional sign, a run of ASCII digits, and an optional
//! fractional part introduced by a single `.`. Exponent notation, digit separators and
//! surrounding whitespace are not part of the grammar.

/// The lexical parts of a plain decimal literal, borrowed from the input string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalLiteral<'a> {
    /// If the literal carried a leading `-`.
    pub negative: bool,
    /// The digits before the decimal point (may be empty, e.g. `".5"`).
    pub integer: &'a str,
    /// The digits after the decimal point (may be empty, e.g. `"5."` or `"5"`).
    pub fraction: &'a str,
}

impl DecimalLiteral<'_> {
    /// Returns the number of significant fractional digits, ignoring trailing zeros.
    #[must_use]
    pub fn min_precision(&self) -> usize {
        self.fraction.trim_end_matches('0').len()
    }
}

/// Splits `s` into its sign, integer digits and fractional digits.
///
/// Returns `None` if `s` is not a plain decimal literal: empty input, a bare sign or
/// point, any non-digit character (including whitespace, `_`, `,` and `e`), or more
/// than one decimal point.
#[must_use]
pub fn split_decimal_literal(s: &str) -> Option<DecimalLiteral<'_>> {
    let (negative, body) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (integer, fraction) = body.split_once('.').unwrap_or((body, ""));

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    if !is_ascii_digits(integer) || !is_ascii_digits(fraction) {
        return None;
    }

    Some(DecimalLiteral {
        negative,
        integer,
        fraction,
    })
}

/// Returns `true` if `s` is a non-empty run of ASCII digits, the only form accepted for
/// atomic (smallest-unit) token amounts.
#[must_use]
pub fn is_atomic_literal(s: &str) -> bool {
    !s.is_empty() && is_ascii_digits(s)
}

fn is_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0", false, "0", "")]
    #[case("123", false, "123", "")]
    #[case("-1.23", true, "1", "23")]
    #[case("+1.23", false, "1", "23")]
    #[case(".5", false, "", "5")]
    #[case("5.", false, "5", "")]
    #[case("0.000000001", false, "0", "000000001")]
    #[case("007.100", false, "007", "100")]
    fn test_split_decimal_literal_valid(
        #[case] s: &str,
        #[case] negative: bool,
        #[case] integer: &str,
        #[case] fraction: &str,
    ) {
        let literal = split_decimal_literal(s).unwrap();
        assert_eq!(literal.negative, negative);
        assert_eq!(literal.integer, integer);
        assert_eq!(literal.fraction, fraction);
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("+")]
    #[case(".")]
    #[case("-.")]
    #[case("abc")]
    #[case("12.34.56")]
    #[case("1e-2")]
    #[case("1E8")]
    #[case("1_000")]
    #[case("1,000")]
    #[case(" 1")]
    #[case("1 ")]
    #[case("12abc")]
    #[case("--1")]
    #[case("0x10")]
    #[case("١٢")]
    fn test_split_decimal_literal_invalid(#[case] s: &str) {
        assert!(split_decimal_literal(s).is_none(), "expected '{s}' to be rejected");
    }

    #[rstest]
    #[case("1.0", 0)]
    #[case("1.00100", 3)]
    #[case("1", 0)]
    #[case("0.0001000", 4)]
    fn test_min_precision(#[case] s: &str, #[case] expected: usize) {
        assert_eq!(split_decimal_literal(s).unwrap().min_precision(), expected);
    }

    #[rstest]
    #[case("0", true)]
    #[case("9007199254740991", true)]
    #[case("", false)]
    #[case("-1", false)]
    #[case("+1", false)]
    #[case("1.0", false)]
    #[case("1e3", false)]
    fn test_is_atomic_literal(#[case] s: &str, #[case] expected: bool) {
        assert_eq!(is_atomic_literal(s), expected);
    }
}
