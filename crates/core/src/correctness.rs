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

//! Functions for correctness checks similar to the *design by contract* philosophy.
//!
//! A condition is a predicate which must be true just prior to the execution of
//! some section of code for correct behavior.
//!
//! Each check returns an `anyhow::Result` so it can be propagated with `?`, and
//! constructors which prefer to panic call `.expect(FAILED)`.

use std::{
    collections::HashMap,
    fmt::Debug,
    hash::{BuildHasher, Hash},
};

/// A message prefix that can be used with calls to `expect` or other assertion-related functions.
pub const FAILED: &str = "Condition failed";

/// Checks the string `s` has semantic meaning and contains only ASCII characters.
///
/// # Errors
///
/// This function returns an error:
/// - If `s` is an empty string.
/// - If `s` consists solely of whitespace characters.
/// - If `s` contains one or more non-ASCII characters.
pub fn check_valid_string<T: AsRef<str>>(s: T, param: &str) -> anyhow::Result<()> {
    let s = s.as_ref();

    if s.is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty");
    }

    if s.chars().all(char::is_whitespace) {
        anyhow::bail!("invalid string for '{param}', was all whitespace");
    }

    if !s.is_ascii() {
        anyhow::bail!("invalid string for '{param}' contained a non-ASCII char, was '{s}'");
    }

    Ok(())
}

/// Checks the `key` is **not** in the `map`.
///
/// # Errors
///
/// This function returns an error if `key` is already a key of `map`.
pub fn check_key_not_in_map<K, V, S>(
    key: &K,
    map: &HashMap<K, V, S>,
    key_name: &str,
    map_name: &str,
) -> anyhow::Result<()>
where
    K: Hash + Eq + Debug,
    S: BuildHasher,
{
    if map.contains_key(key) {
        anyhow::bail!("the '{key_name}' {key:?} already exists in the '{map_name}' map")
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("a")]
    #[case("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")]
    #[case(" a ")]
    fn test_check_valid_string_with_valid_value(#[case] s: &str) {
        assert!(check_valid_string(s, "value").is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("0xÄbc")]
    fn test_check_valid_string_with_invalid_values(#[case] s: &str) {
        assert!(check_valid_string(s, "value").is_err());
    }

    #[rstest]
    fn test_check_key_not_in_map() {
        let map: HashMap<u32, &str> = [(1, "Ethereum"), (56, "BSC"), (137, "Polygon")]
            .into_iter()
            .collect();
        assert!(check_key_not_in_map(&10_u32, &map, "chain_id", "networks").is_ok());

        let err = check_key_not_in_map(&56_u32, &map, "chain_id", "networks").unwrap_err();
        assert_eq!(
            err.to_string(),
            "the 'chain_id' 56 already exists in the 'networks' map"
        );
    }
}
