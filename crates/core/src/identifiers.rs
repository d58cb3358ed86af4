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

//! Canonical, case-insensitive token identifiers.

use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

use crate::correctness::{FAILED, check_valid_string};

/// The address under which a network's native currency is identified.
pub const NATIVE_CURRENCY_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Returns the canonical form of an address-like identifier.
///
/// Lower-cases `raw` and does nothing else: the function is total and idempotent, and
/// no structural validation (hex, length or prefix) is applied.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
}

/// Represents a normalized token address.
///
/// The inner value is always the output of [`normalize`], so two addresses differing
/// only by case are the same key.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TokenAddress(Ustr);

impl TokenAddress {
    /// Creates a new [`TokenAddress`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// This function returns an error:
    /// - If `value` is not a valid string.
    pub fn new_checked<T: AsRef<str>>(value: T) -> anyhow::Result<Self> {
        let value = value.as_ref();
        check_valid_string(value, stringify!(value))?;
        Ok(Self::from_raw(value))
    }

    /// Creates a new [`TokenAddress`] instance.
    ///
    /// # Panics
    ///
    /// This function panics:
    /// - If `value` is not a valid string.
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        Self::new_checked(value).expect(FAILED)
    }

    /// Creates a [`TokenAddress`] from any raw key, only normalizing it.
    #[must_use]
    pub fn from_raw<T: AsRef<str>>(raw: T) -> Self {
        Self(Ustr::from(normalize(raw.as_ref()).as_str()))
    }

    /// Returns the address of the native currency.
    #[must_use]
    pub fn native() -> Self {
        Self::from_raw(NATIVE_CURRENCY_ADDRESS)
    }

    /// Returns `true` if this is the native-currency address.
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.0.as_str() == NATIVE_CURRENCY_ADDRESS
    }

    /// Returns the inner value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Debug for TokenAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl Display for TokenAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TokenAddress {
    fn from(value: &str) -> Self {
        Self::from_raw(value)
    }
}

impl From<String> for TokenAddress {
    fn from(value: String) -> Self {
        Self::from_raw(value)
    }
}

impl AsRef<str> for TokenAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for TokenAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TokenAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new_checked(value).map_err(serde::de::Error::custom)
    }
}
