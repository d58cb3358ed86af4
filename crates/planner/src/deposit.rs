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

//! The native-currency deposit (wrap) decision.
//!
//! Given a requested native amount, the native and wrapped balances, and the network's
//! protocol fee and safety margin, [`plan_deposit`] decides whether wrapping is needed
//! before the trade and, if so, how much native currency to wrap:
//!
//! 1. If the wrapped balance already covers the request, nothing is wrapped.
//! 2. If native plus wrapped funds, less the safety margin, cannot cover the request,
//!    nothing is wrapped (the trade cannot proceed anyway).
//! 3. Otherwise the shortfall `requested - wrapped` is wrapped, plus a fee buffer of
//!    `requested * bps / 10000` truncated at [`DIVISION_PRECISION`] fractional digits.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::Display as StrumDisplay;
use tokenledger_core::{
    ArithmeticError, DecimalValue, ParseError,
    decimal::DIVISION_PRECISION,
    parsing::is_atomic_literal,
};

/// One basis point is 1/10000.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// A piece of information required for planning which was not available.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, StrumDisplay)]
#[strum(serialize_all = "snake_case")]
pub enum MissingInfo {
    /// The chain is not a configured network.
    Network,
    /// The network has no wrapped native token.
    WrappedToken,
    /// The native currency's decimals are unknown.
    NativeDecimals,
    /// The wrapped token's decimals are unknown.
    WrappedDecimals,
    /// The network's protocol fee is unknown.
    ProtocolFee,
    /// The network's safety margin is unknown.
    SafetyMargin,
}

/// An error which can occur when planning a deposit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// An input amount was malformed or too precise.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A required input was missing; no default is ever substituted.
    #[error("insufficient information to plan deposit, missing {0}")]
    InsufficientInformation(MissingInfo),
    /// An intermediate amount did not fit the decimal representation.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// The inputs to a deposit decision, as they arrive from the caller.
///
/// Optional fields are the ones whose absence is reported as
/// [`PlanError::InsufficientInformation`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositPlanInputs {
    /// The native amount the trade needs, in human units.
    pub requested: String,
    /// The native balance, in atomic units.
    pub native_balance: String,
    /// The wrapped-token balance, in atomic units.
    pub wrapped_balance: String,
    /// The decimals of the native currency.
    pub native_decimals: Option<u8>,
    /// The decimals of the wrapped token.
    pub wrapped_decimals: Option<u8>,
    /// The protocol fee in basis points.
    pub protocol_fee_bps: Option<u32>,
    /// The safety margin in human units.
    pub safety_margin: Option<String>,
}

/// The outcome of a deposit decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "amount", rename_all = "snake_case")]
pub enum DepositPlan {
    /// No wrapping is needed (or the trade cannot be funded at all).
    NotNeeded,
    /// Wrap this much native currency, in human units, fee buffer included.
    Deposit(DecimalValue),
}

impl DepositPlan {
    /// Returns the amount to wrap, if any.
    #[must_use]
    pub const fn amount(&self) -> Option<DecimalValue> {
        match self {
            Self::NotNeeded => None,
            Self::Deposit(amount) => Some(*amount),
        }
    }

    /// Returns `true` if a deposit is needed.
    #[must_use]
    pub const fn is_needed(&self) -> bool {
        matches!(self, Self::Deposit(_))
    }
}

impl Display for DepositPlan {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotNeeded => write!(f, "not needed"),
            Self::Deposit(amount) => write!(f, "deposit {amount}"),
        }
    }
}

/// Decides whether, and how much, native currency must be wrapped.
///
/// # Errors
///
/// Returns an error:
/// - [`PlanError::Parse`] if an amount is malformed, or `requested` has more fractional
///   digits than the native decimals allow.
/// - [`PlanError::InsufficientInformation`] if decimals, fee or margin are missing.
/// - [`PlanError::Arithmetic`] if an intermediate amount overflows.
pub fn plan_deposit(inputs: &DepositPlanInputs) -> Result<DepositPlan, PlanError> {
    let requested = DecimalValue::parse(&inputs.requested)?;
    if requested.is_negative() {
        return Err(ParseError::Malformed(inputs.requested.clone()).into());
    }
    if requested.is_zero() {
        log::trace!("Requested amount is zero, no deposit");
        return Ok(DepositPlan::NotNeeded);
    }

    let native_decimals = require(inputs.native_decimals, MissingInfo::NativeDecimals)?;
    let wrapped_decimals = require(inputs.wrapped_decimals, MissingInfo::WrappedDecimals)?;
    let fee_bps = require(inputs.protocol_fee_bps, MissingInfo::ProtocolFee)?;
    let margin = require(inputs.safety_margin.as_deref(), MissingInfo::SafetyMargin)?;

    // Quantize to the native token: excess precision is an error, never truncated
    requested.to_atomic_string(native_decimals)?;

    let native = parse_atomic_balance(&inputs.native_balance, native_decimals)?;
    let wrapped = parse_atomic_balance(&inputs.wrapped_balance, wrapped_decimals)?;
    let margin = DecimalValue::parse(margin)?;

    if wrapped >= requested {
        log::debug!("Wrapped balance {wrapped} covers requested {requested}");
        return Ok(DepositPlan::NotNeeded);
    }

    let available = native.checked_add(&wrapped)?.checked_sub(&margin)?;
    if available < requested {
        log::debug!("Available {available} (after margin {margin}) below requested {requested}");
        return Ok(DepositPlan::NotNeeded);
    }

    let fee = requested
        .checked_mul(&DecimalValue::from(fee_bps))?
        .checked_div(&DecimalValue::from(BPS_DENOMINATOR), DIVISION_PRECISION)?;
    let amount = requested.checked_sub(&wrapped)?.checked_add(&fee)?;

    log::debug!("Deposit {amount} (shortfall with {fee_bps} bps fee buffer {fee})");
    Ok(DepositPlan::Deposit(amount))
}

fn require<T>(value: Option<T>, missing: MissingInfo) -> Result<T, PlanError> {
    value.ok_or(PlanError::InsufficientInformation(missing))
}

fn parse_atomic_balance(balance: &str, decimals: u8) -> Result<DecimalValue, ParseError> {
    if !is_atomic_literal(balance) {
        return Err(ParseError::Malformed(balance.to_string()));
    }
    DecimalValue::from_atomic_string(balance, decimals)
}
