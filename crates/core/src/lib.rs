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

//! Core value types for the token ledger.
//!
//! The `tokenledger-core` crate is deliberately small and has no knowledge of ledgers,
//! networks or planning. It supplies the two leaf building blocks every other crate
//! in the workspace depends on:
//!
//! - [`DecimalValue`]: an exact, immutable decimal number backed by a 256-bit integer
//!   mantissa, parsed from and rendered to canonical decimal strings.
//! - [`TokenAddress`]: a case-normalized identifier used as the key space for ledgers
//!   and token metadata.
//!
//! No binary floating point is used anywhere in this crate. Division is the only
//! operation which can discard digits, and it always truncates toward zero at an
//! explicit precision (see [`decimal::DIVISION_PRECISION`]).

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod correctness;
pub mod decimal;
pub mod identifiers;
pub mod parsing;

// Re-exports
pub use crate::{
    decimal::{ArithmeticError, DecimalValue, ParseError},
    identifiers::{TokenAddress, normalize},
};
