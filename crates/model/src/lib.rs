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

//! Ledger state and reference data for the token ledger.
//!
//! The `tokenledger-model` crate holds the mutable state the rest of the workspace
//! reads: one [`ledger::AmountLedger`] type instantiated for balances and for the swap
//! and wrapper allowances, owned together by a [`book::LedgerBook`]. It also carries the
//! reference data consumed by planning, namely token metadata behind the
//! [`token::TokenMetadataLookup`] trait and per-network parameters loaded from TOML.
//!
//! # Feature flags
//!
//! - `stubs`: Enables type stubs for use in testing scenarios.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod book;
pub mod config;
pub mod events;
pub mod ledger;
pub mod network;
pub mod token;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;
