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

//! Native-currency deposit planning for the token ledger.
//!
//! A trade paying with a network's native currency is settled through its wrapped
//! token. This crate decides, from the current balances, whether native currency must
//! be wrapped first and how much, without any floating point:
//!
//! - [`deposit::plan_deposit`] is the pure decision over explicit inputs.
//! - [`planner::DepositPlanner`] resolves those inputs for a trade from a
//!   [`tokenledger_model::book::LedgerBook`], a token metadata lookup and the network
//!   registry.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod deposit;
pub mod planner;

// Re-exports
pub use crate::{
    deposit::{DepositPlan, DepositPlanInputs, MissingInfo, PlanError, plan_deposit},
    planner::DepositPlanner,
};
