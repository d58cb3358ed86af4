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

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use tokenledger_model::ledger::{AmountLedger, LedgerKind};

const TOKEN: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";

fn bench_increment_by(c: &mut Criterion) {
    let mut ledger = AmountLedger::new(LedgerKind::Balances);
    c.bench_function("AmountLedger::increment_by", |b| {
        b.iter(|| ledger.increment_by(black_box(TOKEN), black_box("1000000000000000")));
    });
}

fn bench_decrement_by_clamped(c: &mut Criterion) {
    let mut ledger = AmountLedger::new(LedgerKind::Balances);
    c.bench_function("AmountLedger::decrement_by_clamped", |b| {
        b.iter(|| ledger.decrement_by(black_box(TOKEN), black_box("1000000000000000")));
    });
}

fn bench_get(c: &mut Criterion) {
    let mut ledger = AmountLedger::new(LedgerKind::Balances);
    ledger
        .set(TOKEN, "123456789000000000000")
        .expect("valid amount");
    c.bench_function("AmountLedger::get", |b| {
        b.iter(|| ledger.get(black_box(TOKEN)));
    });
}

criterion_group!(
    benches,
    bench_increment_by,
    bench_decrement_by_clamped,
    bench_get
);
criterion_main!(benches);
