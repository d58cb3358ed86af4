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
use tokenledger_core::{DecimalValue, decimal::DIVISION_PRECISION};

fn bench_parse(c: &mut Criterion) {
    c.bench_function("DecimalValue::parse", |b| {
        b.iter(|| DecimalValue::parse(black_box("123456789.000000000000000001")));
    });
}

fn bench_checked_add(c: &mut Criterion) {
    let a = DecimalValue::parse("9007199254740991.5").unwrap();
    let b = DecimalValue::parse("0.000000000000000001").unwrap();
    c.bench_function("DecimalValue::checked_add", |bencher| {
        bencher.iter(|| black_box(&a).checked_add(black_box(&b)));
    });
}

fn bench_checked_div(c: &mut Criterion) {
    let a = DecimalValue::parse("1.5").unwrap();
    let b = DecimalValue::from(10_000_u64);
    c.bench_function("DecimalValue::checked_div", |bencher| {
        bencher.iter(|| black_box(&a).checked_div(black_box(&b), DIVISION_PRECISION));
    });
}

fn bench_atomic_round_trip(c: &mut Criterion) {
    c.bench_function("DecimalValue::atomic_round_trip", |b| {
        b.iter(|| {
            let value = DecimalValue::from_atomic_string(black_box("1500000000000000000"), 18)
                .expect("valid atomic amount");
            value.to_atomic_string(18).expect("fits decimals")
        });
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_checked_add,
    bench_checked_div,
    bench_atomic_round_trip,
);
criterion_main!(benches);
