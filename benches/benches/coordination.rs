// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use clerestory_panels::{Presentation, Workbench, observer};
use clerestory_scope::{Mode, Scope, ScopeKind};
use clerestory_selection::SelectionStore;
use kurbo::Rect;

fn bench_store_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection_store/set");

    // Hypothesis: per-context cost stays flat as the number of live
    // contexts grows; the map lookup dominates, not the context count.
    for contexts in [16usize, 256, 4_096] {
        let keys: Vec<String> = (0..contexts).map(|i| format!("place:p{i}|edit")).collect();
        group.throughput(Throughput::Elements(contexts as u64));

        group.bench_with_input(BenchmarkId::from_parameter(contexts), &keys, |b, keys| {
            b.iter_batched(
                SelectionStore::<String, u32>::new,
                |mut store| {
                    for (i, key) in keys.iter().enumerate() {
                        store.set(key.clone(), Some(i as u32));
                    }
                    black_box(store);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_broadcast_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("workbench/broadcast");

    // One shared context with N panels; each mutation must reach all N.
    for panels in [1usize, 4, 16, 64] {
        group.throughput(Throughput::Elements(panels as u64));

        group.bench_with_input(BenchmarkId::from_parameter(panels), &panels, |b, &panels| {
            let mut bench: Workbench<u32> = Workbench::new();
            let heard = Rc::new(Cell::new(0u64));
            let scope = Scope::new(ScopeKind::Place, "p1");
            for _ in 0..panels {
                let heard = Rc::clone(&heard);
                bench.open_panel(
                    scope.clone(),
                    Mode::Edit,
                    Presentation::Viewport,
                    Rect::new(0.0, 0.0, 320.0, 480.0),
                    observer::<u32, _>(move |_, _| heard.set(heard.get() + 1)),
                );
            }
            let context = scope.in_mode(Mode::Edit);

            // Alternate items so every set is an effective change.
            let mut item = 0u32;
            b.iter(|| {
                item ^= 1;
                bench.set_selection(&context, Some(item));
            });
            black_box(heard.get());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_store_set, bench_broadcast_fanout);
criterion_main!(benches);
