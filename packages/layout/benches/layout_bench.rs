//! Benchmarks for layout placement and client churn.
//!
//! Run with: `cargo bench -p tessel-layout`
//!
//! Results are saved to `target/criterion/` with HTML reports.
//!
//! ## Benchmark Groups
//!
//! - `arrange`: placement of every layout at various client counts
//! - `churn`: adding and removing clients through a layout group
//! - `commands`: focus and reordering commands

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tessel_layout::{
    Client, ClientId, Layout, LayoutCommand, LayoutGroup, Max, RatioTile, Rect, Side, Slice,
    Stack, Tile,
};

// ============================================================================
// Test Data
// ============================================================================

/// A 1080p screen region.
fn screen_1080p() -> Rect { Rect::new(0, 0, 1920, 1080) }

fn every_layout() -> Vec<Box<dyn Layout>> {
    vec![
        Box::new(Max::new()),
        Box::new(Stack::default()),
        Box::new(Tile::default()),
        Box::new(RatioTile::default()),
        Box::new(Slice::new(Side::Left, 300, "dock", Box::new(Tile::default())).unwrap_or_else(
            |err| panic!("invalid slice parameters: {err}"),
        )),
    ]
}

fn filled(mut layout: Box<dyn Layout>, count: u64) -> Box<dyn Layout> {
    layout.add(Client::new(0, "dock"));
    for id in 1..count {
        layout.add(Client::new(id, format!("client-{id}")));
    }
    layout
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_arrange(c: &mut Criterion) {
    let mut group = c.benchmark_group("arrange");
    let screen = screen_1080p();

    for count in [1, 4, 8, 16, 32] {
        for layout in every_layout() {
            let name = layout.name();
            let layout = filled(layout, count);
            group.bench_with_input(BenchmarkId::new(name, count), &count, |b, _| {
                b.iter(|| layout.arrange(black_box(&screen)));
            });
        }
    }

    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");

    for count in [8, 32] {
        group.bench_with_input(BenchmarkId::new("add_remove", count), &count, |b, &count| {
            b.iter(|| {
                let mut layouts = LayoutGroup::new("bench", every_layout())
                    .unwrap_or_else(|err| panic!("invalid group: {err}"))
                    .with_screen(screen_1080p());
                for id in 0..count {
                    layouts.add(Client::new(id, "client"));
                }
                for id in (0..count).step_by(2) {
                    layouts.remove(black_box(ClientId(id)));
                }
                layouts
            });
        });
    }

    group.finish();
}

fn bench_commands(c: &mut Criterion) {
    let mut group = c.benchmark_group("commands");

    for command in [LayoutCommand::Next, LayoutCommand::Down, LayoutCommand::ShuffleDown] {
        let mut layout = filled(Box::new(Stack::new(3).unwrap_or_default()), 16);
        group.bench_function(command.as_str(), |b| {
            b.iter(|| layout.command(black_box(command)));
        });
    }

    let mut layout = filled(Box::new(Tile::default()), 16);
    group.bench_function("tile_focus", |b| {
        b.iter(|| layout.focus(black_box(ClientId(8))));
    });

    group.finish();
}

criterion_group!(benches, bench_arrange, bench_churn, bench_commands);
criterion_main!(benches);
