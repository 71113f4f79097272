use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stash_grid::core::{
    find_first_fit, overlap_check, pick_up_item, place_item, GridSnapshot, GridStore, ItemTable,
};
use stash_grid::types::{Footprint, ItemData};

/// 20x10 grid filled with 1x1 items except for the bottom-right 2x2 corner.
fn crowded() -> (GridStore, ItemTable) {
    let mut grid = GridStore::new(20, 10).unwrap();
    let mut items = ItemTable::new();
    for y in 0..10 {
        for x in 0..20 {
            if x >= 18 && y >= 8 {
                continue;
            }
            let id = items.insert(ItemData::new("Coin", 1, 1, 1)).unwrap();
            place_item(&mut grid, &mut items, id, x, y);
        }
    }
    (grid, items)
}

fn bench_overlap_check(c: &mut Criterion) {
    let (grid, _) = crowded();

    c.bench_function("overlap_check_3x3", |b| {
        b.iter(|| overlap_check(black_box(&grid), black_box(4), black_box(4), 3, 3))
    });
}

fn bench_first_fit(c: &mut Criterion) {
    let (grid, _) = crowded();

    c.bench_function("first_fit_crowded_2x2", |b| {
        b.iter(|| find_first_fit(black_box(&grid), black_box(Footprint::new(2, 2))))
    });
}

fn bench_place_pick_up(c: &mut Criterion) {
    let mut grid = GridStore::new(20, 10).unwrap();
    let mut items = ItemTable::new();
    let id = items.insert(ItemData::new("Safe", 3, 3, 2000)).unwrap();

    c.bench_function("place_pick_up_3x3", |b| {
        b.iter(|| {
            place_item(&mut grid, &mut items, id, black_box(5), black_box(4));
            pick_up_item(&mut grid, &mut items, black_box(6), black_box(5))
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let (grid, items) = crowded();

    c.bench_function("snapshot_capture", |b| {
        b.iter(|| GridSnapshot::capture(black_box(&grid), black_box(&items)))
    });
}

criterion_group!(
    benches,
    bench_overlap_check,
    bench_first_fit,
    bench_place_pick_up,
    bench_snapshot
);
criterion_main!(benches);
