//! Scan Benchmarks
//!
//! **Purpose:** Measure directory-size aggregation and package ranking over
//! synthetic dependency trees
//!
//! **How to Run:**
//! ```bash
//! cargo bench --bench scan
//! cargo bench --bench scan -- --save-baseline main
//! cargo bench --bench scan -- --baseline main
//! ```
//!
//! **What's Being Measured:**
//! 1. `measure dependency tree` - recursive size aggregation
//! 2. `rank packages` - child listing, measurement, sort and truncation
//!
//! **Performance Notes:**
//! - Dominated by filesystem metadata calls; tree shape matters more than
//!   byte counts
//! - Ranking is O(n log n) over immediate children with a small constant

use criterion::{criterion_group, criterion_main, Criterion};
use depsize::scan::{measure_dir, scan_packages};
use std::fs;
use std::hint::black_box;
use std::path::Path;
use tempfile::TempDir;

fn make_tree(packages: usize, files_per_package: usize) -> TempDir {
    let temp = TempDir::new().expect("tempdir");
    let deps = temp.path().join("node_modules");
    for p in 0..packages {
        let pkg = deps.join(format!("pkg-{:03}", p));
        fs::create_dir_all(&pkg).expect("mkdir");
        for f in 0..files_per_package {
            fs::write(pkg.join(format!("mod-{}.js", f)), vec![b'x'; 256]).expect("write");
        }
    }
    temp
}

fn bench_measure_dependency_tree(c: &mut Criterion) {
    let temp = make_tree(50, 20);
    let deps: &Path = &temp.path().join("node_modules");

    c.bench_function("measure dependency tree (50 pkgs x 20 files)", |b| {
        b.iter(|| {
            let _ = black_box(measure_dir(black_box(deps)));
        });
    });
}

fn bench_rank_packages(c: &mut Criterion) {
    let temp = make_tree(50, 20);
    let deps: &Path = &temp.path().join("node_modules");

    c.bench_function("rank packages (50 pkgs)", |b| {
        b.iter(|| {
            let scan = black_box(scan_packages(black_box(deps)));
            black_box(scan.entries.len());
        });
    });
}

criterion_group!(benches, bench_measure_dependency_tree, bench_rank_packages);
criterion_main!(benches);
