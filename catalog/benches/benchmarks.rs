//! Performance benchmarks for shelf-catalog

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shelf_catalog::{Book, Catalog, SearchField};
use tempfile::TempDir;

fn populated_catalog(count: u64) -> (TempDir, Catalog) {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::new(dir.path().join("books.json"));

    let books: Vec<Book> = (1..=count)
        .map(|i| Book::new(i, format!("Book {i}"), format!("Author {i}"), "2000"))
        .collect();
    catalog.save(&books).unwrap();

    (dir, catalog)
}

fn bench_catalog_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_operations");

    // Benchmark add against a populated store
    group.bench_function("add", |b| {
        let (_dir, catalog) = populated_catalog(100);
        b.iter(|| {
            catalog
                .add(black_box("Dune"), black_box("Herbert"), black_box("1965"))
                .unwrap()
        })
    });

    // Benchmark list
    group.bench_function("list", |b| {
        let (_dir, catalog) = populated_catalog(100);
        b.iter(|| catalog.list().unwrap())
    });

    // Benchmark search by title
    group.bench_function("search_title", |b| {
        let (_dir, catalog) = populated_catalog(100);
        b.iter(|| {
            catalog
                .search(black_box(SearchField::Title), black_box("book 50"))
                .unwrap()
        })
    });

    group.finish();
}

fn bench_store_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_sizes");

    for size in [10u64, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("load", size), &size, |b, &size| {
            let (_dir, catalog) = populated_catalog(size);
            b.iter(|| catalog.list().unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_catalog_operations, bench_store_sizes);
criterion_main!(benches);
