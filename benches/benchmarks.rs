criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        choosing_best_split,
        building_small_tree,
        building_large_tree,
        building_movie_tree,
}

fn choosing_best_split(c: &mut criterion::Criterion) {
    c.bench_function("choose a split over 1024 records x 64 features", |b| {
        let catalog = Catalog::sample(1024, 64);
        let records = catalog.records().iter().collect::<Vec<&Record>>();
        b.iter(|| best_split(&records, catalog.features()))
    });
}

fn building_small_tree(c: &mut criterion::Criterion) {
    c.bench_function("build a tree over 64 records x 16 features", |b| {
        let catalog = Catalog::sample(64, 16);
        b.iter(|| Node::from(&catalog))
    });
}

fn building_large_tree(c: &mut criterion::Criterion) {
    c.bench_function("build a tree over 4096 records x 32 features", |b| {
        let catalog = Catalog::sample(4096, 32);
        b.iter(|| Node::from(&catalog))
    });
}

fn building_movie_tree(c: &mut criterion::Criterion) {
    c.bench_function("parse and build the bundled movie catalog", |b| {
        let text = include_str!("../data/movies.csv");
        b.iter(|| Node::from(&Catalog::parse(text).expect("bundled catalog parses")))
    });
}

use twenty_questions::catalog::Catalog;
use twenty_questions::catalog::Record;
use twenty_questions::tree::Node;
use twenty_questions::tree::best_split;
