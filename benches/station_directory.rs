use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::rc::Rc;
use subway_route::cascade::{Endpoint, SelectorCascade};
use subway_route::directory::StationDirectory;
use subway_route::models::Station;

/// A directory roughly the size of the national metro feed
fn synthetic_stations() -> Vec<Station> {
    let lines = ["서울1호선", "서울2호선", "서울3호선", "서울4호선", "서울5호선", "공항철도", "신분당선", "경의중앙선"];
    (0..6000)
        .map(|i| {
            let line = lines[i % lines.len()];
            Station::new(&format!("S-{i}"), &format!("역{:04}", (i * 7919) % 6000), line, "A1")
        })
        .collect()
}

fn benchmark_station_directory(c: &mut Criterion) {
    let stations = synthetic_stations();

    // Distinct line derivation runs once per load
    c.bench_function("build_directory", |b| {
        b.iter(|| StationDirectory::from_stations(black_box(stations.clone())));
    });

    let directory = Rc::new(StationDirectory::from_stations(stations));

    // Runs on every line selection
    c.bench_function("stations_for_line", |b| {
        b.iter(|| directory.stations_for_line(black_box("서울2호선")));
    });

    c.bench_function("cascade_set_line", |b| {
        let mut cascade = SelectorCascade::new(Endpoint::Origin, Rc::clone(&directory));
        b.iter(|| cascade.set_line(black_box("공항철도")));
    });
}

criterion_group!(benches, benchmark_station_directory);
criterion_main!(benches);
