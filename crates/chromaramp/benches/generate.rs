use chromaramp::config::Configuration;
use chromaramp::palette::{GenerationStrategy, PaletteGenerator, Section};
use chromaramp::ColorFormat;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sections() -> Vec<Section> {
    ["#3366ff", "#ff0000", "#a1d2ae", "#777777", "#fe01fd", "#123456"]
        .iter()
        .enumerate()
        .map(|(index, color)| {
            Section::new(format!("tone{}", index), *color)
                .inverted(index % 2 == 1)
                .with_edges(true)
        })
        .collect()
}

pub fn run_benchmarks(c: &mut Criterion) {
    let sections = sections();

    let mut group = c.benchmark_group("generate");
    for strategy in [
        GenerationStrategy::FixedStep,
        GenerationStrategy::LabPercentage,
        GenerationStrategy::HslPercentage,
    ] {
        let generator = PaletteGenerator::with_strategy(strategy);
        group.bench_function(strategy.name(), |b| {
            b.iter(|| generator.generate_css(black_box(&sections), ColorFormat::Hsl))
        });
    }
    group.finish();

    let config = Configuration::new(sections, GenerationStrategy::default());
    let json = config.to_json().expect("configuration serializes");
    c.bench_function("config-round-trip", |b| {
        b.iter(|| Configuration::from_json(black_box(&json)).and_then(|c| c.to_json()))
    });
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
