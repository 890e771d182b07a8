use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rphoneinput::PHONE_INPUT_UTIL;

use phonenumber::{self as rlp, country::Id};

// (number, default country for rphoneinput, default country for rust-phonenumber)
type TestEntity = (&'static str, &'static str, Id);

fn setup_parsing_data() -> Vec<TestEntity> {
    use phonenumber::country::Id::*;
    vec![
        // International notation with punctuation
        ("+7 (800) 555-35-35", "RU", RU),
        // National number with the national prefix
        ("8 800 555 35 35", "RU", RU),
        // Plain US number in national notation
        ("(650) 253-0000", "US", US),
        // UK number with the leading zero
        ("020 8765 4321", "GB", GB),
        ("+44 20 8765 4321", "GB", GB),
        // Shared calling code resolved by leading digits
        ("+1 684 555 1234", "US", US),
        ("+7 701 234 56 78", "KZ", KZ),
        // Italian number, no national prefix
        ("02 12345678", "IT", IT),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let numbers_to_parse = setup_parsing_data();

    let mut group = c.benchmark_group("Parsing Comparison");

    group.bench_function("rphoneinput: parse_phone_number()", |b| {
        b.iter(|| {
            for (number_str, region, _) in &numbers_to_parse {
                let _ = PHONE_INPUT_UTIL.parse_phone_number(black_box(number_str), black_box(Some(*region)));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse()", |b| {
        b.iter(|| {
            for (number_str, _, region_id) in &numbers_to_parse {
                let _ = rlp::parse(black_box(Some(*region_id)), black_box(number_str));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
