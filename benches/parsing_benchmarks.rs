use addrgrep::{normalize, AddressParser};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const US_TEXT: &str =
    "Our office is at 225 E. John Carpenter Freeway, Suite 1500 Irving, Texas 75062 and \
     deliveries go to 2400 Jefferson Davis Hwy, Arlington, Virginia 22202.";

const GB_TEXT: &str =
    "Write to us at 11-59 High Road, East Finchley London, N2 8AW, UK or visit \
     32 London Bridge St, London SE1 9SG.";

fn bench_normalize(c: &mut Criterion) {
    let raw = "225 E. John Carpenter Freeway\nSuite 1500\nIrving ,  Texas\n75062";
    c.bench_function("normalize_multiline", |b| {
        b.iter(|| normalize(black_box(raw)))
    });
}

fn bench_parser_construction(c: &mut Criterion) {
    c.bench_function("parser_new_three_countries", |b| {
        b.iter(|| AddressParser::new(black_box(["US", "CA", "GB"])).unwrap())
    });
}

fn bench_first_parse_compiles_grammar(c: &mut Criterion) {
    c.bench_function("parse_us_cold", |b| {
        b.iter(|| {
            let parser = AddressParser::new(["US"]).unwrap();
            parser.parse(black_box(US_TEXT)).unwrap()
        })
    });
}

fn bench_parse_cached(c: &mut Criterion) {
    let parser = AddressParser::new(["US"]).unwrap();
    // Warm the grammar cache so only matching is measured.
    parser.parse(US_TEXT).unwrap();
    c.bench_function("parse_us_warm", |b| {
        b.iter(|| parser.parse(black_box(US_TEXT)).unwrap())
    });

    let parser = AddressParser::new(["US", "CA", "GB"]).unwrap();
    parser.parse(US_TEXT).unwrap();
    let mixed = format!("{US_TEXT} {GB_TEXT}");
    c.bench_function("parse_multi_country_warm", |b| {
        b.iter(|| parser.parse(black_box(&mixed)).unwrap())
    });
}

fn bench_parse_long_text(c: &mut Criterion) {
    let parser = AddressParser::new(["US"]).unwrap();
    let filler = "No address in this sentence, only ordinary prose about nothing much. ";
    let mut text = filler.repeat(50);
    text.push_str(US_TEXT);
    text.push_str(&filler.repeat(50));
    parser.parse(&text).unwrap();
    c.bench_function("parse_us_long_text", |b| {
        b.iter(|| parser.parse(black_box(&text)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_parser_construction,
    bench_first_parse_compiles_grammar,
    bench_parse_cached,
    bench_parse_long_text,
);
criterion_main!(benches);
