use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use regex::Regex;
use rev_semver::{Identifier, Version};

const INPUT_S: &str = "1.0.0";
const INPUT_REV: &str = "1.2.3.4";
const INPUT_XL: &str = "1.2.3.4-1.alpha1.9+build5.7.3aedf.01337";

const STRICT_PATTERN: &str = r"^(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)(?:\.(?P<revision>0|[1-9]\d*))?(?:-(?P<prerelease>(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$";

fn regex_parser(re: &Regex, input: &str) -> Option<Version> {
    let caps = re.captures(input)?;

    let mut version = Version::new(
        caps.name("major")?.as_str().parse().ok()?,
        caps.name("minor")?.as_str().parse().ok()?,
        caps.name("patch")?.as_str().parse().ok()?,
    );

    if let Some(revision) = caps.name("revision") {
        version.revision = Some(revision.as_str().parse().ok()?);
    }
    if let Some(pre) = caps.name("prerelease") {
        version.pre = pre
            .as_str()
            .split('.')
            .map(Identifier::new)
            .collect::<Result<Vec<_>, _>>()
            .ok()?;
    }
    if let Some(build) = caps.name("buildmetadata") {
        version.build = build.as_str().split('.').map(String::from).collect();
    }

    Some(version)
}

fn bench_parsers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parser");
    let re = Regex::new(STRICT_PATTERN).unwrap();

    for &input in [INPUT_S, INPUT_REV, INPUT_XL].iter() {
        let strict = BenchmarkId::new("strict_parser", input);
        group.bench_with_input(strict, input, |b, input| {
            b.iter(|| rev_semver::parse(black_box(input)).unwrap())
        });
        let tolerant = BenchmarkId::new("tolerant_parser", input);
        group.bench_with_input(tolerant, input, |b, input| {
            b.iter(|| rev_semver::parse_tolerant(black_box(input)).unwrap())
        });
        let regex = BenchmarkId::new("regex_parser", input);
        group.bench_with_input(regex, &(input, &re), |b, (input, re)| {
            b.iter(|| regex_parser(re, black_box(input)).unwrap())
        });
    }

    // semver does not know about revisions
    let semver = BenchmarkId::new("semver_parser", INPUT_S);
    group.bench_with_input(semver, INPUT_S, |b, input| {
        b.iter(|| semver::Version::parse(black_box(input)).unwrap())
    });

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let versions = (0..100_u64)
        .rev()
        .map(|n| Version::new(n % 3, n % 7, n % 11).with_revision(n))
        .collect::<Vec<_>>();

    let _ = c.bench_function("sort", |b| {
        b.iter(|| {
            let mut versions = versions.clone();
            rev_semver::sort(black_box(&mut versions));
            versions
        })
    });
}

criterion_group!(benches, bench_parsers, bench_sort);
criterion_main!(benches);
