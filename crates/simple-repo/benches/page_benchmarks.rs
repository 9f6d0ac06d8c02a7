//! Benchmarks for building page records from HTML links and PEP 691 JSON.
//!
//! Performance targets:
//! - Project page with 100 links: < 5ms
//! - Project JSON with 100 files: < 5ms

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use simple_repo::{DistributionPackage, Link, PageParser, RepositoryPage};
use std::fmt::Write;
use std::hint::black_box;

fn links(count: usize) -> Vec<Link> {
    (0..count)
        .map(|i| {
            let filename = if i % 2 == 0 {
                format!("bench-project-1.{i}.0-py3-none-any.whl")
            } else {
                format!("bench-project-1.{i}.0.tar.gz")
            };
            Link::new(
                filename.clone(),
                format!("https://files.example.com/{filename}#sha256=0123abcd"),
            )
            .with_attr("data-requires-python", ">=3.8")
            .with_attr("data-core-metadata", "sha256=4567ef")
        })
        .collect()
}

fn project_json(count: usize) -> String {
    let mut files = String::new();
    for i in 0..count {
        if i > 0 {
            files.push(',');
        }
        write!(
            files,
            r#"{{"filename": "bench-project-1.{i}.0.tar.gz", "url": "packages/bench-project-1.{i}.0.tar.gz",
                "hashes": {{"sha256": "0123abcd"}}, "yanked": false, "size": 1024}}"#
        )
        .unwrap();
    }
    format!(
        r#"{{"name": "bench-project", "meta": {{"api-version": "1.1", "_last-serial": 1}}, "files": [{files}]}}"#
    )
}

fn bench_from_link(c: &mut Criterion) {
    let link = &links(2)[1];
    c.bench_function("from_link", |b| {
        b.iter(|| DistributionPackage::from_link(black_box(link), Some("bench-project")))
    });
}

fn bench_project_page_from_links(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_page_from_links");
    let parser = PageParser::new();

    for count in [10, 100] {
        let page = RepositoryPage {
            repository_version: Some("1.0".to_string()),
            links: links(count),
            ..RepositoryPage::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(count), &page, |b, page| {
            b.iter(|| {
                parser
                    .project_page_from_repository_page("bench-project", black_box(page.clone()))
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_project_page_from_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_page_from_json");
    let parser = PageParser::new();

    for count in [10, 100] {
        let json = project_json(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &json, |b, json| {
            b.iter(|| {
                parser
                    .project_page_from_json(black_box(json), Some("https://test.nil/simple/bench-project/"))
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_from_link,
    bench_project_page_from_links,
    bench_project_page_from_json
);
criterion_main!(benches);
