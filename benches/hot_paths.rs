//! Performance benchmarks for chaindoc hot paths.
//!
//! Measures the operations that dominate a search request:
//! - Term counting over document content
//! - Excerpt construction and highlighting
//! - A full multi-repository walk
//!
//! Run with: `cargo bench`
//! View reports: `open target/criterion/report/index.html`

use chaindoc::config::RepositoryConfig;
use chaindoc::services::excerpt::build_excerpt;
use chaindoc::services::{score_content, SearchService};
use chaindoc::types::SearchTerms;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// A markdown page roughly the shape of a real guide.
fn guide_page(i: usize, paragraphs: usize) -> String {
    let mut page = format!("# Guide {i}\n\n");
    for p in 0..paragraphs {
        page.push_str(&format!(
            "## Section {p}\n\nSign the transaction with the wallet, then estimate gas \
             before broadcasting. Validators include it in the next block.\n\n"
        ));
    }
    page
}

// ============================================================================
// Matching Benchmarks
// ============================================================================

/// Benchmarks occurrence counting at different document sizes.
fn bench_score_content(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_content");
    let terms = SearchTerms::parse("transaction gas");

    for paragraphs in [10, 100, 1_000] {
        let content = guide_page(0, paragraphs);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(paragraphs),
            &content,
            |b, content| b.iter(|| black_box(score_content(content, &terms))),
        );
    }

    group.finish();
}

/// Benchmarks excerpt building with one and several terms.
fn bench_build_excerpt(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_excerpt");
    let content = guide_page(0, 100);

    for query in ["wallet", "wallet gas block", "validators include transaction"] {
        let terms = SearchTerms::parse(query);
        group.bench_with_input(BenchmarkId::from_parameter(query), &terms, |b, terms| {
            b.iter(|| black_box(build_excerpt(&content, terms, "guide.md")))
        });
    }

    group.finish();
}

// ============================================================================
// Search Benchmarks
// ============================================================================

/// Benchmarks an end-to-end search over generated repositories.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(20);

    for files_per_repo in [50, 500] {
        let dir = TempDir::new().unwrap();
        let repos = ["docs", "sdk-typescript", "ui-kit"];
        for repo in repos {
            let root = dir.path().join(repo).join("pages");
            fs::create_dir_all(&root).unwrap();
            for i in 0..files_per_repo {
                fs::write(root.join(format!("page_{i}.md")), guide_page(i, 5)).unwrap();
            }
            // Excluded tree of the same size; must not affect timings much
            let excluded = dir.path().join(repo).join("node_modules");
            fs::create_dir_all(&excluded).unwrap();
            for i in 0..files_per_repo {
                fs::write(excluded.join(format!("dep_{i}.js")), "gas gas gas").unwrap();
            }
        }

        let config = RepositoryConfig::new(
            dir.path().to_path_buf(),
            repos.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap();
        let service = SearchService::new(Arc::new(config));

        group.throughput(Throughput::Elements((files_per_repo * repos.len()) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(files_per_repo),
            &service,
            |b, service| b.iter(|| black_box(service.search("gas wallet").unwrap())),
        );
    }

    group.finish();
}

criterion_group!(matching_benches, bench_score_content, bench_build_excerpt);

criterion_group!(search_benches, bench_search);

criterion_main!(matching_benches, search_benches);
