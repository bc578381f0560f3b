use std::{fs, path::Path};

use clap::Parser;
use rankmax::cli::commands::pagerank::{
    ITERATION_TITLE, PagerankArgs, execute, sampling_title,
};
use tempfile::tempdir;

fn parse_args<I, T>(args: I) -> PagerankArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    PagerankArgs::parse_from(args)
}

fn write_corpus(dir: &Path) {
    fs::write(dir.join("1.html"), r#"<a href="2.html">2</a><a href="3.html">3</a>"#).unwrap();
    fs::write(dir.join("2.html"), r#"<a href="3.html">3</a>"#).unwrap();
    fs::write(dir.join("3.html"), r#"<a href="2.html">2</a>"#).unwrap();
    fs::write(dir.join("4.html"), "<p>dead end</p>").unwrap();
}

fn sum_values(value: &serde_json::Value) -> f64 {
    value
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_f64().unwrap())
        .sum()
}

#[test]
fn missing_corpus_argument_is_a_usage_error() {
    assert!(PagerankArgs::try_parse_from(["rankmax"]).is_err());
}

#[test]
fn defaults_follow_rank_config() {
    let args = parse_args(["rankmax", "corpus"]);
    assert_eq!(args.damping, 0.85);
    assert_eq!(args.samples, 10_000);
    assert!(args.seed.is_none());
    assert!(args.export.is_none());
}

#[test]
fn result_headings() {
    assert_eq!(
        sampling_title(10_000),
        "PageRank Results from Sampling (n = 10000)"
    );
    assert_eq!(ITERATION_TITLE, "PageRank Results from Iteration");
}

#[test]
fn export_writes_both_rank_tables() {
    let corpus = tempdir().unwrap();
    write_corpus(corpus.path());
    let out = tempdir().unwrap();
    let report = out.path().join("ranks.json");

    let args = parse_args([
        "rankmax",
        corpus.path().to_str().unwrap(),
        "--samples",
        "2000",
        "--seed",
        "42",
        "--verbose",
        "--export",
        report.to_str().unwrap(),
    ]);
    execute(args).expect("ranking a valid corpus should succeed");

    let contents = fs::read_to_string(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();

    assert_eq!(parsed["config"]["samples"], 2000);
    assert_eq!(parsed["config"]["seed"], 42);
    assert_eq!(parsed["sampling"].as_object().unwrap().len(), 4);
    assert!((sum_values(&parsed["sampling"]) - 1.0).abs() < 1e-9);
    assert!((sum_values(&parsed["iteration"]["ranks"]) - 1.0).abs() < 1e-3);
    assert!(parsed["iteration"]["iterations"].as_u64().unwrap() >= 1);
}

#[test]
fn seeded_exports_are_identical() {
    let corpus = tempdir().unwrap();
    write_corpus(corpus.path());
    let out = tempdir().unwrap();

    let mut reports = Vec::new();
    for name in ["first.json", "second.json"] {
        let path = out.path().join(name);
        execute(parse_args([
            "rankmax",
            corpus.path().to_str().unwrap(),
            "--samples",
            "500",
            "--seed",
            "7",
            "--export",
            path.to_str().unwrap(),
        ]))
        .unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        reports.push(parsed["sampling"].clone());
    }
    assert_eq!(reports[0], reports[1]);
}

#[test]
fn directory_without_pages_fails() {
    let corpus = tempdir().unwrap();
    fs::write(corpus.path().join("readme.txt"), "not a page").unwrap();
    let args = parse_args(["rankmax", corpus.path().to_str().unwrap()]);
    assert!(execute(args).is_err());
}

#[test]
fn invalid_damping_fails_before_crawling() {
    let args = parse_args(["rankmax", "does-not-exist", "--damping", "1.5"]);
    let err = execute(args).unwrap_err();
    assert!(err.to_string().contains("damping factor"), "{err}");
}
