//! Fixture-driven conversion tests.
//!
//! Each case in `tests/fixtures/cases.json` pairs markup with the exact HTML
//! it must produce.

use serde::Deserialize;
use std::fs;
use tinymark::to_html;

#[derive(Debug, Deserialize)]
struct Case {
    example: u32,
    section: String,
    markup: String,
    html: String,
}

fn load_cases() -> Vec<Case> {
    let json = fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/cases.json"))
        .expect("Failed to read tests/fixtures/cases.json");
    serde_json::from_str(&json).expect("Failed to parse cases.json")
}

fn run_section(section: &str) {
    let cases: Vec<_> = load_cases()
        .into_iter()
        .filter(|case| case.section == section)
        .collect();
    assert!(!cases.is_empty(), "no fixtures for section {section}");

    let mut failures = Vec::new();
    for case in &cases {
        match to_html(&case.markup) {
            Ok(html) if html == case.html => {}
            Ok(html) => failures.push(format!(
                "Example {}: {:?}\n  Expected: {:?}\n  Got:      {:?}",
                case.example, case.markup, case.html, html
            )),
            Err(err) => failures.push(format!(
                "Example {}: {:?}\n  Error: {err}",
                case.example, case.markup
            )),
        }
    }

    assert!(
        failures.is_empty(),
        "{section}: {} of {} failed\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn fixture_paragraphs() {
    run_section("Paragraphs");
}

#[test]
fn fixture_headers() {
    run_section("Headers");
}

#[test]
fn fixture_lists() {
    run_section("Lists");
}

#[test]
fn fixture_rules() {
    run_section("Rules");
}

#[test]
fn fixture_blockquotes() {
    run_section("Blockquotes");
}

#[test]
fn fixture_code() {
    run_section("Code");
}

#[test]
fn fixture_inline() {
    run_section("Inline");
}

#[test]
fn fixture_links() {
    run_section("Links");
}

#[test]
fn fixture_images() {
    run_section("Images");
}

#[test]
fn fixture_examples_are_unique() {
    let mut examples: Vec<u32> = load_cases().iter().map(|case| case.example).collect();
    let total = examples.len();
    examples.sort_unstable();
    examples.dedup();
    assert_eq!(examples.len(), total);
}
