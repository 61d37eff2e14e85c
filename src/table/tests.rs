// src/table/tests.rs

//! Tests for the dedupe / filter / sort pipeline.

use crate::color::Rgb;
use crate::config::{GeneratorConfig, NameMode};
use crate::table::*;

const SAMPLE: &str = "\
! $Xorg: rgb.txt,v 1.3 2000/08/17 19:54:00 cpqbld Exp $
255 250 250\t\tsnow
248 248 255\t\tghost white
248 248 255\t\tGhostWhite
105 105 105\t\tdim gray
105 105 105\t\tDimGray
 64 224 208\t\tturquoise
bad line here
238 233 233\t\tsnow2
  0   0 128\t\tnavy blue
  0   0 128\t\tnavy
";

fn config(mode: NameMode, filter: bool) -> GeneratorConfig {
    GeneratorConfig {
        mode,
        filter,
        ..GeneratorConfig::default()
    }
}

fn names(table: &ColorTable) -> Vec<&str> {
    table.entries().iter().map(|e| e.name.as_str()).collect()
}

fn entry(name: &str, rgb: Rgb) -> ColorEntry {
    ColorEntry {
        name: name.to_string(),
        rgba: rgb.to_rgba(),
    }
}

#[test_log::test]
fn dedupe_keeps_first_occurrence() {
    let entries = vec![
        entry("DimGray", Rgb(105, 105, 105)),
        entry("Snow", Rgb(255, 250, 250)),
        entry("DimGray", Rgb(1, 2, 3)),
    ];
    let deduped = dedupe(entries);
    assert_eq!(
        deduped,
        vec![entry("DimGray", Rgb(105, 105, 105)), entry("Snow", Rgb(255, 250, 250))]
    );
}

#[test_log::test]
fn dim_gray_spellings_collapse_to_one_entry() {
    let lines = ["105 105 105 dim gray", "105 105 105 DimGray"];
    let table = ColorTable::build(lines, &config(NameMode::Normalize, false));
    assert_eq!(names(&table), vec!["DimGray"]);
}

#[test_log::test]
fn earlier_line_wins_when_values_differ() {
    let lines = ["1 1 1 light blue", "2 2 2 LightBlue"];
    let table = ColorTable::build(lines, &config(NameMode::Normalize, false));
    assert_eq!(table.entries(), &[entry("LightBlue", Rgb(1, 1, 1))]);
}

#[test_log::test]
fn malformed_lines_do_not_reserve_names() {
    let lines = ["x 1 1 snow", "255 250 250 snow"];
    let table = ColorTable::build(lines, &config(NameMode::Normalize, false));
    assert_eq!(table.entries(), &[entry("Snow", Rgb(255, 250, 250))]);
}

#[test_log::test]
fn normalize_output_is_unique_and_sorted() {
    let table = ColorTable::build(SAMPLE.lines(), &config(NameMode::Normalize, false));
    assert_eq!(
        names(&table),
        vec!["DimGray", "GhostWhite", "Navy", "NavyBlue", "Snow", "Snow2", "Turquoise"]
    );
    assert!(table
        .entries()
        .windows(2)
        .all(|w| w[0].name < w[1].name));
    assert_eq!(table.mode(), NameMode::Normalize);
}

#[test_log::test]
fn sort_is_case_sensitive() {
    let mut entries = vec![
        entry("navy", Rgb(0, 0, 128)),
        entry("Snow", Rgb(255, 250, 250)),
        entry("Azure", Rgb(240, 255, 255)),
    ];
    sort_by_name(&mut entries);
    let sorted: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(sorted, vec!["Azure", "Snow", "navy"]);
}

#[test_log::test]
fn filter_predicate() {
    assert!(!is_excluded_by_filter("Snow"));
    assert!(!is_excluded_by_filter("Navy"));
    assert!(is_excluded_by_filter("NavyBlue"));
    assert!(is_excluded_by_filter("Snow2"));
    assert!(is_excluded_by_filter("Gray100"));
    assert!(!is_excluded_by_filter("gray"));
    assert!(!is_excluded_by_filter(""));
}

#[test_log::test]
fn filter_keeps_only_simple_names() {
    let table = ColorTable::build(SAMPLE.lines(), &config(NameMode::Normalize, true));
    assert_eq!(names(&table), vec!["Navy", "Snow", "Turquoise"]);
    for e in table.entries() {
        assert!(e.name.chars().filter(|c| c.is_uppercase()).count() <= 1);
        assert!(!e.name.ends_with(|c: char| c.is_ascii_digit()));
    }
}

#[test_log::test]
fn filter_runs_after_dedupe() {
    // "Snow" survives dedupe first, so the later duplicate never competes.
    let lines = ["255 250 250 snow", "1 1 1 Snow", "2 2 2 snow white"];
    let table = ColorTable::build(lines, &config(NameMode::Normalize, true));
    assert_eq!(table.entries(), &[entry("Snow", Rgb(255, 250, 250))]);
}

#[test_log::test]
fn without_filter_digit_names_are_kept() {
    let lines = ["238 233 233 snow2", "255 250 250 snow"];
    let table = ColorTable::build(lines, &config(NameMode::Normalize, false));
    assert_eq!(names(&table), vec!["Snow", "Snow2"]);
}

#[test_log::test]
fn verbatim_keeps_every_valid_line_in_order() {
    let table = ColorTable::build(SAMPLE.lines(), &config(NameMode::Verbatim, false));
    let total = SAMPLE.lines().count();
    let malformed = 2;
    assert_eq!(table.len(), total - malformed);
    assert_eq!(
        names(&table),
        vec![
            "snow",
            "ghost white",
            "GhostWhite",
            "dim gray",
            "DimGray",
            "turquoise",
            "snow2",
            "navy blue",
            "navy",
        ]
    );
}

#[test_log::test]
fn verbatim_ignores_filter_setting() {
    let table = ColorTable::build(SAMPLE.lines(), &config(NameMode::Verbatim, true));
    assert_eq!(table.len(), 9);
}

#[test_log::test]
fn empty_input_gives_empty_table() {
    let table = ColorTable::build(std::iter::empty(), &config(NameMode::Normalize, false));
    assert!(table.is_empty());
}
