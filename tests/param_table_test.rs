use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

use autoweka_tools::params::collect_sections;
use autoweka_tools::render::write_document;

fn write_params(root: &Path, subdir: &str, file: &str, body: &str) {
    let dir = root.join(subdir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), body).unwrap();
}

fn sample_tree(root: &Path) {
    write_params(
        root,
        "base",
        "weka.classifiers.trees.J48.params",
        "\
-O {REMOVE_PREV, REMOVED}[REMOVE_PREV]
-U {REMOVE_PREV, REMOVED}[REMOVE_PREV]
-C [0.05, 0.5][0.25]
-M [1, 64][2]il
Conditionals:
-C | -U in {REMOVE_PREV}
",
    );
    write_params(
        root,
        "base",
        "weka.classifiers.lazy.IBk.params",
        "\
# distance weighting
-E {REMOVED}[REMOVED]
-K [1, 64][1]il
INT_HIDDEN_seed {1}[1]
",
    );
    write_params(root, "meta", "weka.classifiers.meta.Empty.params", "Conditionals:\n");
    write_params(
        root,
        "attribselection/search",
        "weka.attributeSelection.BestFirst.params",
        "-D {0, 1, 2}[1]\n-N [2, 10][5]il\n",
    );
    write_params(
        root,
        "attribselection/eval",
        "weka.attributeSelection.CfsSubsetEval.params",
        "-M {REMOVE_PREV, REMOVED}[REMOVE_PREV]\n",
    );
}

fn render(root: &Path) -> String {
    let sections = collect_sections(root).unwrap();
    let mut buf = Vec::new();
    write_document(&mut buf, &sections).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_document_has_three_tables() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());

    let text = render(dir.path());
    assert_eq!(text.matches(r"\begin{longtabu}").count(), 3);
    assert_eq!(text.matches(r"\end{longtabu}").count(), 3);

    let classifiers = text.find("Classifier & Parameter").unwrap();
    let searches = text.find("Attribute Search & Parameter").unwrap();
    let evals = text.find("Attribute Evaluation & Parameter").unwrap();
    assert!(classifiers < searches && searches < evals);
}

#[test]
fn test_rows_follow_sorted_files() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());

    let text = render(dir.path());
    let expected = "\
IBk & -K & 1, 64 & 1\\\\
\\midrule
J48 & -O & false, true & false\\\\
 & -U & false, true & false\\\\
 & -C & 0.05, 0.5 & 0.25\\\\
 & -M & 1, 64 & 2\\\\
\\midrule
\\end{longtabu}";
    assert!(text.contains(expected), "unexpected table:\n{}", text);
}

#[test]
fn test_filtered_declarations_never_appear() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());

    let text = render(dir.path());
    assert!(!text.contains("HIDDEN"));
    assert!(!text.contains("seed"));
    assert!(!text.contains("& -E &"));
    assert!(!text.contains("Empty"));
    assert!(!text.contains("in {"));
}

#[test]
fn test_missing_root_gives_empty_tables() {
    let dir = tempdir().unwrap();
    let text = render(&dir.path().join("does-not-exist"));
    assert_eq!(text.matches(r"\begin{longtabu}").count(), 3);
    assert!(!text.contains("\n\\midrule\n"));
}

#[test]
fn test_binary_prints_table() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());

    Command::cargo_bin("param_table")
        .unwrap()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r"\section{Auto-WEKA Configuration Space}",
        ))
        .stdout(predicate::str::contains("BestFirst & -D & 0, 1, 2 & 1\\\\"))
        .stdout(predicate::str::contains("CfsSubsetEval & -M & false, true & false\\\\"));
}

#[test]
fn test_binary_requires_root_argument() {
    Command::cargo_bin("param_table").unwrap().assert().failure();
}
