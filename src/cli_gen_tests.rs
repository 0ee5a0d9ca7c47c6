#![cfg(test)]

use crate::cli_gen::*;
use crate::test_utils::TestDir;
use std::fs;

fn run(args : &[&str]) -> i32 {
    let mut full_args = vec!["randfill"];
    full_args.extend_from_slice(args);

    let matches = app().get_matches_from(full_args);

    gen(&matches)
}

#[test]
fn test_defaults_match_reference_invocation() {
    let matches = app().get_matches_from(vec!["randfill"]);

    assert_eq!(None, matches.value_of("out_file"));
    assert_eq!(None, matches.value_of("size"));
    assert!(!matches.is_present("verbose"));
}

#[test]
fn test_gen_writes_file() {
    let dir  = TestDir::new();
    let file = dir.file("cli.bin");

    assert_eq!(0, run(&[file.as_str(), "0.000001"]));
    assert_eq!(1073, fs::metadata(&file).unwrap().len());
}

#[test]
fn test_gen_verbose() {
    let dir  = TestDir::new();
    let file = dir.file("cli.bin");

    assert_eq!(0, run(&["-v", file.as_str(), "0"]));
    assert_eq!(0, fs::metadata(&file).unwrap().len());
}

#[test]
fn test_gen_rejects_bad_sizes() {
    let dir  = TestDir::new();
    let file = dir.file("cli.bin");

    assert_eq!(1, run(&[file.as_str(), "-1"]));
    assert_eq!(1, run(&[file.as_str(), "abc"]));
    assert_eq!(1, run(&[file.as_str(), "inf"]));
    assert!(!fs::metadata(&file).is_ok());
}

#[test]
fn test_gen_rejects_directory_as_out_file() {
    let dir = TestDir::new();

    assert_eq!(1, run(&[dir.file("").as_str(), "0"]));
}

#[test]
fn test_gen_missing_directory_is_operational_error() {
    let dir  = TestDir::new();
    let file = dir.file("missing/cli.bin");

    assert_eq!(2, run(&[file.as_str(), "0"]));
}

#[cfg(target_os = "linux")]
#[test]
fn test_gen_close_failure_is_operational_error() {
    assert_eq!(2, run(&["/dev/null", "0.000001"]));
}
