mod common;

use std::fs;
use std::io::Cursor;

use xzqh_reader::xzqh::prompt;
use xzqh_reader::{PromptOptions, XzqhError, XzqhReader};

use common::sample_bytes;

fn quiet_options() -> PromptOptions {
    PromptOptions {
        quit_word: "q".to_string(),
        prompt: String::new(),
    }
}

fn run_prompt(reader: &XzqhReader, input: &str, options: &PromptOptions) -> (usize, String) {
    let mut output = Vec::new();
    let queries = prompt::run(&reader.data(), Cursor::new(input), &mut output, options)
        .expect("prompt loop");
    (queries, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn opens_a_region_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("xzqh.bin");
    fs::write(&path, sample_bytes()).expect("write fixture");

    let reader = XzqhReader::open(&path).expect("open region file");
    assert_eq!(reader.data().root().len(), 3);
    assert_eq!(reader.search("Chaoyang").len(), 3);
    assert_eq!(reader.search_by_code("211302")[0].region.name(), "Shuangta");
    assert_eq!(reader.resolve(0, Some(99), None).map(|r| r.code()), Some("110000"));
    assert_eq!(reader.catalog().list_provinces().len(), 3);
    assert_eq!(reader.as_bytes(), sample_bytes().as_slice());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = XzqhReader::open(dir.path().join("absent.bin")).expect_err("missing file");
    assert!(matches!(err, XzqhError::Io(_)));
    assert!(!err.is_structural());
}

#[test]
fn corrupt_file_is_a_structural_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("corrupt.bin");
    let mut bytes = sample_bytes();
    bytes.truncate(bytes.len() / 2);
    fs::write(&path, &bytes).expect("write fixture");

    let err = XzqhReader::open(&path).expect_err("corrupt file");
    assert!(err.is_structural(), "got {:?}", err);
}

#[test]
fn prompt_prints_every_match_and_stops_at_quit() {
    let reader = XzqhReader::from_bytes(sample_bytes()).unwrap();
    let (queries, out) = run_prompt(&reader, "Chaoyang\n\nNowhere\nq\nJilin\n", &quiet_options());

    assert_eq!(queries, 2);
    assert_eq!(out.matches("Found match:").count(), 3);
    assert!(out.contains("Beijing -> Beijing City -> Chaoyang\nCode: 110105\nCoordinates: 116.4, 39.9\n"));
    assert!(out.contains("Jilin -> Changchun -> Chaoyang\nCode: 220104\n"));
    assert!(out.contains("Liaoning -> Chaoyang\nCode: 211300\n"));
    assert!(out.contains("No location found with name: Nowhere\n"));
    assert!(!out.contains("Code: 220000"), "input after quit must be ignored");
}

#[test]
fn prompt_reports_missing_coordinates() {
    let reader = XzqhReader::from_bytes(sample_bytes()).unwrap();
    let (_, out) = run_prompt(&reader, "Beijing City\r\n", &quiet_options());

    assert!(out.contains("Beijing -> Beijing City\nCode: 110100\nCoordinates: N/A\n"), "{}", out);
}

#[test]
fn prompt_ends_at_end_of_input() {
    let reader = XzqhReader::from_bytes(sample_bytes()).unwrap();
    let (queries, out) = run_prompt(&reader, "Shuangta", &quiet_options());

    assert_eq!(queries, 1);
    assert!(out.contains("Liaoning -> Chaoyang -> Shuangta\nCode: 211302\nCoordinates: N/A\n"));
}

#[test]
fn prompt_uses_custom_quit_word_and_prompt_text() {
    let reader = XzqhReader::from_bytes(sample_bytes()).unwrap();
    let options = PromptOptions::with_quit_word("exit");
    let (queries, out) = run_prompt(&reader, "q\nexit\nJilin\n", &options);

    assert_eq!(queries, 1, "'q' is an ordinary query here");
    assert!(out.contains("No location found with name: q"));
    assert_eq!(out.matches("(or 'exit' to quit)").count(), 2);
}
