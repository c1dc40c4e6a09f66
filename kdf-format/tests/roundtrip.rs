//! Files written by `KeyedFileWriter` read back through `KeyedFileReader`.

use std::collections::HashMap;

use kdf_format::{
    Delimiter, KeyedFileReader, KeyedFileWriter, LineEnding, ReaderOptions, WriterOptions,
};
use tempfile::TempDir;

fn people() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("1", vec!["Alice", "30"]),
        ("2", vec!["Bob", "41"]),
        ("3", vec!["Carol", ""]),
    ]
}

fn write_people(path: &std::path::Path, delimiter: &str, line_ending: LineEnding) {
    let options = WriterOptions::new()
        .delimiter(Delimiter::new(delimiter).unwrap())
        .line_ending(line_ending);
    let mut writer = KeyedFileWriter::open(path, options).unwrap();

    assert!(writer.write_keyed_line("id", &["name", "age"]).unwrap());
    for (key, elements) in people() {
        assert!(writer.write_keyed_line(key, &elements).unwrap());
    }
    // Repeats are skipped rather than duplicated.
    assert!(!writer.write_keyed_line("2", &["Robert", "41"]).unwrap());
    writer.close().unwrap();
}

fn roundtrip(delimiter: &str, line_ending: LineEnding) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("people.txt");
    write_people(&path, delimiter, line_ending);

    let options = ReaderOptions::new().delimiter(Delimiter::new(delimiter).unwrap());
    let reader = KeyedFileReader::open(&path, options).unwrap();
    assert_eq!(reader.keys(), &["id", "name", "age"]);

    let records = reader.collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(records.len(), 3);

    for (record, (key, elements)) in records.iter().zip(people()) {
        let mut expected = HashMap::new();
        expected.insert("id".to_string(), key.to_string());
        expected.insert("name".to_string(), elements[0].to_string());
        expected.insert("age".to_string(), elements[1].to_string());
        assert_eq!(record.clone().into_map(), expected);
    }
}

#[test]
fn roundtrip_comma() {
    roundtrip(",", LineEnding::Lf);
}

#[test]
fn roundtrip_tab_crlf() {
    roundtrip("\t", LineEnding::CrLf);
}

#[test]
fn roundtrip_multi_char_delimiter() {
    roundtrip("||", LineEnding::PLATFORM);
}

#[test]
fn copy_with_reader_keys() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src.csv");
    let dst = dir.path().join("dst.csv");
    std::fs::write(&src, "id,name,age\n1,Alice,30\n2,Bob\n1,Again,99\n").unwrap();

    let mut reader = KeyedFileReader::open(&src, ReaderOptions::new()).unwrap();
    let keys = reader.key_row();
    let mut writer =
        KeyedFileWriter::open(&dst, WriterOptions::new().line_ending(LineEnding::Lf)).unwrap();

    writer
        .write_keyed_line(keys.get(0).unwrap(), keys.iter().skip(1))
        .unwrap();

    let mut skipped = 0;
    while let Some(record) = reader.next_line().unwrap() {
        let mut values = record.values_in(&keys);
        let key = values.next().unwrap();
        if !writer.write_keyed_line(key, values).unwrap() {
            skipped += 1;
        }
    }
    writer.close().unwrap();

    assert_eq!(skipped, 1);
    assert_eq!(
        std::fs::read_to_string(&dst).unwrap(),
        "id,name,age,\n1,Alice,30,\n2,Bob,\n"
    );
}

#[test]
fn json_follows_header_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    std::fs::write(&path, "name,id\nAlice,1\n").unwrap();

    let mut reader = KeyedFileReader::open(&path, ReaderOptions::new()).unwrap();
    let keys = reader.key_row();
    let record = reader.next_line().unwrap().unwrap();
    assert_eq!(
        record.to_json(&keys).to_string(),
        r#"{"name":"Alice","id":"1"}"#
    );
}
