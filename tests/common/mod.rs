//! Shared fixtures for pipeline tests.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Reference article text served for every title.
pub const ARTICLE: &str = "The Eiffel Tower is a wrought-iron lattice tower in Paris";

/// `count` well-formed records whose context matches [`ARTICLE`] exactly.
pub fn records(count: usize, content: &str) -> Value {
    Value::Array(
        (0..count)
            .map(|i| {
                json!({
                    "input": format!("What is landmark {i}?"),
                    "output": format!("It is landmark {i}."),
                    "task": "qa",
                    "context": { "content": content, "title": format!("Landmark {i}") }
                })
            })
            .collect(),
    )
}

/// Writes a zip archive at `dir/name` holding the given entries.
pub fn write_archive(dir: &Path, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let mut writer = ZipWriter::new(File::create(&path).unwrap());
    for (entry, data) in entries {
        writer
            .start_file(*entry, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(data.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    path
}

/// Archive holding `dataset` as `examples.data`.
pub fn write_dataset(dir: &Path, dataset: &Value) -> PathBuf {
    write_archive(
        dir,
        "contribution.zip",
        &[("examples.data", dataset.to_string().as_str())],
    )
}

/// Encyclopedia stub answering every query with `text`.
pub async fn wikipedia_server(text: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batchcomplete": "",
            "query": { "pages": { "736": { "pageid": 736, "title": "Stub", "extract": text } } }
        })))
        .mount(&server)
        .await;
    server
}

/// Rating service stub with fixed ratings per endpoint.
pub async fn rating_server(question: f64, answer: f64, uniqueness: f64) -> MockServer {
    let server = MockServer::start().await;
    for (endpoint, rating) in [
        ("/validator/evaluate-question", question),
        ("/validator/evaluate-answer", answer),
        ("/validator/uniqueness", uniqueness),
    ] {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rating": rating })))
            .mount(&server)
            .await;
    }
    server
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
