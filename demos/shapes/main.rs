//! Decodes shapes from JSON documents.
//!
//! ```text
//! cargo run --example shapes -- circle.json rect.json
//! ```
//!
//! With no arguments, a few built-in documents are decoded instead.

mod schema;

use miette::Report;
use mon_decode::{DecodeResult, Value};
use std::fs;

const SAMPLES: &[&str] = &[
    r#"{"type":"circle","center":{"x":"10","y":"12"},"radius":"4","color":"red","status":"visible"}"#,
    r#"{"type":"rectangle","topLeft":{"x":"0","y":"3"},"width":"4","height":"5","color":"blue","status":"invisible"}"#,
    r#"{"type":"circle","center":{"x":"10","y":"12"},"radius":"four","color":"red","status":"visible"}"#,
    r#"{"type":"triangle"}"#,
];

fn decode(text: &str) -> DecodeResult<schema::Shape> {
    let value = Value::from_json_str(text)?;
    schema::shape().run(&value)
}

fn main() {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    let documents: Vec<(String, String)> = if paths.is_empty() {
        SAMPLES
            .iter()
            .enumerate()
            .map(|(i, text)| (format!("sample {}", i + 1), (*text).to_string()))
            .collect()
    } else {
        let mut documents = Vec::new();
        for path in paths {
            match fs::read_to_string(&path) {
                Ok(text) => documents.push((path, text)),
                Err(e) => eprintln!("Failed to read {path}: {e}"),
            }
        }
        documents
    };

    for (name, text) in documents {
        match decode(&text) {
            Ok(shape) => println!("{name}: {shape:?}"),
            Err(e) => eprintln!("{name}: {:?}", Report::new(e)),
        }
    }
}
