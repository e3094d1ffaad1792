//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;
use std::sync::{Arc, Mutex};
use semquery::{parser, validate_query_parameters, QueryParameters, QueryParametersStrict};

/// Load a parameter fixture from the tests/test_data directory
pub fn load_fixture(name: &str) -> QueryParameters {
    let path = format!("tests/test_data/{}", name);
    parser::parse_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Run the full pipeline: fixture file → strict request
pub fn run_pipeline(name: &str) -> Result<QueryParametersStrict, String> {
    let params = load_fixture(name);
    validate_query_parameters(params).map_err(|e| format!("Validation failed: {}", e))
}

pub fn strings(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|v| v.to_string()).collect())
}

// =============================================================================
// Log capture
// =============================================================================

/// Captures tracing output for tests
pub struct TestTracing {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl TestTracing {
    pub fn new() -> Self {
        Self {
            buffer: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.buffer.clone();
        let make_writer = move || TestWriter(writer.clone());
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(make_writer)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn output(&self) -> String {
        let buf = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buf).to_string()
    }
}

struct TestWriter(Arc<Mutex<Vec<u8>>>);

impl Write for TestWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
