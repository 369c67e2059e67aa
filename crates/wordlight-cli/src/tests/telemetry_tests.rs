//! Log subscriber construction.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::{debug, info};
use wordlight_config::{Config, LogFormat};

use crate::telemetry::{TelemetryError, build_subscriber};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().expect("capture lock").clone()).expect("utf8 logs")
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn emit(config: &Config) -> String {
    let captured = Captured::default();
    let sink = captured.clone();
    let subscriber = build_subscriber(config, move || sink.clone(), false).expect("subscriber");
    tracing::subscriber::with_default(subscriber, || {
        info!(target: "wordlight::session", words = 3, "wordbook loaded");
        debug!(target: "wordlight::engine", "rescan complete");
    });
    captured.text()
}

#[test]
fn json_records_are_flattened_and_filtered() {
    let config = Config {
        log_format: LogFormat::Json,
        ..Config::default()
    };
    let output = emit(&config);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1, "debug record should be filtered: {output}");

    let record: serde_json::Value =
        serde_json::from_str(lines.first().expect("one record")).expect("json record");
    assert_eq!(record["message"], "wordbook loaded");
    assert_eq!(record["words"], 3);
    assert_eq!(record["target"], "wordlight::session");
    assert_eq!(record["level"], "INFO");
}

#[test]
fn compact_records_honour_the_filter() {
    let config = Config {
        log_filter: "wordlight::engine=debug".to_owned(),
        ..Config::default()
    };
    let output = emit(&config);
    assert!(output.contains("rescan complete"), "{output}");
    assert!(!output.contains("wordbook loaded"), "{output}");
    assert!(!output.contains('\u{1b}'), "ansi disabled: {output}");
}

#[test]
fn malformed_filter_is_rejected() {
    let filter = "wordlight=loudest";
    let config = Config {
        log_filter: filter.to_owned(),
        ..Config::default()
    };
    let result = build_subscriber(&config, io::sink, false);
    assert!(matches!(
        result,
        Err(TelemetryError::Filter { filter: ref rejected, .. }) if rejected == filter
    ));
}
