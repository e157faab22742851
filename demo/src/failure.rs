//! Top-level failure report and process exit status

use crate::output::Output;
use serde_json::{Map, Value};
use unique_client::SdkError;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Report the outcome of a demo run and return its exit status
pub fn terminate<O: Output>(result: anyhow::Result<()>, out: &O) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            report_failure(&err, out);
            EXIT_FAILURE
        }
    }
}

pub fn report_failure<O: Output>(err: &anyhow::Error, out: &O) {
    match err.downcast_ref::<SdkError>() {
        Some(SdkError::Transport {
            url, body, message, ..
        }) => out.print_json(&transport_report(url, body, message)),
        Some(SdkError::Application {
            message,
            details: Some(details),
        }) => {
            out.print(message);
            out.print_json_pretty(details);
        }
        _ => out.error(&format!("{:?}", err)),
    }
}

/// Response body merged with the responding url. A request that never got a
/// response reports its transport message instead of a body.
pub fn transport_report(url: &str, body: &Value, message: &str) -> Value {
    let mut report = match body {
        Value::Object(map) => map.clone(),
        Value::Null => {
            let mut map = Map::new();
            map.insert("message".to_string(), Value::String(message.to_string()));
            map
        }
        other => {
            let mut map = Map::new();
            map.insert("body".to_string(), other.clone());
            map
        }
    };
    report.insert("url".to_string(), Value::String(url.to_string()));

    Value::Object(report)
}
