//! Printing behind a trait so the workflow and failure report can be
//! captured in tests.

use serde_json::Value;

pub trait Output {
    /// Print a report line to stdout
    fn print(&self, msg: &str);

    /// Print a diagnostic to stderr
    fn error(&self, msg: &str);

    /// Print JSON on a single line
    fn print_json(&self, data: &Value) {
        self.print(&data.to_string())
    }

    /// Print JSON expanded over as many lines as it nests
    fn print_json_pretty(&self, data: &Value) {
        match serde_json::to_string_pretty(data) {
            Ok(pretty) => self.print(&pretty),
            Err(_) => self.print_json(data),
        }
    }
}

pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn print(&self, msg: &str) {
        println!("{}", msg);
    }

    fn error(&self, msg: &str) {
        eprintln!("{}", msg);
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Captures everything printed
    #[derive(Default)]
    pub struct MockOutput {
        messages: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }

        pub fn errors(&self) -> Vec<String> {
            self.errors.lock().unwrap().clone()
        }
    }

    impl Output for MockOutput {
        fn print(&self, msg: &str) {
            self.messages.lock().unwrap().push(msg.to_string());
        }

        fn error(&self, msg: &str) {
            self.errors.lock().unwrap().push(msg.to_string());
        }
    }
}
