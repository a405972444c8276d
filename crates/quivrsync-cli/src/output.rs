//! CLI output formatting
//!
//! Human output prints checkmark-prefixed status lines with indented
//! details. JSON output emits one event object per line (NDJSON) so
//! wrapper scripts can follow sync progress without parsing prose;
//! structured summaries still go through [`OutputFormatter::print_json`].

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    /// Returns true for JSON output.
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

/// Trait for formatting CLI output
pub trait OutputFormatter {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn info(&self, message: &str);
    /// Labelled line: result counters, per-field validation errors.
    fn detail(&self, label: &str, value: &str);
    fn print_json(&self, value: &serde_json::Value);
}

/// Builds one NDJSON event object.
fn event(kind: &str, message: &str) -> serde_json::Value {
    serde_json::json!({ "event": kind, "message": message })
}

/// Human-readable output formatter
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn success(&self, message: &str) {
        println!("\u{2713} {message}");
    }
    fn error(&self, message: &str) {
        eprintln!("\u{2717} {message}");
    }
    fn info(&self, message: &str) {
        println!("  {message}");
    }
    fn detail(&self, label: &str, value: &str) {
        println!("  {label:<18} {value}");
    }
    fn print_json(&self, _value: &serde_json::Value) {
        // Human formatter doesn't print JSON
    }
}

/// NDJSON output formatter
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn success(&self, message: &str) {
        println!("{}", event("success", message));
    }
    fn error(&self, message: &str) {
        eprintln!("{}", event("error", message));
    }
    fn info(&self, _message: &str) {
        // Progress prose is a human concern; JSON consumers get events
        // and the final summary only.
    }
    fn detail(&self, label: &str, value: &str) {
        println!(
            "{}",
            serde_json::json!({ "event": "detail", "field": label, "value": value })
        );
    }
    fn print_json(&self, value: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string_pretty(value).unwrap_or_default()
        );
    }
}

pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter)
    }
}
