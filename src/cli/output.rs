use console::style;
use serde::Serialize;

use crate::infrastructure::logging::SecretScrubber;

/// Trait for command output that can be rendered as human-readable or JSON.
pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Full error chain with credential values scrubbed out.
///
/// Load failures can echo the offending value back, so this runs on every
/// error shown to the user.
pub fn error_message(err: &anyhow::Error) -> String {
    SecretScrubber::new().scrub_message(&format!("{err:#}"))
}

/// Print a failed command, scrubbed of any credential values.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) {
    let message = error_message(err);
    if json_mode {
        let body = serde_json::json!({ "success": false, "error": message });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("{} {}", style("Error:").red().bold(), message);
    }
}

/// Render a pass/fail marker for human output.
pub fn status_mark(ok: bool) -> String {
    if ok {
        style("\u{2713}").green().bold().to_string()
    } else {
        style("\u{2717}").red().bold().to_string()
    }
}
