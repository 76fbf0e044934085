//! Output formatting for CLI responses

use anyhow::Error;
use colored::Colorize;
use serde::Serialize;
use serde_json::json;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print success message
pub fn print_success(message: &str, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "message": message
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Failed to format success message as JSON: {e}"),
        }
    } else {
        println!("{} {}", "✓".green(), message);
    }
}

/// Print `{"success": true, <key>: <value>}` as pretty JSON.
pub fn print_json<T: Serialize>(key: &str, value: &T) -> anyhow::Result<()> {
    let mut output = serde_json::Map::new();
    output.insert("success".to_string(), json!(true));
    output.insert(key.to_string(), serde_json::to_value(value)?);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
