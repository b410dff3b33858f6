//! Output helpers shared by the commands

use crate::{OutputFormat, GLOBAL_OPTS};
use colored::*;
use serde::Serialize;
use std::io;

/// Whether the global options ask for structured (JSON/CSV) output.
pub fn structured() -> Option<OutputFormat> {
    let opts = GLOBAL_OPTS.get().expect("Global options not initialized");
    match opts.output {
        OutputFormat::Json | OutputFormat::Csv => Some(opts.output),
        OutputFormat::Text => None,
    }
}

/// Print serializable data in the requested structured format
pub fn print_structured<T: Serialize>(data: &T) -> Result<(), io::Error> {
    let opts = GLOBAL_OPTS.get().expect("Global options not initialized");

    if opts.quiet {
        return Ok(());
    }

    match opts.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
            Ok(())
        }
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Text => Ok(()), // Text output is handled by individual commands
    }
}

/// Print CSV output: one header row from the first object's keys, one line
/// per array element. A bare object prints as a one-row table.
fn print_csv<T: Serialize>(data: &T) -> Result<(), io::Error> {
    let mut json_value = serde_json::to_value(data)?;
    if json_value.is_object() {
        json_value = serde_json::Value::Array(vec![json_value]);
    }

    if let serde_json::Value::Array(arr) = json_value {
        if let Some(serde_json::Value::Object(obj)) = arr.first() {
            println!("{}", obj.keys().cloned().collect::<Vec<_>>().join(","));
        }
        for item in arr {
            if let serde_json::Value::Object(obj) = item {
                let values: Vec<String> = obj
                    .values()
                    .map(|v| match v {
                        serde_json::Value::String(s) => s.clone(),
                        _ => v.to_string(),
                    })
                    .collect();
                println!("{}", values.join(","));
            }
        }
    }

    Ok(())
}

/// Print an aligned `label: value` statistics line, bold label under color
pub fn stat_line(label: &str, value: String) {
    if use_color() {
        println!("{:<28} {}", format!("{}:", label).bold(), value.cyan());
    } else {
        println!("{:<28} {}", format!("{}:", label), value);
    }
}

/// Print a section heading
pub fn heading(text: &str) {
    if use_color() {
        println!("{}", text.bold().underline());
    } else {
        println!("{}", text);
    }
}

/// Print verbose message (only if verbose mode is on)
pub fn verbose_println(level: u8, message: &str) {
    let opts = GLOBAL_OPTS.get().expect("Global options not initialized");

    if !opts.quiet && opts.verbose >= level {
        eprintln!("{} {}", "[VERBOSE]".dimmed(), message);
    }
}

/// Check if we should use color
pub fn use_color() -> bool {
    let opts = GLOBAL_OPTS.get().expect("Global options not initialized");
    !opts.no_color && opts.output == OutputFormat::Text
}
