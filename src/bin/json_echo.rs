//! Debug helper: parse and pretty-print a JSON string given on the command
//! line. A parse failure is reported but never fatal; the raw argument is
//! echoed back so malformed payloads can still be inspected.

#![allow(clippy::exit)]

use std::env;

fn main() {
    let Some(arg) = env::args().nth(1) else {
        eprintln!("Usage: json_echo <json-string>");
        std::process::exit(1);
    };

    match serde_json::from_str::<serde_json::Value>(&arg) {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => println!("{pretty}"),
            Err(e) => eprintln!("JSON re-serialization error: {e}"),
        },
        Err(e) => {
            eprintln!("JSON parse error: {e}");
            println!("{arg}");
        }
    }
}
