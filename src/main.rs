//! # ZenResume CLI
//!
//! Usage:
//!   zenresume input.json -o resume.html
//!   echo '{ ... }' | zenresume -o resume.html
//!   zenresume --example > resume.json
//!
//! Acts as the host around the engine: reads a document snapshot, renders
//! the paginated preview, writes standalone HTML ready for the browser's
//! print pipeline. `--example` prints the starter template as JSON.

use std::env;
use std::fs;
use std::io::{self, Read};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--example") {
        let json = serde_json::to_string_pretty(&zenresume::template::starter())
            .expect("starter template always serializes");
        println!("{}", json);
        return;
    }

    // Read input
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        match fs::read_to_string(&args[1]) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("✗ Failed to read {}: {}", args[1], e);
                std::process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("✗ Failed to read stdin: {}", e);
            std::process::exit(1);
        }
        buf
    };

    // Parse output path
    let output_path = args
        .windows(2)
        .find(|w| w[0] == "-o")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| "resume.html".to_string());

    match zenresume::render_json(&input) {
        Ok(html) => {
            if let Err(e) = fs::write(&output_path, &html) {
                eprintln!("✗ Failed to write {}: {}", output_path, e);
                std::process::exit(1);
            }
            eprintln!("✓ Written {} bytes to {}", html.len(), output_path);
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}
