//! `dynamize`: encode native JSON (stdin) to wire JSON (stdout).
//!
//! Usage:
//!   dynamize [--lossy] [--item]

use dynamizer::cli::{dynamize, init_tracing, CliOptions};
use std::io::{self, Read, Write};

fn main() {
    init_tracing();

    let options = match CliOptions::parse(std::env::args()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: dynamize [--lossy] [--item]");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match dynamize(buf.trim(), options) {
        Ok(json) => {
            if let Err(e) = writeln!(io::stdout(), "{json}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
