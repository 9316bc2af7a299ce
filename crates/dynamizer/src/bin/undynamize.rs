//! `undynamize`: decode wire JSON (stdin) to native JSON (stdout).
//!
//! Usage:
//!   undynamize [--lossy] [--item]

use dynamizer::cli::{init_tracing, undynamize, CliOptions};
use std::io::{self, Read, Write};

fn main() {
    init_tracing();

    let options = match CliOptions::parse(std::env::args()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: undynamize [--lossy] [--item]");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match undynamize(buf.trim(), options) {
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
