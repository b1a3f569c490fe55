//! `avl-demo`: print an AVL rotation walkthrough.
//!
//! Usage:
//!   avl-demo [--list] [--format text|json] [--json] <scenario>
//!
//! Set `RUST_LOG=trace` to trace rotations.

use avl_demo::cli::{parse_args, run};
use std::io::{self, Write};

fn main() {
    env_logger::init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match run(&options) {
        Ok(output) => {
            if let Err(e) = writeln!(io::stdout(), "{output}") {
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
