//! arg-probe: records the argv it receives.
//!
//! Writes every argument after the first, one per line, to the file named
//! by the first argument. Harness tests launch it to observe exactly what
//! a child process is handed.

use std::env;
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let Some((out_file, rest)) = args.split_first() else {
        eprintln!("arg-probe: missing output file argument");
        return ExitCode::FAILURE;
    };

    if let Err(e) = fs::write(out_file, rest.join("\n")) {
        eprintln!("arg-probe: cannot write {}: {}", out_file, e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
