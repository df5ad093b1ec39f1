//! Interactive roster manager entry point.
//!
//! # Responsibility
//! - Bootstrap session logging and hand stdin/stdout to the command loop.
//! - Keep the session usable even when logging cannot start.

mod repl;

use classroster_core::{core_version, default_log_level, init_logging};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let log_dir = std::env::temp_dir().join("classroster").join("logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        // Logging is best-effort; the roster session itself must still run.
        eprintln!("classroster {}: logging disabled: {err}", core_version());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = repl::run(stdin.lock(), io::BufWriter::new(stdout.lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(io::stderr(), "classroster: terminal I/O failed: {err}");
            ExitCode::FAILURE
        }
    }
}
