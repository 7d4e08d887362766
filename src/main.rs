//! Entry point for the CLI tool.
//!
//! All real logic lives in the library so it stays testable; this binary
//! only translates the outcome into an exit status. A handled failure is
//! printed with an `ERROR:` prefix and exits 1; a successful delegation
//! exits with whatever code act itself returned.

fn main() {
    match act_up::cli::run_cli() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("\nERROR: {e}\n");
            std::process::exit(1);
        }
    }
}
