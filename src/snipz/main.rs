//! The `snipz` binary. All behavior lives in the library and in `cli/`; this file
//! only runs the CLI and turns an error into a message and exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
