//! entities-status: one status line per entity in a monitoring namespace.
//!
//! # Usage
//!
//! ```text
//! entities-status --sensu-api-url https://sensu:8080 --namespace default
//! entities-status -n prod --sensu-format yaml --filter "labelSelector=region == eu"
//! ```

use std::io;
use std::process;

use estatus_cli::{exit_code, parse_args, run, Command, USAGE};
use estatus_core::constants::{EXIT_CRITICAL, VERSION};
use estatus_core::errors::ErrorCode;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let arg_refs: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();

    let run_args = match parse_args(&arg_refs) {
        Ok(Command::Run(run_args)) => run_args,
        Ok(Command::Help) => {
            print!("{USAGE}");
            return;
        }
        Ok(Command::Version) => {
            println!("entities-status {VERSION}");
            return;
        }
        Err(e) => {
            eprintln!("entities-status: {e}\n\n{USAGE}");
            process::exit(EXIT_CRITICAL);
        }
    };

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("entities-status: cannot resolve working directory: {e}");
            process::exit(EXIT_CRITICAL);
        }
    };

    let stdout = io::stdout();
    let result = run(&run_args, &working_dir, &mut stdout.lock());
    if let Err(ref e) = result {
        tracing::error!(stage = %e.stage(), code = e.error_code(), "run failed");
        eprintln!("entities-status: {}", e.report_string());
    }
    process::exit(exit_code(&result));
}
