#[macro_use]
extern crate colorify;
extern crate rustyline;
extern crate synacor_vm;

mod cli;
mod readline_source;

use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    match cli::run(&args[1..]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            printlnc!(red: "{}", message);
            ExitCode::FAILURE
        }
    }
}
