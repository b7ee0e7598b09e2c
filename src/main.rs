//! tpt - CLI entry point

use std::io;
use std::process::ExitCode;

use anyhow::Result;

use tpt::{branding, Config, Dispatcher, Tput};

fn main() -> ExitCode {
    match run() {
        Ok(status) => ExitCode::from(status.clamp(0, 255) as u8),
        Err(err) => {
            eprintln!("{}: {:#}", branding::PROGRAM, err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<i32> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::load()?;
    let dispatcher = Dispatcher::new(Tput::new(config.delegate_program()));

    let mut stdout = io::stdout().lock();
    dispatcher.dispatch(&args, &mut stdout)
}
