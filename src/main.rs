use std::process;

mod command;
mod common;
mod config;
mod cygpath;
mod run;
mod signal;

use common::{Error, IntoResult};
use run::execute;

fn main() {
    signal::setup_signal_handler();

    let result = execute().into_result();
    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(Error::Code(code)) => {
            process::exit(code);
        }
        Err(Error::Message(msg)) => {
            eprintln!("cygassoc: {}", msg);
            process::exit(1);
        }
    }
}
