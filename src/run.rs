use std::{
    env,
    process::{Command, ExitStatus},
};

use anyhow::{Context, Result};

use crate::command::{self, ComposedCommand};
use crate::config::CONFIG;
use crate::cygpath::{self, Mode};
use crate::signal;

/// Run the association pipeline: translate the file argument if one was
/// given, compose the console command, and launch it.
pub fn execute() -> Result<ExitStatus> {
    let config = &*CONFIG;

    let command = match env::args_os().nth(1) {
        Some(source) => {
            let path = cygpath::translate(&config.cygpath, &source, Mode::Unix)?;
            command::compose(config, Some(&path))?
        }
        None => command::compose(config, None)?,
    };

    launch(&command)
}

/// Spawn the console process and wait for it to finish.  The console owns
/// the session from the moment it exists; Ctrl+C is its to handle.
fn launch(command: &ComposedCommand) -> Result<ExitStatus> {
    let mut child = Command::new(&command.program)
        .args(&command.args)
        .spawn()
        .with_context(|| format!("failed to start {}", command.program))?;

    signal::pass_control_to_console();

    child.wait().context("failed waiting for the console")
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    fn sh(script: &str) -> ComposedCommand {
        ComposedCommand {
            program: "sh".to_owned(),
            args: vec!["-c".to_owned(), script.to_owned()],
        }
    }

    #[test]
    fn propagates_the_child_exit_code() {
        for code in [0, 1, 42] {
            let status = launch(&sh(&format!("exit {}", code))).unwrap();
            assert_eq!(status.code(), Some(code));
        }
    }

    #[test]
    fn spawn_failure_is_an_error() {
        let command = ComposedCommand {
            program: "/nonexistent/mintty".to_owned(),
            args: Vec::new(),
        };
        assert!(launch(&command).is_err());
    }
}
