use std::fmt;

use anyhow::{bail, Result};

use crate::common::BUFFER_SIZE;
use crate::config::Config;

/// A console invocation, kept as discrete arguments for spawning and
/// renderable as the single command line it stands for.
pub struct ComposedCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for ComposedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        if let Some((payload, options)) = self.args.split_last() {
            for option in options {
                write!(f, " {}", option)?;
            }
            // The payload is what the shell evaluates; it renders inside
            // single quotes, unescaped.
            write!(f, " '{}'", payload)?;
        }
        Ok(())
    }
}

/// Build the console command: the console program runs the shell, and the
/// shell evaluates a payload naming the target program, with the translated
/// file path appended when one was given.
pub fn compose(config: &Config, path: Option<&str>) -> Result<ComposedCommand> {
    let mut payload = join(&config.target, &config.target_options);
    if let Some(path) = path {
        payload = join(&payload, path);
    }

    let command = ComposedCommand {
        program: config.console.clone(),
        args: vec![
            config.console_options.clone(),
            config.shell.clone(),
            config.shell_options.clone(),
            payload,
        ],
    };

    let length = command.to_string().len();
    if length > BUFFER_SIZE {
        bail!("command line is {} bytes, the limit is {}", length, BUFFER_SIZE);
    }

    Ok(command)
}

fn join(left: &str, right: &str) -> String {
    if right.is_empty() {
        left.to_owned()
    } else if left.is_empty() {
        right.to_owned()
    } else {
        format!("{} {}", left, right)
    }
}
