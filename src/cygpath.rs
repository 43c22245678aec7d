use std::{
    ffi::OsStr,
    fmt,
    io::{self, Read},
    process::{Command, Stdio},
};

use cfg_if::cfg_if;

use crate::common::BUFFER_SIZE;

/// Translation directions understood by cygpath.  The association pipeline
/// only ever converts toward the Cygwin side ([`Mode::Unix`]).
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Unix,
    Windows,
    Mixed,
    Dos,
}

impl Mode {
    pub fn flag(self) -> &'static str {
        match self {
            Mode::Unix => "-u",
            Mode::Windows => "-w",
            Mode::Mixed => "-m",
            Mode::Dos => "-d",
        }
    }
}

#[derive(Debug)]
pub enum TranslateError {
    /// The source path was empty; nothing was spawned.
    EmptyPath,
    Spawn(io::Error),
    Pipe,
    Read(io::Error),
    /// The helper exited without writing anything.
    NoOutput,
    /// The translated path did not fit the read buffer.
    Overflow { capacity: usize },
    /// The helper's output did not end in a single newline.
    MissingNewline,
    /// The helper's output was not valid UTF-8.
    Encoding,
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::EmptyPath => write!(f, "no path to translate"),
            TranslateError::Spawn(err) => write!(f, "could not start cygpath: {}", err),
            TranslateError::Pipe => write!(f, "cygpath stdout pipe was not set up"),
            TranslateError::Read(err) => write!(f, "could not read from cygpath: {}", err),
            TranslateError::NoOutput => write!(f, "cygpath produced no output"),
            TranslateError::Overflow { capacity } => {
                write!(f, "translated path does not fit in {} bytes", capacity)
            }
            TranslateError::MissingNewline => {
                write!(f, "cygpath output was not a newline-terminated line")
            }
            TranslateError::Encoding => write!(f, "cygpath output was not valid UTF-8"),
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslateError::Spawn(err) | TranslateError::Read(err) => Some(err),
            _ => None,
        }
    }
}

/// Translate `source` by running the cygpath helper and capturing its single
/// line of output.  Returns the translated path without the trailing newline.
pub fn translate(helper: &str, source: &OsStr, mode: Mode) -> Result<String, TranslateError> {
    translate_with_capacity(helper, source, mode, BUFFER_SIZE)
}

fn translate_with_capacity(
    helper: &str,
    source: &OsStr,
    mode: Mode,
    capacity: usize,
) -> Result<String, TranslateError> {
    if source.is_empty() {
        return Err(TranslateError::EmptyPath);
    }

    let mut child = helper_command(helper)
        .arg(mode.flag())
        .arg(source)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(TranslateError::Spawn)?;

    let mut stdout = match child.stdout.take() {
        Some(stdout) => stdout,
        None => {
            let _ = child.wait();
            return Err(TranslateError::Pipe);
        }
    };

    // cygpath writes one short line and exits, so a single read is enough.
    let mut buffer = vec![0u8; capacity];
    let read_result = stdout.read(&mut buffer);

    // Closing our end of the pipe lets the helper finish even if it had more
    // to say; reap it before looking at the result.
    drop(stdout);
    let _ = child.wait();

    let length = read_result.map_err(TranslateError::Read)?;
    if length == 0 {
        return Err(TranslateError::NoOutput);
    }
    if length == capacity {
        // The output may continue past what was read; none of it is usable.
        return Err(TranslateError::Overflow { capacity });
    }

    let line = buffer[..length]
        .strip_suffix(b"\n")
        .ok_or(TranslateError::MissingNewline)?;

    match std::str::from_utf8(line) {
        Ok(path) => Ok(path.to_owned()),
        Err(_) => Err(TranslateError::Encoding),
    }
}

cfg_if! {
    if #[cfg(windows)] {
        fn helper_command(program: &str) -> Command {
            use std::os::windows::process::CommandExt;

            // Keep the helper from flashing a console window of its own.
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;

            let mut command = Command::new(program);
            command.creation_flags(CREATE_NO_WINDOW);
            command
        }
    } else {
        fn helper_command(program: &str) -> Command {
            Command::new(program)
        }
    }
}
