use std::process::ExitStatus;

/// Common size of the fixed string buffers used by the path translator and
/// the command composer.
pub const BUFFER_SIZE: usize = 512;

pub enum Error {
    Message(String),
    Code(i32),
}

pub trait IntoResult<T> {
    fn into_result(self) -> Result<T, Error>;
}

impl IntoResult<()> for anyhow::Result<ExitStatus> {
    fn into_result(self) -> Result<(), Error> {
        match self {
            Ok(status) => {
                if status.success() {
                    Ok(())
                } else {
                    let code = status.code().unwrap_or(1);
                    Err(Error::Code(code))
                }
            }
            Err(err) => Err(Error::Message(format!("{:#}", err))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    mod status {
        use super::*;
        use std::os::unix::process::ExitStatusExt;

        fn status(raw: i32) -> anyhow::Result<ExitStatus> {
            Ok(ExitStatus::from_raw(raw))
        }

        #[test]
        fn success_becomes_ok() {
            assert!(status(0).into_result().is_ok());
        }

        #[test]
        fn child_exit_code_is_kept() {
            // Raw wait status: exit code in the high byte.
            match status(42 << 8).into_result() {
                Err(Error::Code(code)) => assert_eq!(code, 42),
                _ => panic!("expected the child's exit code"),
            }
        }
    }

    #[test]
    fn failure_becomes_a_message() {
        let result: anyhow::Result<ExitStatus> = Err(anyhow::anyhow!("no console"));
        match result.into_result() {
            Err(Error::Message(msg)) => assert!(msg.contains("no console")),
            _ => panic!("expected a message"),
        }
    }
}
