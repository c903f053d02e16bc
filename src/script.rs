use crate::error::SubprocessFailure;
use crate::message::CommitMessage;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

pub const DEFAULT_SCRIPT: &str = "./publish";

/// Output captured from a publish run that exited successfully.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Published {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Something that performs the actual release for a commit message.
pub trait Publisher {
    fn publish(&mut self, message: &CommitMessage) -> Result<Published, SubprocessFailure>;
}

impl<P: Publisher + ?Sized> Publisher for &mut P {
    fn publish(&mut self, message: &CommitMessage) -> Result<Published, SubprocessFailure> {
        (**self).publish(message)
    }
}

/// An external executable invoked as `<program> <message>`.
#[derive(Debug, Clone)]
pub struct Script {
    program: PathBuf,
}

impl Script {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPT)
    }
}

impl Publisher for Script {
    fn publish(&mut self, message: &CommitMessage) -> Result<Published, SubprocessFailure> {
        tracing::info!(program = %self.program.display(), "running publish script");

        // the message is a single argv entry; no shell ever sees it
        let output = Command::new(&self.program)
            .arg(message)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| SubprocessFailure::Launch {
                program: self.program.clone(),
                source,
            })?;

        tracing::debug!(
            status = %output.status,
            stdout_len = output.stdout.len(),
            stderr_len = output.stderr.len(),
            "publish script finished"
        );

        if output.status.success() {
            return Ok(Published {
                stdout: output.stdout,
                stderr: output.stderr,
            });
        }

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        Err(failure(self.program.clone(), output.status, stderr))
    }
}

fn failure(program: PathBuf, status: ExitStatus, stderr: String) -> SubprocessFailure {
    if let Some(code) = status.code() {
        return SubprocessFailure::Exited {
            program,
            code,
            stderr,
        };
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return SubprocessFailure::Signaled {
                program,
                signal,
                stderr,
            };
        }
    }

    // no exit code and no signal; report it as a generic failure
    SubprocessFailure::Exited {
        program,
        code: -1,
        stderr,
    }
}
