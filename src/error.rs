use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("A commit message must be provided.")]
    MissingArgument,

    #[error(transparent)]
    Subprocess(#[from] SubprocessFailure),
}

/// The publish script could not be run to a successful exit.
#[derive(Debug, thiserror::Error)]
pub enum SubprocessFailure {
    #[error("failed to launch {}", .program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} exited with status {code}{}", .program.display(), ChildStderr(.stderr))]
    Exited {
        program: PathBuf,
        code: i32,
        stderr: String,
    },

    #[error("{} was terminated by signal {signal}{}", .program.display(), ChildStderr(.stderr))]
    Signaled {
        program: PathBuf,
        signal: i32,
        stderr: String,
    },
}

/// Appends the child's stderr to a failure line, if it wrote anything.
struct ChildStderr<'a>(&'a str);

impl fmt::Display for ChildStderr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.trim() {
            "" => Ok(()),
            stderr => write!(f, ": {stderr}"),
        }
    }
}
