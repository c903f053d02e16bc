use crate::script::{Publisher, DEFAULT_SCRIPT};
use crate::subcommand;
use ansi_term::Colour::Red;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about = "Hand a commit message to the publish script")]
struct App {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the publish script with a commit message
    Publish {
        /// Commit message passed to the script
        #[arg(
            short = 'm',
            long,
            num_args = 0..=1,
            default_missing_value = "",
            allow_hyphen_values = true
        )]
        message: Option<String>,

        /// Executable that performs the release
        #[arg(long, value_name = "PATH", default_value = DEFAULT_SCRIPT)]
        script: PathBuf,
    },
}

/// Where the task writes, and whether `ERROR` gets painted.
pub struct Console<'a> {
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
    pub color: bool,
}

impl Console<'_> {
    fn report(&mut self, details: impl std::fmt::Display) {
        let label = if self.color {
            Red.bold().paint("ERROR").to_string()
        } else {
            "ERROR".to_string()
        };

        // nothing left to report to if stderr itself is gone
        let _ = writeln!(self.stderr, "{label} {details}");
    }
}

/// Parses `args` (program name first), runs the requested task and returns the
/// process exit code. `publisher` builds the publisher for the configured script.
pub fn run<I, T, P>(
    args: I,
    publisher: impl FnOnce(&Path) -> P,
    console: &mut Console,
) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    P: Publisher,
{
    let app = match App::try_parse_from(args) {
        Ok(app) => app,
        Err(err) => {
            let rendered = err.render();
            if err.use_stderr() {
                let _ = write!(console.stderr, "{rendered}");
                return 1;
            }

            let _ = write!(console.stdout, "{rendered}");
            return 0;
        }
    };

    let result = match app.command {
        Command::Publish { message, script } => {
            let mut publisher = publisher(&script);
            subcommand::publish::run(message, &mut publisher, console.stdout)
        }
    };

    match result {
        Ok(()) => 0,
        Err(err) => {
            tracing::debug!(?err, "publish task failed");
            console.report(format_args!("{err:#}"));
            1
        }
    }
}
