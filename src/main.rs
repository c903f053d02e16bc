use eyre::Result;
use gulp_publish::{Console, Script};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    let default_level = "warn";
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|err| eyre::eyre!("install tracing subscriber: {err}"))?;

    let code = {
        let mut stdout = std::io::stdout().lock();
        let mut stderr = std::io::stderr().lock();
        let color = std::io::stderr().is_terminal();
        let mut console = Console {
            stdout: &mut stdout,
            stderr: &mut stderr,
            color,
        };

        gulp_publish::run(std::env::args_os(), |program| Script::new(program), &mut console)
    };

    std::process::exit(code)
}
