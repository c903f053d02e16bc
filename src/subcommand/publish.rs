use crate::error::Error;
use crate::message::CommitMessage;
use crate::script::Publisher;
use eyre::{Context, Result};
use std::io::Write;

pub fn run(
    message: Option<String>,
    publisher: &mut dyn Publisher,
    stdout: &mut dyn Write,
) -> Result<()> {
    let message = CommitMessage::new(message.unwrap_or_default())?;
    tracing::debug!(len = message.as_str().len(), "commit message accepted");

    let published = publisher.publish(&message).map_err(Error::from)?;

    stdout
        .write_all(&published.stdout)
        .context("write publish output to stdout")?;
    stdout.flush().context("flush stdout")?;

    Ok(())
}
