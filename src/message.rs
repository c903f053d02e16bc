use crate::error::Error;
use std::ffi::OsStr;
use std::fmt;

/// The free-text message handed to the publish script.
///
/// Never empty. Everything else, including surrounding whitespace and embedded
/// quotes, is kept exactly as the caller typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    pub fn new(message: impl Into<String>) -> Result<Self, Error> {
        let message = message.into();
        if message.is_empty() {
            return Err(Error::MissingArgument);
        }

        Ok(Self(message))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<OsStr> for CommitMessage {
    fn as_ref(&self) -> &OsStr {
        OsStr::new(&self.0)
    }
}
