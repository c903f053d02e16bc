pub mod cli;
pub mod error;
pub mod message;
pub mod script;
pub mod subcommand;

pub use cli::{run, Console};
pub use error::{Error, SubprocessFailure};
pub use message::CommitMessage;
pub use script::{Published, Publisher, Script};
