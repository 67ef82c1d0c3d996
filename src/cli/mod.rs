//! CLI module.
//!
//! Parses arguments into a [`CliCommand`]; `main` executes it.
//!
//! ```ignore
//! use convo_header::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::Version => println!("{}", version_string()),
//!     // ...
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, usage, CliCommand, DEFAULT_WIDTH};
pub use version::{version_string, VERSION};
