use snafu::Snafu;
use std::path::PathBuf;

use crate::bytes::unit::UnitSystem;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display(
        "'{input}' is not a valid size: expected <number><unit>B, like 256B, 1.5MB, or 10GiB. \
         Decimal units are K, M, G, T, P; binary units are Ki, Mi, Gi, Ti, Pi"
    ))]
    InvalidFormat { input: String },

    #[snafu(display("Size '{input}' must not be negative"))]
    NegativeMantissa { input: String },

    #[snafu(display("Size '{input}' does not fit in 64 bits"))]
    SizeOverflow { input: String },

    #[snafu(display("No unit matching {lookup} in the {system} table"))]
    UnknownUnit { lookup: String, system: UnitSystem },

    #[snafu(display("Invalid argument: {reason}"))]
    InvalidArgument { reason: String },

    #[snafu(display("Failed to create output directory '{}': {source}", path.display()))]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to write '{}': {source}", path.display()))]
    WriteFileFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}
