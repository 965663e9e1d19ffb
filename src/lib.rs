pub mod bytes;
pub mod cli;
pub mod constants;
pub mod error;
pub mod writer;
