use clap::Parser;
use std::path::PathBuf;

use crate::bytes::ByteCount;
use crate::constants::{
    DEFAULT_CHUNK_SIZE, DEFAULT_FILE_COUNT, DEFAULT_FILE_SIZE, DEFAULT_OUTPUT_DIR,
};
use crate::error::{Error, Result};
use crate::writer::{FileCreator, RandomFileCreator};

const LONG_ABOUT: &str = "\
Rapidly create files containing random data, for disk I/O and network
transfer speed testing. Files are written chunk by chunk so only one chunk
must fit into memory; raise --chunk-size for more throughput.

Sizes accept decimal units (KB, MB, GB, TB, PB) and binary units (KiB, MiB,
GiB, TiB, PiB), or plain bytes with a trailing B.

Examples:
    1000 files, 1 MiB each:  randfill -n 1000 -f 1MiB
    1 file, 10 GiB:          randfill -f 10GiB";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = LONG_ABOUT)]
pub struct Args {
    /// Number of bytes written per chunk
    #[arg(
        short = 'c',
        long = "chunk-size",
        value_name = "SIZE",
        default_value_t = ByteCount::new(DEFAULT_CHUNK_SIZE)
    )]
    pub chunk_size: ByteCount,

    /// Number of bytes written to each file
    #[arg(
        short = 'f',
        long = "file-size",
        value_name = "SIZE",
        default_value_t = ByteCount::new(DEFAULT_FILE_SIZE)
    )]
    pub file_size: ByteCount,

    /// Number of files to create
    #[arg(short = 'n', long = "count", value_name = "N", default_value_t = DEFAULT_FILE_COUNT)]
    pub count: u64,

    /// Directory to create the files in
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,
}

pub fn run(args: Args) -> Result<()> {
    log::debug!(
        "run count={} file_size={} chunk_size={} output={}",
        args.count,
        args.file_size.bytes(),
        args.chunk_size.bytes(),
        args.output.display()
    );

    if args.count == 0 {
        return Ok(());
    }
    ensure_positive("--chunk-size", args.chunk_size)?;
    ensure_positive("--file-size", args.file_size)?;

    let creator = RandomFileCreator::new(args.chunk_size.bytes());
    let paths = creator.create_files(args.count, args.file_size.bytes(), &args.output)?;

    println!(
        "Created {} file(s) of {} in '{}'",
        paths.len(),
        args.file_size,
        args.output.display()
    );
    Ok(())
}

fn ensure_positive(option: &str, size: ByteCount) -> Result<()> {
    if size.bytes() == 0 {
        return Err(Error::InvalidArgument {
            reason: format!("{option} must be positive"),
        });
    }
    Ok(())
}
