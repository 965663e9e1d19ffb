// Chunked creation of files full of random bytes
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rand::RngCore;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Trait for writing out batches of random-data files.
pub trait FileCreator {
    /// Create `count` files of `file_size` bytes each under `output_dir`,
    /// creating the directory first if needed. Returns the paths written.
    fn create_files(&self, count: u64, file_size: u64, output_dir: &Path) -> Result<Vec<PathBuf>>;
}

/// [`FileCreator`] backed by the thread-local RNG.
///
/// Files are written one chunk at a time and the chunk buffer is reused
/// across files, so at most one chunk is ever held in memory. The data is
/// throughput-testing filler, not cryptographic material.
pub struct RandomFileCreator {
    chunk_size: u64,
}

impl RandomFileCreator {
    pub fn new(chunk_size: u64) -> Self {
        Self { chunk_size }
    }

    fn fill_file(
        &self,
        file: &mut File,
        file_size: u64,
        buf: &mut [u8],
        rng: &mut dyn RngCore,
    ) -> io::Result<()> {
        let mut remaining = file_size;
        while remaining > 0 {
            let take = remaining.min(buf.len() as u64) as usize;
            rng.fill_bytes(&mut buf[..take]);
            file.write_all(&buf[..take])?;
            remaining -= take as u64;
        }
        file.flush()
    }
}

impl FileCreator for RandomFileCreator {
    fn create_files(&self, count: u64, file_size: u64, output_dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(output_dir).map_err(|source| Error::CreateDirectoryFailed {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let mut rng = rand::rng();
        let buf_len = self.chunk_size.min(file_size).max(1) as usize;
        let mut buf = vec![0u8; buf_len];

        let mut paths = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let path = output_dir.join(Uuid::new_v4().to_string());
            log::debug!(
                "create file path={} file_size={} chunk_size={}",
                path.display(),
                file_size,
                self.chunk_size
            );

            let mut file = File::create(&path).map_err(|source| Error::WriteFileFailed {
                path: path.clone(),
                source,
            })?;
            self.fill_file(&mut file, file_size, &mut buf, &mut rng)
                .map_err(|source| Error::WriteFileFailed {
                    path: path.clone(),
                    source,
                })?;
            paths.push(path);
        }

        Ok(paths)
    }
}
