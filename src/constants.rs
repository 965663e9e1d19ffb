// Default knobs for file creation
pub const DEFAULT_CHUNK_SIZE: u64 = 256 * 1024 * 1024; // 256 MiB
pub const DEFAULT_FILE_SIZE: u64 = 1024 * 1024; // 1 MiB
pub const DEFAULT_FILE_COUNT: u64 = 1;
pub const DEFAULT_OUTPUT_DIR: &str = "./out";
