use crate::*;
use assert_cmd::prelude::*;
use libtest_mimic::{Failed, Trial};
use predicates::prelude::*;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend([
        trial(
            "create::writes_a_single_file_of_the_requested_size",
            writes_a_single_file_of_the_requested_size,
        ),
        trial("create::writes_many_files", writes_many_files),
        trial(
            "create::partial_final_chunk_reaches_the_exact_size",
            partial_final_chunk_reaches_the_exact_size,
        ),
        trial(
            "create::chunk_larger_than_file_is_fine",
            chunk_larger_than_file_is_fine,
        ),
        trial("create::zero_count_is_a_noop", zero_count_is_a_noop),
    ]);
}

fn writes_a_single_file_of_the_requested_size() -> Result<(), Failed> {
    let scratch = ScratchDir::new();

    randfill_cmd()
        .args(["-n", "1", "-f", "4KiB", "-c", "1KiB"])
        .arg("-o")
        .arg(&scratch.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 1 file(s) of 4KiB"));

    assert_eq!(scratch.file_sizes(), vec![4096]);
    Ok(())
}

fn writes_many_files() -> Result<(), Failed> {
    let scratch = ScratchDir::new();

    randfill_cmd()
        .args(["-n", "3", "-f", "512B"])
        .arg("-o")
        .arg(&scratch.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 3 file(s)"));

    assert_eq!(scratch.file_sizes(), vec![512, 512, 512]);
    Ok(())
}

fn partial_final_chunk_reaches_the_exact_size() -> Result<(), Failed> {
    let scratch = ScratchDir::new();

    randfill_cmd()
        .args(["-f", "2500B", "-c", "1KiB"])
        .arg("-o")
        .arg(&scratch.path)
        .assert()
        .success();

    assert_eq!(scratch.file_sizes(), vec![2500]);
    Ok(())
}

fn chunk_larger_than_file_is_fine() -> Result<(), Failed> {
    let scratch = ScratchDir::new();

    randfill_cmd()
        .args(["-f", "100B", "-c", "1MiB"])
        .arg("-o")
        .arg(&scratch.path)
        .assert()
        .success();

    assert_eq!(scratch.file_sizes(), vec![100]);
    Ok(())
}

fn zero_count_is_a_noop() -> Result<(), Failed> {
    let scratch = ScratchDir::new();

    randfill_cmd()
        .args(["-n", "0"])
        .arg("-o")
        .arg(&scratch.path)
        .assert()
        .success();

    assert!(!scratch.path.exists(), "no output directory for -n 0");
    Ok(())
}
