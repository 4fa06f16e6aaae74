use crate::common::command::{old_text, run_worddiff, work_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_unchanged_text_for_identical_files(
    work_dir: TempDir,
    old_text: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = work_dir;
    write_file(FileSpec::new(dir.path().join("old.txt"), old_text.clone()));
    write_file(FileSpec::new(dir.path().join("new.txt"), old_text));

    let assert = run_worddiff(dir.path(), &["old.txt", "new.txt"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    // every word is common, so the stream is just the text itself
    pretty_assertions::assert_eq!(stdout, "the quick brown fox jumps over the lazy dog\n");

    Ok(())
}
