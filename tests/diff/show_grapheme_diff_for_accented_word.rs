use crate::common::command::{run_worddiff, work_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_grapheme_diff_for_accented_word(
    work_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = work_dir;
    write_file(FileSpec::new(dir.path().join("old.txt"), "fiancé".to_string()));
    write_file(FileSpec::new(dir.path().join("new.txt"), "fiance".to_string()));

    let assert = run_worddiff(dir.path(), &["old.txt", "new.txt", "--mode", "graphemes"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    // the struck-through é sits right before its replacement
    pretty_assertions::assert_eq!(stdout, "fiancée\n");

    Ok(())
}
