use crate::common::command::{run_worddiff, seeded_work_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_line_diff_for_rewritten_lines(
    seeded_work_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = seeded_work_dir;

    let assert = run_worddiff(dir.path(), &["old.txt", "new.txt", "--mode", "lines"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    // neither line survives unchanged, so the script is all deletes
    // followed by all inserts
    let expected = "\
the quick brown fox
jumps over the lazy dog
the quick red fox
leaps over the lazy dog
";
    pretty_assertions::assert_eq!(stdout, expected);

    Ok(())
}
