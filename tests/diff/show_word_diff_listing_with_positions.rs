use crate::common::command::{run_worddiff, seeded_work_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_word_diff_listing_with_positions(
    seeded_work_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = seeded_work_dir;

    let assert = run_worddiff(dir.path(), &["old.txt", "new.txt", "--format", "listing"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    let expected = "\
     1    1  the
     2    2  quick
-    3       brown
+         3  red
     4    4  fox
-    5       jumps
+         5  leaps
     6    6  over
     7    7  the
     8    8  lazy
     9    9  dog
";
    pretty_assertions::assert_eq!(stdout, expected);

    Ok(())
}
