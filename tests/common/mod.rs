//! Golden-output check for demo line rendering

use std::fs;
use std::path::PathBuf;

/// Set to rewrite golden files from the current output.
const BLESS_VAR: &str = "PATTERNS_BLESS";

fn golden_path(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "snapshots", name]
        .iter()
        .collect()
}

/// Compare demo `lines` against the golden file `name`, one line per entry.
///
/// Reports the first differing line instead of dumping both texts.
pub fn assert_lines_match(name: &str, lines: &[String]) {
    let path = golden_path(name);
    if std::env::var_os(BLESS_VAR).is_some() {
        let mut rendered = lines.join("\n");
        rendered.push('\n');
        fs::write(&path, rendered).expect("write golden file");
        return;
    }

    let golden = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("golden file {} unreadable: {}", path.display(), err));
    let expected: Vec<&str> = golden.lines().collect();

    for (idx, (want, got)) in expected.iter().zip(lines).enumerate() {
        assert_eq!(
            *want,
            got.as_str(),
            "{}: line {} differs (rerun with {}=1 to update)",
            name,
            idx + 1,
            BLESS_VAR
        );
    }
    assert_eq!(
        expected.len(),
        lines.len(),
        "{}: expected {} lines, got {}",
        name,
        expected.len(),
        lines.len()
    );
}
