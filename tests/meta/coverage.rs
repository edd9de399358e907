//! Checks that every source file has a mirrored unit test file and vice versa

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Crate roots and module files hold no logic of their own
    fn is_structural(relative: &str) -> bool {
        let file_name = Path::new(relative)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        matches!(file_name, "main.rs" | "lib.rs" | "mod.rs")
    }

    fn relative_paths(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_stripped| io::Error::other("Failed to strip prefix"))?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.insert(relative);
                relative_paths(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn collect(dir: &str) -> BTreeSet<String> {
        let base = Path::new(dir);
        let mut paths = BTreeSet::new();
        if let Err(error) = relative_paths(base, base, &mut paths) {
            assert!(!base.exists(), "Failed to scan {dir}: {error}");
        }
        paths
    }

    // Verified by deleting tests/unit/corpus/sampler.rs
    #[test]
    fn test_every_source_file_has_unit_tests() {
        let tests = collect(UNIT_DIR);

        let missing: Vec<String> = collect(SRC_DIR)
            .into_iter()
            .filter(|path| !is_structural(path) && !tests.contains(path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_source() {
        let sources = collect(SRC_DIR);

        let orphaned: Vec<String> = collect(UNIT_DIR)
            .into_iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(path))
            .map(|path| format!("  - {UNIT_DIR}/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source counterpart:\n{}",
            orphaned.join("\n")
        );
    }

    // Verified by adding an empty file under tests/unit/spatial
    #[test]
    fn test_every_test_file_contains_tests() {
        let mut empty = Vec::new();

        for relative in collect("tests") {
            let path = Path::new("tests").join(&relative);
            if path.is_dir() || is_structural(&relative) {
                continue;
            }
            match fs::read_to_string(&path) {
                Ok(content) if content.contains("#[test]") => {}
                Ok(_) => empty.push(format!("  - {}", path.display())),
                Err(error) => empty.push(format!("  - {} ({error})", path.display())),
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
