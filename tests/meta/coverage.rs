#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    // Relative paths of every .rs file and directory below `base`
    fn relative_paths(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        walk(base, base, &mut paths)?;
        Ok(paths)
    }

    fn walk(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|e| io::Error::other(e.to_string()))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                walk(&path, base, paths)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn load(dir: &str) -> BTreeSet<String> {
        let path = Path::new(dir);
        relative_paths(path).unwrap_or_else(|error| {
            assert!(!path.exists(), "Failed to scan {dir}: {error}");
            BTreeSet::new()
        })
    }

    // Crate roots and module files only declare modules
    fn is_module_file(relative: &str) -> bool {
        relative == "lib.rs" || relative == "main.rs" || relative.ends_with("mod.rs")
    }

    // Tests every source file has a unit test file at the same relative path
    // Verified by deleting tests/unit/algorithm/seam.rs
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src = load(SRC_DIR);
        let unit = load(UNIT_DIR);

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !is_module_file(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives its source file
    // Verified by adding tests/unit/algorithm/stale.rs
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src = load(SRC_DIR);
        let unit = load(UNIT_DIR);

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !is_module_file(path) && !src.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without source files:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every test file outside module declarations defines a #[test]
    // Verified by emptying tests/unit/io/csv.rs
    #[test]
    fn test_all_test_files_contain_tests() {
        let base = Path::new(TESTS_DIR);
        let mut empty = Vec::new();

        for relative in load(TESTS_DIR) {
            let path = base.join(&relative);
            if !path.is_file() {
                continue;
            }

            // tests/<target>/main.rs is a test target root
            let is_target_root =
                relative.ends_with("/main.rs") && relative.matches('/').count() == 1;
            if is_target_root || relative.ends_with("mod.rs") {
                continue;
            }

            let content = fs::read_to_string(&path).unwrap_or_default();
            if !content.contains("#[test]") {
                empty.push(format!("  - {}", path.display()));
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
