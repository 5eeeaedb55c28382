use std::fs;
use std::path::PathBuf;
use tempdir::TempDir;

pub mod macros {
    /// Creates temporary directory in cargo target directory.
    #[macro_export]
    macro_rules! temp_dir {
        ($prefix:literal) => {
            // CARGO_TARGET_TMPDIR is only set when compiling integration tests,
            // the macro defers its expansion to the test crate.
            hb_framework_basic::test_dirs::temp_dir_(env!("CARGO_TARGET_TMPDIR"), $prefix)
        };
    }

    /// Returns resource from `resources` directory in tests folder.
    #[macro_export]
    macro_rules! resource {
        ($name:literal) => {
            hb_framework_basic::test_dirs::resource_(env!("CARGO_MANIFEST_DIR"), $name)
        };
    }
}

pub fn temp_dir_(base_dir: &str, prefix: &str) -> anyhow::Result<TempDir> {
    fs::create_dir_all(base_dir)?;
    let dir = TempDir::new_in(base_dir, prefix)?;
    log::debug!("Test directory: {}", dir.path().display());
    Ok(dir)
}

/// Returns resource from `resources` directory in tests.
pub fn resource_(base_dir: &str, name: &str) -> PathBuf {
    PathBuf::from(base_dir)
        .join("tests")
        .join("resources")
        .join(name)
}
