use std::io::ErrorKind;
use std::path::Path;

const VERSION_KEY: &str = "build.version";
const DATE_KEY: &str = "build.date";

/// Version and date the running build was produced with.
///
/// Both are descriptive only. A missing or unreadable properties file leaves
/// them unknown instead of failing startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildInfo {
    version: Option<String>,
    date: Option<String>,
}

impl BuildInfo {
    /// Read build metadata from a properties file at `path`.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no build metadata file");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read build metadata");
                Self::default()
            }
        }
    }

    /// Extract build metadata from properties text.
    ///
    /// Accepts `key=value` and `key: value` lines; `#` and `!` start comments.
    /// Lines that do not parse are skipped.
    #[must_use]
    pub fn parse(contents: &str) -> Self {
        let mut info = Self::default();

        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with(['#', '!']) {
                continue;
            }
            let Some((key, value)) = line.split_once(['=', ':']) else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.trim() {
                VERSION_KEY => info.version = Some(value.to_owned()),
                DATE_KEY => info.date = Some(value.to_owned()),
                _ => {}
            }
        }

        info
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_parses_both_separators() {
        let info = BuildInfo::parse("build.version=2.6.4\nbuild.date: 12-Mar-2026 10:15\n");

        assert_eq!(info.version(), Some("2.6.4"));
        // only the first separator splits, so the time survives
        assert_eq!(info.date(), Some("12-Mar-2026 10:15"));
    }

    #[test]
    fn test_skips_comments_blanks_and_unknown_keys() {
        let info = BuildInfo::parse(
            "# generated\n\n! legacy comment\nbuild.vendor=inkwell\nbuild.version = 1.0\n",
        );

        assert_eq!(info.version(), Some("1.0"));
        assert!(info.date().is_none());
    }

    #[test]
    fn test_empty_values_stay_unknown() {
        let info = BuildInfo::parse("build.version=\nbuild.date=   \n");

        assert_eq!(info, BuildInfo::default());
    }

    #[test]
    fn test_missing_file_degrades_to_unknown() {
        let dir = tempfile::tempdir().unwrap();

        let info = BuildInfo::load(&dir.path().join("inkwell-build.properties"));

        assert_eq!(info, BuildInfo::default());
    }

    #[test]
    fn test_directory_instead_of_file_degrades_to_unknown() {
        let dir = tempfile::tempdir().unwrap();

        let info = BuildInfo::load(dir.path());

        assert!(info.version().is_none());
    }
}
