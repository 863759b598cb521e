//! Testcase discovery on disk.
//!
//! Problems ship their public testcases as `<name>.inp` / `<name>.cor` pairs in
//! one directory. Outputs captured from a student's program live next to them
//! (or in a separate directory) as `<name>.out`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{UtilError, UtilResult};

pub const INPUT_EXTENSION: &str = "inp";
pub const EXPECTED_EXTENSION: &str = "cor";
pub const OUTPUT_EXTENSION: &str = "out";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testcase {
    pub name: String,
    pub input: String,
    pub expected: String,
}

/// What the runner left behind for one testcase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturedOutput {
    Text(String),
    /// No `<name>.out` file was written.
    Missing,
    /// The output file exists but is not valid UTF-8.
    NotUtf8,
}

impl CapturedOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CapturedOutput::Text(text) => Some(text),
            CapturedOutput::Missing | CapturedOutput::NotUtf8 => None,
        }
    }
}

/// Loads every `<name>.inp` that has a matching `<name>.cor`, sorted by name.
///
/// Inputs are decoded lossily since they are never compared. A `.cor` file
/// that is not UTF-8 is a broken problem and fails the whole load.
pub fn load_testcases<P: AsRef<Path>>(dir: P) -> UtilResult<Vec<Testcase>> {
    let dir = dir.as_ref();
    require_dir(dir)?;

    let entries = fs::read_dir(dir).map_err(|e| UtilError::io(dir, e))?;

    let mut testcases = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| UtilError::io(dir, e))?.path();
        if path.extension().and_then(|s| s.to_str()) != Some(INPUT_EXTENSION) {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let expected_path = path.with_extension(EXPECTED_EXTENSION);
        if !expected_path.is_file() {
            tracing::warn!(testcase = name, "skipping testcase without a .cor file");
            continue;
        }

        let input = fs::read(&path).map_err(|e| UtilError::io(&path, e))?;
        let expected = fs::read(&expected_path).map_err(|e| UtilError::io(&expected_path, e))?;
        let expected =
            String::from_utf8(expected).map_err(|_| UtilError::NotUtf8(expected_path.clone()))?;

        testcases.push(Testcase {
            name: name.to_string(),
            input: String::from_utf8_lossy(&input).into_owned(),
            expected,
        });
    }

    testcases.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(dir = %dir.display(), count = testcases.len(), "loaded testcases");
    Ok(testcases)
}

/// Fails with [`UtilError::MissingDirectory`] unless `dir` is a directory.
pub fn require_dir<P: AsRef<Path>>(dir: P) -> UtilResult<()> {
    let dir = dir.as_ref();
    if dir.is_dir() {
        Ok(())
    } else {
        Err(UtilError::MissingDirectory(dir.to_path_buf()))
    }
}

/// Reads the captured output for `name`.
pub fn read_output<P: AsRef<Path>>(dir: P, name: &str) -> UtilResult<CapturedOutput> {
    let path = dir.as_ref().join(format!("{name}.{OUTPUT_EXTENSION}"));
    match fs::read(&path) {
        Ok(bytes) => Ok(String::from_utf8(bytes)
            .map(CapturedOutput::Text)
            .unwrap_or_else(|_| {
                tracing::warn!(testcase = name, "captured output is not valid UTF-8");
                CapturedOutput::NotUtf8
            })),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(CapturedOutput::Missing),
        Err(e) => Err(UtilError::io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, file: &str, contents: &str) {
        fs::write(dir.join(file), contents).unwrap();
    }

    #[test]
    fn pairs_are_loaded_in_name_order() {
        let td = TempDir::new().unwrap();
        write(td.path(), "sample-2.inp", "2\n");
        write(td.path(), "sample-2.cor", "4\n");
        write(td.path(), "sample-1.inp", "1\n");
        write(td.path(), "sample-1.cor", "2\n");

        let cases = load_testcases(td.path()).unwrap();
        let names: Vec<_> = cases.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["sample-1", "sample-2"]);
        assert_eq!(cases[0].input, "1\n");
        assert_eq!(cases[1].expected, "4\n");
    }

    #[test]
    fn input_without_expected_is_skipped() {
        let td = TempDir::new().unwrap();
        write(td.path(), "orphan.inp", "x\n");
        write(td.path(), "ok.inp", "y\n");
        write(td.path(), "ok.cor", "z\n");
        write(td.path(), "notes.txt", "ignored");

        let cases = load_testcases(td.path()).unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].name, "ok");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let td = TempDir::new().unwrap();
        let err = load_testcases(td.path().join("nope")).unwrap_err();
        assert!(matches!(err, UtilError::MissingDirectory(_)));
    }

    #[test]
    fn read_output_distinguishes_missing_from_empty() {
        let td = TempDir::new().unwrap();
        write(td.path(), "sample-1.out", "");

        assert_eq!(
            read_output(td.path(), "sample-1").unwrap(),
            CapturedOutput::Text(String::new())
        );
        assert_eq!(read_output(td.path(), "sample-2").unwrap(), CapturedOutput::Missing);
    }

    #[test]
    fn read_output_flags_invalid_utf8() {
        let td = TempDir::new().unwrap();
        fs::write(td.path().join("binary.out"), [0xff, 0xfe, b'\n']).unwrap();

        let captured = read_output(td.path(), "binary").unwrap();
        assert_eq!(captured, CapturedOutput::NotUtf8);
        assert_eq!(captured.as_text(), None);
    }

    #[test]
    fn invalid_utf8_input_is_decoded_lossily() {
        let td = TempDir::new().unwrap();
        fs::write(td.path().join("raw.inp"), [b'a', 0xff]).unwrap();
        write(td.path(), "raw.cor", "ok\n");

        let cases = load_testcases(td.path()).unwrap();
        assert_eq!(cases[0].input, "a\u{fffd}");
    }

    #[test]
    fn invalid_utf8_solution_is_an_error() {
        let td = TempDir::new().unwrap();
        write(td.path(), "bad.inp", "");
        fs::write(td.path().join("bad.cor"), [0xff]).unwrap();

        let err = load_testcases(td.path()).unwrap_err();
        assert!(matches!(err, UtilError::NotUtf8(_)));
    }

    #[test]
    fn require_dir_rejects_files_and_missing_paths() {
        let td = TempDir::new().unwrap();
        write(td.path(), "file.txt", "");
        assert!(require_dir(td.path()).is_ok());
        assert!(matches!(
            require_dir(td.path().join("file.txt")),
            Err(UtilError::MissingDirectory(_))
        ));
        assert!(matches!(
            require_dir(td.path().join("gone")),
            Err(UtilError::MissingDirectory(_))
        ));
    }
}
