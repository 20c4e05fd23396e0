use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::core::{ReportTimestamp, Result};

const FILE_PREFIX: &str = "rapport_supershop_";
const FILE_EXTENSION: &str = "txt";

/// Upper bound on `_N` suffixes tried when several runs share a second
const MAX_SUFFIX: u32 = 1000;

/// A freshly created report file, never an existing one
#[derive(Debug)]
pub struct ReportFile {
    pub path: PathBuf,
    pub writer: BufWriter<File>,
}

impl ReportFile {
    /// Create `dir` if needed and a new `rapport_supershop_<stamp>.txt` inside.
    ///
    /// An existing report is never overwritten: when the name is taken, a
    /// `_1`, `_2`, ... suffix is appended.
    pub fn create(dir: &Path, timestamp: &ReportTimestamp) -> Result<Self> {
        fs::create_dir_all(dir)?;

        let stem = format!("{}{}", FILE_PREFIX, timestamp.file_stamp());

        for attempt in 0..=MAX_SUFFIX {
            let path = dir.join(file_name(&stem, attempt));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => {
                    if attempt > 0 {
                        warn!(path = %path.display(), "report name already taken, using suffix");
                    }
                    return Ok(Self {
                        path,
                        writer: BufWriter::new(file),
                    });
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(io::Error::new(
            ErrorKind::AlreadyExists,
            format!("too many reports named {} in {}", stem, dir.display()),
        )
        .into())
    }
}

fn file_name(stem: &str, attempt: u32) -> String {
    if attempt == 0 {
        format!("{}.{}", stem, FILE_EXTENSION)
    } else {
        format!("{}_{}.{}", stem, attempt, FILE_EXTENSION)
    }
}
