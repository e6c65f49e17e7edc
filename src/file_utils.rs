use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::errors::SheetError;

// @module: File helpers for base-name based input and output

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @generates: Path for a base name and suffix, e.g. `notes` + `-blanks.txt`
    pub fn sibling_path(basename: &str, suffix: &str) -> PathBuf {
        let mut name = basename.to_string();
        name.push_str(suffix);
        PathBuf::from(name)
    }

    /// Open a source document for buffered reading
    pub fn open_input<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, SheetError> {
        let path = path.as_ref();
        File::open(path)
            .map(BufReader::new)
            .map_err(|source| SheetError::InputNotFound {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Create (or truncate) an output sheet for buffered writing
    pub fn create_output<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>, SheetError> {
        let path = path.as_ref();
        File::create(path)
            .map(BufWriter::new)
            .map_err(|source| SheetError::OutputCreate {
                path: path.to_path_buf(),
                source,
            })
    }
}
