use crate::core::Storage;
use crate::utils::error::{DrawError, Result};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Writes the draw results to a file on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: String,
}

impl LocalStorage {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for LocalStorage {
    type Writer = BufWriter<File>;

    /// Truncates any existing file.
    fn create(&self) -> Result<Self::Writer> {
        let to_write_error = |source: std::io::Error| DrawError::OutputWriteError {
            path: self.path.clone(),
            source,
        };

        let full_path = Path::new(&self.path);
        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(to_write_error)?;
            }
        }

        let file = File::create(full_path).map_err(to_write_error)?;
        Ok(BufWriter::new(file))
    }

    fn location(&self) -> &str {
        &self.path
    }
}
