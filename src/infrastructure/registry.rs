//! Directory-backed function registry
//!
//! Every non-hidden sub-directory of the functions directory is one managed
//! function.

use std::fs;
use std::path::PathBuf;

use crate::domain::ports::{FunctionRegistry, RegistryError};

pub struct DirectoryRegistry {
    /// Repository root
    root: PathBuf,
    /// Functions directory, relative to `root`
    functions_dir: PathBuf,
}

impl DirectoryRegistry {
    pub fn new(root: impl Into<PathBuf>, functions_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            functions_dir: functions_dir.into(),
        }
    }

    fn absolute_dir(&self) -> PathBuf {
        self.root.join(&self.functions_dir)
    }
}

impl FunctionRegistry for DirectoryRegistry {
    fn managed_functions(&self) -> Result<Vec<String>, RegistryError> {
        let dir = self.absolute_dir();
        if !dir.is_dir() {
            return Err(RegistryError::NotFound(dir));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            names.push(name);
        }
        names.sort();
        Ok(names)
    }

    fn function_path(&self, function: &str) -> String {
        let dir = self.functions_dir.to_string_lossy();
        let dir = dir.trim_end_matches(['/', '\\']);
        if dir.is_empty() || dir == "." {
            function.to_string()
        } else {
            // git pathspecs always use forward slashes
            format!("{}/{}", dir.replace('\\', "/"), function)
        }
    }
}
