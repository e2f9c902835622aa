//! Function Registry Port
//!
//! Names of the functions this repository is responsible for.

use std::path::PathBuf;

/// Errors enumerating managed functions
#[derive(Debug)]
pub enum RegistryError {
    /// Functions directory does not exist
    NotFound(PathBuf),
    /// I/O error while listing
    Io(std::io::Error),
}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::Io(err)
    }
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::NotFound(path) => {
                write!(f, "functions directory not found: {}", path.display())
            }
            RegistryError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Source of managed function names
pub trait FunctionRegistry {
    /// Managed function names, sorted and unique
    fn managed_functions(&self) -> Result<Vec<String>, RegistryError>;

    /// Repository-relative path holding a function's source
    fn function_path(&self, function: &str) -> String;
}
