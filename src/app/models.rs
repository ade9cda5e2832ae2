use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_OUTPUT: &str = "FolderList.txt";

/// Represents the final configuration after merging the defaults file and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub path: PathBuf,
    pub output: OsString,
    pub full_path: bool,
    pub extension: bool,
    pub print: bool,
    pub write: bool,
    pub files: bool,
    pub folders: bool,
}

impl RuntimeConfig {
    /// Built-in defaults for listing `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            output: OsString::from(DEFAULT_OUTPUT),
            full_path: false,
            extension: false,
            print: false,
            write: true,
            files: true,
            folders: true,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.path.join(&self.output)
    }
}

/// Immediate entries of the target directory, in enumeration order.
#[derive(Debug, Default)]
pub struct EntryList {
    pub files: Vec<PathBuf>,
    pub folders: Vec<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ListError {
    #[error("The path \"{}\" was not found.", .path.display())]
    PathNotFound { path: PathBuf },

    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("Failed to create output file {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

impl ListError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PathNotFound { .. } => 1,
            // EX_IOERR
            Self::ReadDir { .. } | Self::CreateOutput { .. } | Self::Write(_) => 74,
        }
    }
}
