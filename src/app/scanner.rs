use crate::app::models::{EntryList, ListError};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    /// Fails with `PathNotFound` unless `root` is an existing directory.
    pub fn new(root: &Path) -> Result<Self, ListError> {
        if !root.is_dir() {
            return Err(ListError::PathNotFound {
                path: root.to_path_buf(),
            });
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Enumerates the immediate files and folders of the root, once, unsorted.
    pub fn scan(&self) -> Result<EntryList, ListError> {
        let mut entries = EntryList::default();

        // No hidden, ignore-file or parent filtering: list what the directory holds.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .max_depth(Some(1))
            .build();

        for result in walker {
            let entry = result.map_err(|source| ListError::ReadDir {
                path: self.root.clone(),
                source,
            })?;

            if entry.depth() == 0 {
                continue;
            }

            let path = entry.into_path();
            if path.is_dir() {
                entries.folders.push(path);
            } else {
                entries.files.push(path);
            }
        }

        log::debug!(
            "Scanned {:?}: {} files, {} folders",
            self.root,
            entries.files.len(),
            entries.folders.len()
        );
        Ok(entries)
    }
}
