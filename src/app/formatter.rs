use crate::app::models::{EntryList, RuntimeConfig};
use std::path::Path;

pub const FILES_HEADER: &str = "Files:";
pub const FOLDERS_HEADER: &str = "Folders:";

pub struct OutputGenerator;

impl OutputGenerator {
    /// Renders the listing as lines, without terminators.
    pub fn generate_lines(entries: &EntryList, config: &RuntimeConfig) -> Vec<String> {
        let mut lines = Vec::new();

        if config.files {
            lines.push(FILES_HEADER.to_string());
            lines.extend(entries.files.iter().map(|f| Self::format_file(f, config)));
            lines.push(String::new());
        }

        if config.folders {
            lines.push(FOLDERS_HEADER.to_string());
            lines.extend(entries.folders.iter().map(|f| Self::format_folder(f, config)));
        }

        lines
    }

    /// Without an extension flag only the last suffix goes; dotfiles like `.bashrc` keep their name.
    pub fn format_file(path: &Path, config: &RuntimeConfig) -> String {
        let name = if config.full_path {
            Some(path.as_os_str())
        } else if config.extension {
            path.file_name()
        } else {
            path.file_stem()
        };
        name.unwrap_or(path.as_os_str()).to_string_lossy().into_owned()
    }

    /// Folders have no extension; only full-path mode changes them.
    pub fn format_folder(path: &Path, config: &RuntimeConfig) -> String {
        let name = if config.full_path {
            path.as_os_str()
        } else {
            path.file_name().unwrap_or(path.as_os_str())
        };
        name.to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config() -> RuntimeConfig {
        RuntimeConfig::new(PathBuf::from("/data"))
    }

    fn entries() -> EntryList {
        EntryList {
            files: vec![
                PathBuf::from("/data/report.final.pdf"),
                PathBuf::from("/data/notes"),
                PathBuf::from("/data/.bashrc"),
            ],
            folders: vec![PathBuf::from("/data/photos.2020"), PathBuf::from("/data/src")],
        }
    }

    #[test]
    fn test_default_strips_directory_and_extension() {
        let lines = OutputGenerator::generate_lines(&entries(), &config());
        assert_eq!(
            lines,
            vec![
                "Files:",
                "report.final",
                "notes",
                ".bashrc",
                "",
                "Folders:",
                "photos.2020",
                "src",
            ]
        );
    }

    #[test]
    fn test_extension_mode_keeps_file_extension_only() {
        let config = RuntimeConfig {
            extension: true,
            ..config()
        };
        let lines = OutputGenerator::generate_lines(&entries(), &config);
        assert_eq!(lines[1], "report.final.pdf");
        assert_eq!(lines[6], "photos.2020");
    }

    #[test]
    fn test_full_path_mode_emits_paths_unchanged() {
        let config = RuntimeConfig {
            full_path: true,
            ..config()
        };
        let lines = OutputGenerator::generate_lines(&entries(), &config);
        assert_eq!(lines[1], "/data/report.final.pdf");
        assert_eq!(lines[3], "/data/.bashrc");
        assert_eq!(lines[6], "/data/photos.2020");
        assert_eq!(lines[7], "/data/src");
    }

    #[test]
    fn test_disabled_categories_are_omitted() {
        let no_files = RuntimeConfig {
            files: false,
            ..config()
        };
        assert_eq!(
            OutputGenerator::generate_lines(&entries(), &no_files),
            vec!["Folders:", "photos.2020", "src"]
        );

        let no_folders = RuntimeConfig {
            folders: false,
            ..config()
        };
        let lines = OutputGenerator::generate_lines(&entries(), &no_folders);
        assert_eq!(lines.first().map(String::as_str), Some("Files:"));
        assert_eq!(lines.last().map(String::as_str), Some(""));
        assert!(!lines.iter().any(|l| l == FOLDERS_HEADER));

        let neither = RuntimeConfig {
            files: false,
            folders: false,
            ..config()
        };
        assert!(OutputGenerator::generate_lines(&entries(), &neither).is_empty());
    }

    #[test]
    fn test_empty_directory_keeps_headers() {
        let lines = OutputGenerator::generate_lines(&EntryList::default(), &config());
        assert_eq!(lines, vec!["Files:", "", "Folders:"]);
    }
}
