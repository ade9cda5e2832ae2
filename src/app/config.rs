use crate::app::cli::Cli;
use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// User-level defaults read from `~/.config/folderlist/config.toml`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultsFile {
    pub output: Option<String>,
    pub full_path: Option<bool>,
    pub extension: Option<bool>,
    pub print: Option<bool>,
    pub write: Option<bool>,
    pub files: Option<bool>,
    pub folders: Option<bool>,
}

const KNOWN_KEYS: &[&str] = &[
    "output",
    "full_path",
    "extension",
    "print",
    "write",
    "files",
    "folders",
];

pub fn defaults_file_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("folderlist").join("config.toml"))
}

/// Loads the defaults file, treating a missing file as empty.
pub fn load_defaults_file(path: &Path) -> Result<DefaultsFile> {
    if !path.exists() {
        log::debug!("No defaults file at {:?}", path);
        return Ok(DefaultsFile::default());
    }

    let content =
        fs::read_to_string(path).context(format!("Failed to read config at {:?}", path))?;

    let table: toml::Table =
        toml::from_str(&content).context(format!("Failed to parse config at {:?}", path))?;

    for key in table.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
        log::warn!("Ignoring unknown key {:?} in {:?}", key, path);
    }

    let parsed: DefaultsFile = toml::Value::Table(table)
        .try_into()
        .context(format!("Failed to parse config at {:?}", path))?;

    log::debug!("Loaded defaults from {:?}: {:?}", path, parsed);
    Ok(parsed)
}

/// Merges built-in defaults, the defaults file and CLI flags, in that order.
pub fn resolve_config(cli: Cli, defaults: DefaultsFile, cwd: PathBuf) -> RuntimeConfig {
    let mut config = RuntimeConfig::new(cli.path.map(PathBuf::from).unwrap_or(cwd));

    if let Some(output) = defaults.output {
        config.output = output.into();
    }
    config.full_path = defaults.full_path.unwrap_or(config.full_path);
    config.extension = defaults.extension.unwrap_or(config.extension);
    config.print = defaults.print.unwrap_or(config.print);
    config.write = defaults.write.unwrap_or(config.write);
    config.files = defaults.files.unwrap_or(config.files);
    config.folders = defaults.folders.unwrap_or(config.folders);

    if let Some(output) = cli.output {
        config.output = output;
    }
    config.full_path |= cli.full_path;
    config.extension |= cli.extension;
    config.print |= cli.print;
    config.write &= !cli.no_write;
    config.files &= !cli.no_files;
    config.folders &= !cli.no_folders;

    // Nothing would be emitted otherwise.
    if !config.write {
        config.print = true;
    }

    config
}
