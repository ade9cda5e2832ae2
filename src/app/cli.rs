use clap::builder::ValueParser;
use clap::Parser;
use std::ffi::{OsStr, OsString};

#[derive(Parser, Debug)]
#[command(
    name = "folderlist",
    version,
    about = "Folder List, a simple file and folder lister",
    after_help = "If no path is specified, the current working directory will be listed.\n\
                  Flags are case-insensitive; unrecognized arguments are ignored.",
    args_override_self = true
)]
pub struct Cli {
    /// Directory to list
    #[arg(value_parser = ValueParser::os_string())]
    pub path: Option<OsString>,

    /// Skip printing the files
    #[arg(long = "nofiles")]
    pub no_files: bool,

    /// Skip printing the folders
    #[arg(long = "nofolders")]
    pub no_folders: bool,

    /// Print the full path and extension of all files and folders (also -fp)
    #[arg(long = "fullpath")]
    pub full_path: bool,

    /// Print the extension of all files if fullpath isn't specified
    #[arg(short = 'e', long)]
    pub extension: bool,

    /// Skip writing to file, forces printing (also -nw)
    #[arg(long = "nowrite")]
    pub no_write: bool,

    /// Custom file name for the output list [default: FolderList.txt]
    #[arg(
        short = 'o',
        long,
        value_name = "NAME",
        allow_hyphen_values = true,
        value_parser = ValueParser::os_string()
    )]
    pub output: Option<OsString>,

    /// Print the output to the console along with writing the file
    #[arg(short = 'p', long)]
    pub print: bool,
}

/// Parses a raw argument list (program name first) into a `Cli`.
pub fn parse_args<I, T>(raw: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut raw = raw.into_iter().map(Into::into);
    let program = raw.next().unwrap_or_else(|| OsString::from("folderlist"));
    let rest: Vec<OsString> = raw.collect();

    let mut tokens = vec![program];
    tokens.extend(normalize_args(&rest));
    Cli::try_parse_from(tokens)
}

/// Rewrites the legacy, case-insensitive argument style into canonical clap tokens.
///
/// A leading token without any `-` is the path override. The remaining tokens are
/// matched independently of it; anything unrecognized is dropped. `-o` binds the
/// following token verbatim and emits a bare `--output` when there is none, so clap
/// reports the missing value. `-h` stops the scan.
pub fn normalize_args(args: &[OsString]) -> Vec<OsString> {
    let mut canonical = Vec::new();

    if let Some(first) = args.first() {
        if !first.to_string_lossy().contains('-') {
            canonical.push(first.clone());
        }
    }

    let mut iter = args.iter();
    while let Some(token) = iter.next() {
        let Some(flag) = canonical_flag(token) else {
            continue;
        };

        match flag {
            "--output" => match iter.next() {
                Some(value) => {
                    let mut bound = OsString::from("--output=");
                    bound.push(value);
                    canonical.push(bound);
                }
                None => canonical.push(OsString::from(flag)),
            },
            "--help" => {
                canonical.push(OsString::from(flag));
                break;
            }
            _ => canonical.push(OsString::from(flag)),
        }
    }

    canonical
}

fn canonical_flag(token: &OsStr) -> Option<&'static str> {
    let lowered = token.to_str()?.to_lowercase();
    let flag = match lowered.as_str() {
        "--nofolders" => "--nofolders",
        "--nofiles" => "--nofiles",
        "-fp" | "--fullpath" => "--fullpath",
        "-e" | "--extension" => "--extension",
        "-nw" | "--nowrite" => "--nowrite",
        "-o" | "--output" => "--output",
        "-p" | "--print" => "--print",
        "-h" | "--help" => "--help",
        "--version" => "--version",
        _ => return None,
    };
    Some(flag)
}
