//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// component-bundle - pack a component directory into one JSON file
///
/// Every file under the input directory is stored as base64 under its
/// relative path, nested by directory.
#[derive(Parser, Debug)]
#[command(
    name = "component-bundle",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Pack a directory of component files into a single JSON bundle",
    long_about = "Recursively reads INPUT_DIR and writes a JSON document whose single root key \
                  maps to a tree mirroring the directory: subdirectories become nested objects \
                  and files become their base64 encoded bytes. Entries are sorted by name, so \
                  repeated runs over the same files produce identical output.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  component-bundle ./components\n    \
                  component-bundle ./components dist/components.json\n    \
                  component-bundle ./components dist/ui.json files"
)]
pub struct Cli {
    /// Directory to bundle
    pub input_dir: PathBuf,

    /// Output JSON file (defaults to <INPUT_DIR>/components.bundle.json)
    pub output_file: Option<PathBuf>,

    /// Top-level JSON key wrapping the tree (defaults to "components")
    pub root_key: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_positionals() {
        let cli = Cli::try_parse_from(["component-bundle", "in", "out.json", "files"]).unwrap();
        assert_eq!(cli.input_dir, PathBuf::from("in"));
        assert_eq!(cli.output_file, Some(PathBuf::from("out.json")));
        assert_eq!(cli.root_key.as_deref(), Some("files"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_only_input() {
        let cli = Cli::try_parse_from(["component-bundle", "-v", "in"]).unwrap();
        assert_eq!(cli.input_dir, PathBuf::from("in"));
        assert!(cli.output_file.is_none());
        assert!(cli.root_key.is_none());
        assert!(cli.verbose);
    }

    #[test]
    fn test_missing_input_is_usage_error() {
        let err = Cli::try_parse_from(["component-bundle"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_positional_is_rejected() {
        let err = Cli::try_parse_from(["component-bundle", "a", "b", "c", "d"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
