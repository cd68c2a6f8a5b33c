//! Command-line interface
//!
//! Arguments starting with `@` name response files whose contents are
//! spliced in place before the command line is parsed.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};

use crate::cmdline::split_arguments;
use crate::config::{home_dir, DOT_DIR};
use crate::error::{RecolorError, Result};

const RULES_HELP: &str = "\
Rules:
  COLOR=REGEX    Color the first match of REGEX in each line
  COLOR*=REGEX   Color every match of REGEX in each line

  Where rules overlap, the one given later wins.

Colors:
  NAME           Foreground only, e.g. red
  FG/BG          Foreground and background, e.g. white/darkred or /blue
  HH             One or two hex digits, background in the high digit,
                 e.g. c (red on black) or 1f (white on dark blue)

  Names: black, darkblue, darkgreen, darkcyan, darkred, darkmagenta,
  darkyellow, gray, darkgray, blue, green, cyan, red, magenta, yellow,
  white, default

Response files:
  @FILE          Read more arguments from FILE, one or more per line.
                 Blank lines and lines starting with # are skipped.
  @~NAME         Also looks for ~/.recolor/NAME.rsp and ~/.recolor/NAME";

/// Colorize lines of standard input by regular expression
#[derive(Parser, Debug, Default)]
#[command(name = "recolor", version, after_help = RULES_HELP)]
pub struct Cli {
    /// Coloring rules (COLOR=REGEX) and @response files
    #[arg(value_name = "RULE")]
    pub rules: Vec<String>,

    /// Log the expanded arguments and the rules in effect
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not read ~/.recolor/config.toml
    #[arg(long)]
    pub no_config: bool,
}

impl Cli {
    /// Expand response files, then parse the command line
    pub fn parse_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let bin = args.next().unwrap_or_else(|| "recolor".to_string());
        let home = home_dir();
        let expanded = expand_response_files(args, home.as_deref())?;
        Ok(Cli::try_parse_from(std::iter::once(bin).chain(expanded))?)
    }

    /// Log the rules as received
    pub fn log_rules(&self) {
        for line in self.rule_listing() {
            info!("{line}");
        }
    }

    /// Header plus one `- RULE` line per rule, nothing when there are none
    fn rule_listing(&self) -> Vec<String> {
        if self.rules.is_empty() {
            return Vec::new();
        }
        let mut listing = vec![format!("Command-line arguments ({}):", self.rules.len())];
        listing.extend(self.rules.iter().map(|rule| format!("- {rule}")));
        listing
    }
}

/// Replace each `@FILE` argument with the arguments read from that file.
/// A bare `@` expands to nothing. Files are not expanded recursively.
pub fn expand_response_files<I>(args: I, home: Option<&Path>) -> Result<Vec<String>>
where
    I: IntoIterator<Item = String>,
{
    let mut expanded = Vec::new();
    for arg in args {
        match arg.strip_prefix('@') {
            Some("") => {}
            Some(path) => expanded.extend(read_response_file(path, home)?),
            None => expanded.push(arg),
        }
    }
    Ok(expanded)
}

fn read_response_file(path: &str, home: Option<&Path>) -> Result<Vec<String>> {
    let found = search_paths(path, home).into_iter().find(|candidate| candidate.is_file());
    let Some(found) = found else {
        return Err(RecolorError::ResponseFileNotFound(path.to_string()));
    };

    debug!(path = %found.display(), "reading response file");
    let contents = fs::read_to_string(&found)?;
    Ok(parse_response_file(&contents))
}

/// Candidate locations for a response file, in lookup order
fn search_paths(path: &str, home: Option<&Path>) -> Vec<PathBuf> {
    let Some(home) = home else {
        return vec![PathBuf::from(path)];
    };

    if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        return vec![home.join(rest)];
    }

    let mut paths = vec![PathBuf::from(path)];
    if let Some(name) = path.strip_prefix('~') {
        if !name.is_empty() && !name.contains(['/', '\\']) {
            let dot_dir = home.join(DOT_DIR);
            paths.push(dot_dir.join(format!("{name}.rsp")));
            paths.push(dot_dir.join(name));
        }
    }
    paths
}

/// Arguments in a response file. Blank and `#` lines are skipped; the
/// rest are read as one command line.
fn parse_response_file(contents: &str) -> Vec<String> {
    let line = contents
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join(" ");
    split_arguments(&line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;

    /// Scratch directory unique to a test
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("recolor-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_response_file() {
        let contents = "# colors for logs\nred*=error \"blue=a b\"\n\n   \ngreen=ok\n";
        assert_eq!(parse_response_file(contents), vec!["red*=error", "blue=a b", "green=ok"]);
    }

    #[test]
    fn test_search_paths() {
        let home = Path::new("/home/user");
        assert_eq!(
            search_paths("~logs", Some(home)),
            vec![
                PathBuf::from("~logs"),
                home.join(".recolor").join("logs.rsp"),
                home.join(".recolor").join("logs"),
            ]
        );
        assert_eq!(search_paths("~/x.rsp", Some(home)), vec![home.join("x.rsp")]);
        assert_eq!(search_paths("dir/x.rsp", Some(home)), vec![PathBuf::from("dir/x.rsp")]);
        assert_eq!(search_paths("~a/b", Some(home)), vec![PathBuf::from("~a/b")]);
        assert_eq!(search_paths("~logs", None), vec![PathBuf::from("~logs")]);
    }

    #[test]
    fn test_expand_response_files() {
        let dir = scratch_dir("expand");
        let file = dir.join("rules.rsp");
        fs::write(&file, "red=a\n# skipped\nblue*=b\n").unwrap();

        let rsp = format!("@{}", file.display());
        let args = strings(&["-v", "@", rsp.as_str(), "green=c"]);
        let expanded = expand_response_files(args, None).unwrap();
        assert_eq!(expanded, strings(&["-v", "red=a", "blue*=b", "green=c"]));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_expand_from_dot_dir() {
        let home = scratch_dir("home");
        fs::create_dir_all(home.join(DOT_DIR)).unwrap();
        fs::write(home.join(DOT_DIR).join("logs.rsp"), "yellow=warn").unwrap();

        let expanded = expand_response_files(strings(&["@~logs"]), Some(&home)).unwrap();
        assert_eq!(expanded, strings(&["yellow=warn"]));

        fs::remove_dir_all(home).unwrap();
    }

    #[test]
    fn test_missing_response_file() {
        let err = expand_response_files(strings(&["@does-not-exist.rsp"]), None).unwrap_err();
        assert!(matches!(err, RecolorError::ResponseFileNotFound(ref p) if p == "does-not-exist.rsp"));
        assert_eq!(err.to_string(), "Unable to find the response file \"does-not-exist.rsp\".");
    }

    #[test]
    fn test_cli_parse() {
        let cli = Cli::try_parse_from(["recolor", "-v", "red=a", "blue*=b"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.no_config);
        assert_eq!(cli.rules, strings(&["red=a", "blue*=b"]));
    }

    #[test]
    fn test_rule_listing() {
        let cli = Cli::try_parse_from(["recolor", "red=a", "blue*=b"]).unwrap();
        assert_eq!(
            cli.rule_listing(),
            strings(&["Command-line arguments (2):", "- red=a", "- blue*=b"])
        );
    }

    #[test]
    fn test_rule_listing_is_empty_without_rules() {
        let cli = Cli::try_parse_from(["recolor", "-v"]).unwrap();
        assert!(cli.rule_listing().is_empty());
    }

    #[test]
    fn test_cli_help_is_an_error_for_the_caller() {
        let err = Cli::try_parse_from(["recolor", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
