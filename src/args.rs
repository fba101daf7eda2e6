use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "wordru-keyboard", about = "Cyrillic Wordle keyboard with guess feedback")]
pub struct Args {
    /// JSON game snapshot: {"grounds": [["WORD", "MARKER"], ...]}
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Repeated ground entries appended after the snapshot: WORD MARKER
    #[arg(long, num_args = 2, value_names = ["WORD", "MARKER"])]
    pub ground: Vec<String>,

    /// Print the keyboard once and exit instead of starting the UI
    #[arg(long)]
    pub print: bool,

    /// With --print, emit the letter statuses as JSON
    #[arg(long, requires = "print")]
    pub json: bool,

    /// Log file location (defaults to the platform data directory)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grounds() {
        let args = Args::try_parse_from([
            "wordru-keyboard",
            "--ground",
            "привет",
            "ПРИ#ет",
            "--ground",
            "кот",
            "###",
            "--print",
        ])
        .unwrap();

        assert_eq!(args.ground, vec!["привет", "ПРИ#ет", "кот", "###"]);
        assert!(args.print);
        assert!(!args.json);
        assert!(args.snapshot.is_none());
    }

    #[test]
    fn test_json_requires_print() {
        assert!(Args::try_parse_from(["wordru-keyboard", "--json"]).is_err());
    }
}
