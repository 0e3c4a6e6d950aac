//! CLI argument definitions

use clap::Parser;

/// pulsebar - animated terminal progress bar demo
#[derive(Parser, Debug)]
#[command(
    name = "pulsebar",
    about = "Animated progress bar sweeping 0-100% with rotating status messages",
    version,
    after_help = "Logs are written to: ~/.local/share/pulsebar/logs/pulsebar.log"
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_no_args() {
        let cli = Cli::parse_from(["pulsebar"]);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parses_verbose() {
        let cli = Cli::parse_from(["pulsebar", "--verbose"]);
        assert!(cli.verbose);
    }
}
