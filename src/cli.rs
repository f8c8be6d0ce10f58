use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "aida",
    about = "Keyword search over scraped BPS Kota Medan web records"
)]
pub struct Cli {
    /// Override the corpus file location
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search the corpus
    Search(SearchArgs),
    /// Show corpus status and statistics
    Status(StatusArgs),
    /// Start MCP server for AI agent integration
    Mcp,
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Search --

#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// The search query
    pub query: String,

    /// Output the response as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Status --

#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "aida",
            &mut std::io::stdout(),
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parse_search_defaults() {
        let cli = Cli::parse_from(["aida", "search", "kemiskinan 2023"]);
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.query, "kemiskinan 2023");
                assert!(!args.json);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn parse_global_corpus_flag() {
        let cli = Cli::parse_from([
            "aida",
            "search",
            "penduduk",
            "--corpus",
            "/tmp/bps_index.json",
        ]);
        assert_eq!(cli.corpus, Some(PathBuf::from("/tmp/bps_index.json")));
    }

    #[test]
    fn parse_mcp_command() {
        let cli = Cli::parse_from(["aida", "mcp"]);
        assert!(matches!(cli.command, Command::Mcp));
    }
}
