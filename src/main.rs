use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use aida::{
    Corpus,
    cli::{Cli, Command},
    corpus,
    error,
    mcp,
    search,
};

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("AIDA_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Search(args) => {
            let (_, corpus) = load_corpus(cli.corpus.as_deref())?;
            let response = search::execute_search(&args.query, &corpus);

            if args.json {
                search::format_json(&response)?;
            } else {
                search::format_human(&response);
            }
        }
        Command::Status(args) => {
            let (path, corpus) = load_corpus(cli.corpus.as_deref())?;
            cmd_status(&path, &corpus, args.json);
        }
        Command::Mcp => {
            let (_, corpus) = load_corpus(cli.corpus.as_deref())?;
            mcp::run_mcp(corpus)?;
        }
        Command::Completions(args) => {
            args.generate();
        }
    }

    Ok(())
}

fn load_corpus(
    explicit: Option<&Path>,
) -> error::Result<(std::path::PathBuf, Corpus)> {
    let path = corpus::resolve_corpus_path(explicit)?;
    let corpus = Corpus::load(&path)?;
    Ok((path, corpus))
}

fn cmd_status(path: &Path, corpus: &Corpus, json: bool) {
    if json {
        println!(
            "{{\"corpus\":\"{}\",\"records\":{}}}",
            path.display(),
            corpus.len()
        );
    } else {
        println!("Corpus file: {}", path.display());
        println!("Records: {}", corpus.len());
    }
}
