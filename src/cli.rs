use crate::config::{
    Config, OutputFormat, config_file_path, ensure_sample_config, resolve_config_dir,
};
use crate::input::{parse_positive_count, split_candidates};
use crate::interactive::{InquirePrompter, StdinPrompter, is_interactive, run_session};
use crate::matcher::rank;
use crate::render::render_match;
use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration directory (default: platform config dir, e.g. ~/.config/termsuggest)
    #[arg(short = 'C', long = "config-dir", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Increase log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print the resolved configuration directory path and exit
    #[arg(long)]
    pub print_config_dir_path: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidate terms against a search term
    #[command(alias = "m")]
    Match(MatchArgs),
    /// Prompt for terms and candidates until 'quit'
    #[command(alias = "i")]
    Interactive(InteractiveArgs),
}

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Term to search for
    pub term: String,

    /// Candidate terms
    pub candidates: Vec<String>,

    /// Candidate list separated by commas or spaces (repeatable)
    #[arg(short, long = "list", value_name = "LIST")]
    pub lists: Vec<String>,

    /// Read candidates from a file, commas, spaces or newlines separating them
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Maximum number of suggestions (default from config)
    #[arg(short = 'n', long, value_parser = count_arg)]
    pub count: Option<usize>,

    /// Output format (default from config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show score and length delta next to each suggestion
    #[arg(long)]
    pub explain: bool,
}

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Default number of suggestions offered at the count prompt
    #[arg(short = 'n', long, value_parser = count_arg)]
    pub count: Option<usize>,
}

fn count_arg(value: &str) -> std::result::Result<usize, String> {
    parse_positive_count(value).map_err(|e| e.to_string())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);

    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
    debug!(config_dir = %config_dir.display(), "resolved config dir");

    if cli.print_config_dir_path {
        println!("{}", config_dir.display());
        return Ok(());
    }

    if cli.print_config {
        let config = Config::load(&config_dir)?;
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let Some(command) = cli.command.as_ref() else {
        let mut command = Cli::command();
        command.print_help()?;
        println!();
        return Ok(());
    };

    match ensure_sample_config(&config_dir) {
        Ok(true) => {
            info!(path = %config_file_path(&config_dir).display(), "created sample config")
        }
        Ok(false) => {}
        Err(e) => warn!(
            config_dir = %config_dir.display(),
            error = %e,
            "could not write sample config, continuing with defaults"
        ),
    }
    let config = Config::load(&config_dir)?;

    match command {
        Commands::Match(args) => handle_match(args, &config),
        Commands::Interactive(args) => handle_interactive(args, &config),
    }
}

fn handle_match(args: &MatchArgs, config: &Config) -> Result<()> {
    let candidates = collect_candidates(args)?;
    if candidates.is_empty() {
        eprintln!("No candidate terms provided.");
        return Ok(());
    }

    let count = args.count.unwrap_or(config.suggest.default_count);
    let format = args.format.unwrap_or(config.suggest.format);
    let suggestions = rank(&args.term, &candidates, count);

    let rendered = render_match(&args.term, count, &suggestions, format, args.explain)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

fn collect_candidates(args: &MatchArgs) -> Result<Vec<String>> {
    let mut candidates: Vec<String> = args
        .candidates
        .iter()
        .filter(|c| !c.trim().is_empty())
        .cloned()
        .collect();

    for list in &args.lists {
        candidates.extend(split_candidates(list));
    }

    if let Some(path) = &args.file {
        candidates.extend(read_candidate_file(path)?);
    }

    Ok(candidates)
}

fn read_candidate_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read candidate file {}", path.display()))?;
    Ok(content.lines().flat_map(split_candidates).collect())
}

fn handle_interactive(args: &InteractiveArgs, config: &Config) -> Result<()> {
    let default_count = args.count.unwrap_or(config.suggest.default_count);
    let mut out = io::stdout();

    if is_interactive() {
        run_session(&mut InquirePrompter, &mut out, default_count)?;
    } else {
        let mut prompter = StdinPrompter::new(io::stdin().lock(), io::stdout());
        run_session(&mut prompter, &mut out, default_count)?;
    }
    Ok(())
}
