//! mailscrub - email content sanitization pipeline.
//!
//! Subcommands:
//! - `run`: full pipeline over one raw message into an output directory
//! - `defang`: stage 2 only, file or stdin to stdout
//! - `redact`: stage 3 only, file or stdin to stdout
//!
//! stdout carries the command payload; all logging goes to stderr.

use clap::{Args, Parser, Subcommand};
use ms_common::{FsBlobStore, FsMetadataStore};
use ms_defang::{Defanger, RegexDefanger, RewriteRules};
use ms_pipeline::{Pipeline, Result};
use ms_redact::{PatternRedactor, Redactor};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Built-in base template used when no document is supplied.
const DEFAULT_BASE_TEMPLATE: &str =
    "<mjml><mj-body><mj-raw>{{ SAFE_HTML }}</mj-raw></mj-body></mjml>";

/// mailscrub - sanitize raw email into safe simulation templates
#[derive(Parser)]
#[command(name = "mailscrub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline over one raw message
    Run(RunArgs),

    /// Defang an HTML fragment (stage 2 only)
    Defang(DefangArgs),

    /// Redact PII from an HTML fragment (stage 3 only)
    Redact(RedactArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Raw message file (EML)
    #[arg(long)]
    input: PathBuf,

    /// Output directory for artifacts and metadata
    #[arg(long, default_value = "out")]
    output_dir: PathBuf,

    /// YAML rewrite-rule document (built-in tokens when absent)
    #[arg(long, env = "MAILSCRUB_RULES")]
    rules: Option<PathBuf>,

    /// Base template document containing the {{ SAFE_HTML }} marker
    #[arg(long, env = "MAILSCRUB_TEMPLATE")]
    template: Option<PathBuf>,
}

#[derive(Args)]
struct DefangArgs {
    /// Input file; stdin when absent
    #[arg(long)]
    input: Option<PathBuf>,

    /// YAML rewrite-rule document
    #[arg(long, env = "MAILSCRUB_RULES")]
    rules: Option<PathBuf>,
}

#[derive(Args)]
struct RedactArgs {
    /// Input file; stdin when absent
    #[arg(long)]
    input: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.global);

    let outcome = match cli.command {
        Commands::Run(args) => cmd_run(&args),
        Commands::Defang(args) => cmd_defang(&args),
        Commands::Redact(args) => cmd_redact(&args),
    };

    if let Err(err) = outcome {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(opts: &GlobalOpts) {
    let level = if opts.quiet {
        "error"
    } else {
        match opts.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_run(args: &RunArgs) -> Result<()> {
    let rules = load_rules(args.rules.as_deref());
    let base_template = match &args.template {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_BASE_TEMPLATE.to_string(),
    };

    // The input's parent directory acts as the raw blob store; the file
    // name is the source reference.
    let input_dir = args
        .input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let source_reference = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "input is not a file path")
        })?;

    let pipeline = Pipeline::new(
        rules,
        base_template,
        Box::new(FsBlobStore::new(input_dir)),
        Box::new(FsBlobStore::new(&args.output_dir)),
        Box::new(FsMetadataStore::new(args.output_dir.join("metadata"))),
    );

    let outcome = pipeline.run(&source_reference)?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

fn cmd_defang(args: &DefangArgs) -> Result<()> {
    let html = read_input(args.input.as_deref())?;
    let defanger = RegexDefanger::new(load_rules(args.rules.as_deref()));
    print!("{}", defanger.defang(&html));
    Ok(())
}

fn cmd_redact(args: &RedactArgs) -> Result<()> {
    let html = read_input(args.input.as_deref())?;
    print!("{}", PatternRedactor::new().redact(&html));
    Ok(())
}

fn load_rules(path: Option<&Path>) -> RewriteRules {
    match path {
        Some(path) => RewriteRules::load_or_default(path),
        None => RewriteRules::default(),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
