use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod output;

use output::Format;

#[derive(Parser, Debug)]
#[command(name = "simtext")]
#[command(about = "Line and shingle similarity between two texts", long_about = None)]
struct Cli {
    /// Raise the default log level (-v info, -vv debug). `SIMTEXT_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Jaccard index of the two files' trimmed, non-empty lines.
    Lines(LinesCmd),
    /// Jaccard index of the two files' lowercase word shingles.
    Shingles(ShinglesCmd),
    /// All measures plus the lines both files share.
    Report(ReportCmd),
    /// Print version info.
    Version(VersionCmd),
}

#[derive(clap::Args, Debug)]
struct PairArgs {
    /// First text file.
    file1: PathBuf,
    /// Second text file.
    file2: PathBuf,
    /// Template file (e.g. handed-out starter code) whose lines or shingles are
    /// discounted from both texts.
    #[arg(long, env = "SIMTEXT_TEMPLATE")]
    template: Option<PathBuf>,
    /// Output format: json|text
    #[arg(
        long = "output",
        alias = "format",
        env = "SIMTEXT_OUTPUT",
        default_value = "json"
    )]
    output: String,
}

#[derive(clap::Args, Debug)]
struct LinesCmd {
    #[command(flatten)]
    pair: PairArgs,
}

#[derive(clap::Args, Debug)]
struct ShinglesCmd {
    #[command(flatten)]
    pair: PairArgs,
    /// Number of adjacent words per shingle (must be at least 1).
    #[arg(long, env = "SIMTEXT_SHINGLE_LENGTH", default_value_t = 3)]
    shingle_length: usize,
}

#[derive(clap::Args, Debug)]
struct ReportCmd {
    #[command(flatten)]
    pair: PairArgs,
    /// Number of adjacent words per shingle (must be at least 1).
    #[arg(long, env = "SIMTEXT_SHINGLE_LENGTH", default_value_t = 3)]
    shingle_length: usize,
}

#[derive(clap::Args, Debug)]
struct VersionCmd {
    /// Output format: json|text
    #[arg(long = "output", alias = "format", default_value = "json")]
    output: String,
}

/// Texts loaded for one comparison. A missing template reads as empty.
struct Inputs {
    text1: String,
    text2: String,
    template: String,
}

impl PairArgs {
    fn load(&self) -> Result<Inputs> {
        let template = match &self.template {
            Some(p) => read_text(p)?,
            None => String::new(),
        };
        Ok(Inputs {
            text1: read_text(&self.file1)?,
            text2: read_text(&self.file2)?,
            template,
        })
    }

    fn format(&self) -> Format {
        Format::parse(&self.output)
    }
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "read text");
    // Submissions are not always valid UTF-8; similarity only needs a best-effort view.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// `KEY=VALUE` assignments in an env file. Blank lines, `#` comments and
/// lines without `=` or with an empty key are skipped.
fn env_assignments(txt: &str) -> Vec<(&str, &str)> {
    txt.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.starts_with('#'))
        .filter_map(|s| s.split_once('='))
        .map(|(k, v)| (k.trim(), v.trim()))
        .filter(|(k, _)| !k.is_empty())
        .collect()
}

/// Applies `SIMTEXT_ENV_FILE`, if set.
///
/// Variables already present in the process environment win. Values are never
/// logged. An unreadable file is returned as a warning for once logging is up.
fn load_env_file() -> Option<String> {
    let path = std::env::var_os("SIMTEXT_ENV_FILE").filter(|p| !p.is_empty())?;
    let txt = match std::fs::read_to_string(&path) {
        Ok(txt) => txt,
        Err(e) => {
            return Some(format!(
                "ignoring env file {}: {e}",
                Path::new(&path).display()
            ))
        }
    };
    for (k, v) in env_assignments(&txt) {
        if std::env::var_os(k).is_none() {
            std::env::set_var(k, v);
        }
    }
    None
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_env("SIMTEXT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn envelope(kind: &str, pair: &PairArgs) -> serde_json::Value {
    serde_json::json!({
        "schema_version": 1,
        "kind": kind,
        "ok": true,
        "file1": pair.file1.display().to_string(),
        "file2": pair.file2.display().to_string(),
        "template": pair.template.as_ref().map(|p| p.display().to_string()),
    })
}

fn main() -> Result<()> {
    let env_file_warning = load_env_file();
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Some(w) = env_file_warning {
        tracing::warn!("{w}");
    }

    match cli.command {
        Commands::Lines(args) => {
            let pair = &args.pair;
            let inputs = pair.load()?;
            let score = if pair.template.is_some() {
                simtext_text::line_similarity_with_template(
                    &inputs.text1,
                    &inputs.text2,
                    &inputs.template,
                )
            } else {
                simtext_text::line_similarity(&inputs.text1, &inputs.text2)
            };
            let mut payload = envelope("lines", pair);
            payload["score"] = serde_json::json!(score);
            output::emit(pair.format(), &payload, &output::score_line("line", score));
        }
        Commands::Shingles(args) => {
            let pair = &args.pair;
            let inputs = pair.load()?;
            let score = simtext_text::shingle_similarity(
                &inputs.text1,
                &inputs.text2,
                &inputs.template,
                args.shingle_length,
            )?;
            let mut payload = envelope("shingles", pair);
            payload["shingle_length"] = serde_json::json!(args.shingle_length);
            payload["score"] = serde_json::json!(score);
            output::emit(pair.format(), &payload, &output::score_line("shingle", score));
        }
        Commands::Report(args) => {
            let pair = &args.pair;
            let inputs = pair.load()?;
            let report = simtext_text::compare(
                &inputs.text1,
                &inputs.text2,
                &inputs.template,
                args.shingle_length,
            )?;
            let mut payload = envelope("report", pair);
            payload["report"] =
                serde_json::to_value(&report).context("serialize similarity report")?;
            output::emit(pair.format(), &payload, &output::render_report(&report));
        }
        Commands::Version(args) => {
            let v = serde_json::json!({
                "schema_version": 1,
                "kind": "version",
                "ok": true,
                "name": "simtext",
                "version": env!("CARGO_PKG_VERSION"),
            });
            let text = format!("simtext {}", env!("CARGO_PKG_VERSION"));
            output::emit(Format::parse(&args.output), &v, &text);
        }
    }
    Ok(())
}
