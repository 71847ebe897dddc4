use std::collections::HashSet;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use preview::{ContentRecord, FrameMarkup, PreviewConfig, SandboxPolicy, compile_record, parse_records};


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
    #[error(transparent)]
    Record(#[from] preview::RecordError),
    #[error(transparent)]
    Config(#[from] preview::ConfigError),
    #[error(transparent)]
    Sandbox(#[from] preview::SandboxError),
    #[error("no records in input")]
    NoRecords,
    #[error("input holds {0} records; pass --out <dir> to write one file per record")]
    NeedsOutputDir(usize),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "preview-cli", about = "Inspect and render component preview documents")]
struct Cli {
    /// Utility-CSS engine for tailwind documents.
    #[arg(long, env = "PREVIEW_TAILWIND_CDN")]
    tailwind_cdn: Option<String>,

    /// Frame scale-down factor in (0, 1].
    #[arg(long, env = "PREVIEW_SCALE")]
    scale: Option<f64>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the compilation branch of each record.
    Resolve {
        /// JSON file with one record or an array; `-` reads stdin.
        input: String,
        /// Emit JSON lines instead of tab-separated text.
        #[arg(long)]
        json: bool,
    },
    /// Write compiled documents.
    Render {
        input: String,
        /// Output file (single record) or directory (one `<id>.html` per record).
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the sandboxed frame markup for each record.
    Frame { input: String },
    /// Validate a sandbox token list against the preview policy.
    CheckSandbox { tokens: String },
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = build_config(&cli)?;
    tracing::debug!(scale = config.scale, tailwind = %config.tailwind_cdn, "preview config loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Resolve { input, json } => {
            let records = load_records(&input)?;
            write_stdout(&mut out, &resolve_lines(&records, json)?)
        }
        Command::Render { input, out: target } => {
            let records = load_records(&input)?;
            if records.is_empty() {
                return Err(CliError::NoRecords);
            }
            match target {
                Some(path) => render_to_path(&records, &config, &path),
                None => {
                    let record = single_record(&records)?;
                    write_stdout(&mut out, &compile_record(record, &config))
                }
            }
        }
        Command::Frame { input } => {
            let records = load_records(&input)?;
            let markup = frame_markup(&records, &config);
            write_stdout(&mut out, &markup)
        }
        Command::CheckSandbox { tokens } => {
            let policy = SandboxPolicy::parse(&tokens)?;
            write_stdout(&mut out, &format!("ok: {}\n", policy.attribute_value()))
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_writer(io::stderr).with_max_level(level).with_target(false).init();
}

fn build_config(cli: &Cli) -> Result<PreviewConfig, CliError> {
    let mut config = PreviewConfig::from_env()?;
    if let Some(cdn) = &cli.tailwind_cdn {
        config.tailwind_cdn.clone_from(cdn);
    }
    if let Some(scale) = cli.scale {
        config.scale = scale;
    }
    config.validate()?;
    Ok(config)
}

fn load_records(input: &str) -> Result<Vec<ContentRecord>, CliError> {
    let raw = if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read { path: "<stdin>".to_owned(), source })?;
        buf
    } else {
        fs::read_to_string(input).map_err(|source| CliError::Read { path: input.to_owned(), source })?
    };
    let records = parse_records(&raw)?;
    tracing::debug!(count = records.len(), input, "records loaded");
    Ok(records)
}

fn resolve_lines(records: &[ContentRecord], json: bool) -> Result<String, CliError> {
    let mut out = String::new();
    for record in records {
        let branch = record.normalize().branch();
        if json {
            let line = serde_json::json!({ "identifier": record.identifier, "branch": branch.label() });
            out.push_str(&serde_json::to_string(&line)?);
        } else {
            out.push_str(&record.identifier);
            out.push('\t');
            out.push_str(branch.label());
        }
        out.push('\n');
    }
    Ok(out)
}

fn frame_markup(records: &[ContentRecord], config: &PreviewConfig) -> String {
    records
        .iter()
        .map(|record| {
            let document = compile_record(record, config);
            let mut markup = FrameMarkup::new(&record.identifier, &document, config.scale).render();
            markup.push('\n');
            markup
        })
        .collect()
}

fn single_record(records: &[ContentRecord]) -> Result<&ContentRecord, CliError> {
    match records {
        [] => Err(CliError::NoRecords),
        [record] => Ok(record),
        _ => Err(CliError::NeedsOutputDir(records.len())),
    }
}

/// File name for a record's document; identifiers are opaque, so anything
/// outside `[A-Za-z0-9_-]` becomes `_`.
fn output_file_name(record: &ContentRecord, index: usize) -> String {
    let stem: String = record
        .identifier
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if stem.is_empty() { format!("record-{index}.html") } else { format!("{stem}.html") }
}

/// One distinct file name per record. A name already taken gets the
/// record's index appended, then a counter if that is taken too.
fn output_file_names(records: &[ContentRecord]) -> Vec<String> {
    let mut used = HashSet::new();
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let base = output_file_name(record, index);
            let mut name = base.clone();
            let stem = base.trim_end_matches(".html");
            let mut attempt = 0usize;
            while used.contains(&name) {
                name = if attempt == 0 { format!("{stem}-{index}.html") } else { format!("{stem}-{index}-{attempt}.html") };
                attempt += 1;
            }
            used.insert(name.clone());
            name
        })
        .collect()
}

fn render_to_path(records: &[ContentRecord], config: &PreviewConfig, path: &Path) -> Result<(), CliError> {
    let write = |target: &Path, contents: &str| {
        fs::write(target, contents).map_err(|source| CliError::Write { path: target.display().to_string(), source })
    };
    if let [record] = records {
        if !path.is_dir() {
            return write(path, &compile_record(record, config));
        }
    }
    fs::create_dir_all(path).map_err(|source| CliError::Write { path: path.display().to_string(), source })?;
    for (record, name) in records.iter().zip(output_file_names(records)) {
        let target = path.join(name);
        write(&target, &compile_record(record, config))?;
        tracing::info!(identifier = %record.identifier, branch = record.normalize().branch().label(), path = %target.display(), "rendered");
    }
    Ok(())
}

fn write_stdout(out: &mut impl Write, text: &str) -> Result<(), CliError> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|source| CliError::Write { path: "<stdout>".to_owned(), source })
}
