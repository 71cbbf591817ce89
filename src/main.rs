//! dirscope - interactive explorer for recursive directory sizes.
//!
//! Usage:
//!   dirscope [PATH]          Launch interactive TUI
//!   dirscope list [PATH]     Print the ranked subdirectories once
//!   dirscope --help          Show help

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dirscope_core::{format_size, DirectoryView, ScanConfig};
use dirscope_scan::DirScanner;
use dirscope_tui::{ThemeVariant, TuiConfig};

#[derive(Parser)]
#[command(
    name = "dirscope",
    version,
    about = "Interactive explorer for recursive directory sizes",
    long_about = "dirscope shows the immediate subdirectories of a directory ranked by \
                  their recursive size.\n\n\
                  Launch the interactive TUI by running `dirscope [PATH]`, or print a \
                  one-off listing with `dirscope list [PATH]`."
)]
struct Cli {
    /// Directory to explore (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Color theme
    #[arg(long, default_value_t = ThemeVariant::Dark)]
    theme: ThemeVariant,

    #[command(flatten)]
    scan: ScanArgs,

    /// Write logs to this file (the TUI owns the terminal)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct ScanArgs {
    /// Directory levels to descend below each listed subdirectory
    #[arg(long, global = true)]
    max_depth: Option<u32>,

    /// Walker threads for nested traversal (0 = shared pool)
    #[arg(long, global = true, default_value_t = 1)]
    threads: usize,

    /// Count a hardlinked file once per scan instead of once per link
    #[arg(long, global = true)]
    count_hardlinks_once: bool,
}

impl ScanArgs {
    fn to_config(&self) -> Result<ScanConfig> {
        ScanConfig::builder()
            .max_depth(self.max_depth)
            .threads(self.threads)
            .count_hardlinks_once(self.count_hardlinks_once)
            .build()
            .wrap_err("invalid scan options")
    }
}

#[derive(Subcommand)]
enum Command {
    /// Scan once and print the ranked subdirectories
    List {
        /// Directory to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let scan_config = cli.scan.to_config()?;

    match cli.command {
        Some(Command::List { path, top, format }) => {
            init_tracing(cli.verbose, cli.log_file.as_deref(), true)?;
            run_list(&path, scan_config, top, format)?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            init_tracing(cli.verbose, cli.log_file.as_deref(), false)?;
            let config = TuiConfig::new()
                .with_theme(cli.theme)
                .with_scan_config(scan_config);
            Ok(dirscope_tui::start_session(&cli.path, config))
        }
    }
}

/// Install the log subscriber.
///
/// Logs go to `log_file` when given, otherwise to stderr if `to_stderr`
/// is set; with neither, nothing is installed.
fn init_tracing(verbose: bool, log_file: Option<&Path>, to_stderr: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(level)
    });

    if let Some(path) = log_file {
        let file = File::create(path)
            .wrap_err_with(|| format!("cannot create log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(filter)
            .init();
    } else if to_stderr {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    Ok(())
}

fn run_list(path: &Path, config: ScanConfig, top: usize, format: OutputFormat) -> Result<()> {
    let view = DirScanner::with_config(config)
        .scan(path)
        .wrap_err("could not scan directory")?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&view)?;
            println!("{json}");
        }
        OutputFormat::Text => print!("{}", format_listing(&view, top)),
    }

    Ok(())
}

/// Render the text listing: header, then one line per entry.
fn format_listing(view: &DirectoryView, top: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("Path: {}\n", view.path().display()));
    out.push_str(&format!("Total size: {}\n", format_size(view.total_size())));
    out.push('\n');

    if view.is_empty() {
        out.push_str("(No subdirectories or permission denied.)\n");
        return out;
    }

    for (i, entry) in view.entries().iter().take(top).enumerate() {
        let percent = if view.total_size() > 0 {
            entry.size() as f64 / view.total_size() as f64 * 100.0
        } else {
            0.0
        };
        out.push_str(&format!(
            "{:>12} {:>5.1}% {} {}\n",
            format_size(entry.size()),
            percent,
            make_bar(view.ratio(i), 20),
            entry.name()
        ));
    }

    let shown = top.min(view.len());
    out.push_str(&format!(
        "\nShowing {shown} of {} subdirectories | sorted by size (largest first)\n",
        view.len()
    ));
    if view.skipped() > 0 {
        out.push_str(&format!("({} unreadable entries skipped)\n", view.skipped()));
    }

    out
}

/// Text bar: cells rounded down, at least one for any non-zero ratio.
fn make_bar(ratio: f64, width: usize) -> String {
    let filled = if ratio > 0.0 {
        ((ratio.min(1.0) * width as f64).floor() as usize).clamp(1, width)
    } else {
        0
    };
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
