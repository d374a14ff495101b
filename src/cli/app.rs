//! CLI definitions and entry point

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::commands;
use macsep::config::Config;
use macsep::output::OutputMode;
use macsep::shared::list::{ListFormat, ListStyle, SortOrder};

/// macsep - Reconcile MAC address lists against inventory manifests
#[derive(Parser, Debug)]
#[command(
    name = "macsep",
    version,
    about = "Reconcile MAC address lists against inventory manifests",
    long_about = "Check which MAC addresses from a list appear in a pasted equipment \
                  inventory export.\n\n\
                  Manifests are blocks of labeled fields separated by blank lines.\n\
                  Use '-' as a path to read that input from stdin."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Match a MAC list against an inventory manifest
    Reconcile {
        /// File with one MAC per line ('-' for stdin)
        #[arg(short, long)]
        targets: String,

        /// Inventory manifest export ('-' for stdin)
        #[arg(short, long)]
        manifest: String,

        /// Append the full copy-ready report
        #[arg(short, long)]
        report: bool,

        #[command(flatten)]
        list: ListArgs,
    },

    /// List manifest MACs by location and report malformed blocks
    Organize {
        /// Manifest with MAC: / LOCAL ESTOQUE: blocks ('-' for stdin)
        #[arg(short, long)]
        manifest: String,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Normalize a MAC list and show which lines are invalid
    Normalize {
        /// File with one MAC per line ('-' for stdin)
        #[arg(short, long)]
        targets: String,
    },

    /// Print example input
    Sample {
        /// Number of blocks for random samples
        #[arg(short, long, default_value_t = 10)]
        count: usize,

        /// Which sample to print
        #[arg(short, long, value_enum, default_value_t = SampleKind::Random)]
        kind: SampleKind,
    },

    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

/// How MAC lists are printed
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Layout for MAC lists: comma, spaced, lines, bullets, numbered
    #[arg(short, long, default_value = "comma")]
    pub style: ListStyle,

    /// Order for MAC lists: input, alpha, numeric
    #[arg(long, default_value = "input")]
    pub sort: SortOrder,

    /// Drop repeated MACs from lists
    #[arg(long)]
    pub dedup: bool,

    /// Suffix for each item, joined by spaces (replaces --style)
    #[arg(long)]
    pub separator: Option<String>,

    /// Suffix for the final item when --separator is set
    #[arg(long, requires = "separator")]
    pub last_separator: Option<String>,
}

impl From<ListArgs> for ListFormat {
    fn from(args: ListArgs) -> Self {
        Self {
            style: args.style,
            sort: args.sort,
            dedup: args.dedup,
            separators: args
                .separator
                .map(|sep| (sep, args.last_separator.unwrap_or_default())),
        }
    }
}

/// Sample data to print
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleKind {
    /// Random MAC / location blocks
    Random,
    /// A well-formed manifest
    Valid,
    /// A manifest with malformed blocks
    Errors,
    /// An inventory export
    Export,
    /// A target list matching the inventory export
    Targets,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file location
    Path,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let config = Config::load();
    let output_mode = OutputMode::from_flags(cli.json, config.output.json);

    match cli.command {
        Some(Command::Reconcile {
            targets,
            manifest,
            report,
            list,
        }) => commands::reconcile(&targets, &manifest, report, list.into(), &config, output_mode),
        Some(Command::Organize { manifest, list }) => {
            commands::organize(&manifest, list.into(), output_mode)
        },
        Some(Command::Normalize { targets }) => commands::normalize(&targets, output_mode),
        Some(Command::Sample { count, kind }) => commands::sample(kind, count, output_mode),
        Some(Command::Config { action }) => commands::config(action, &config, output_mode),
        Some(Command::Version) => {
            print_version(output_mode, false);
            Ok(())
        },
        None => {
            print_version(output_mode, true);
            Ok(())
        },
    }
}

fn print_version(mode: OutputMode, with_hint: bool) {
    if mode == OutputMode::Json {
        let mut value = serde_json::json!({ "version": macsep::VERSION });
        if with_hint {
            value["hint"] = serde_json::json!("Use --help for usage");
        }
        println!("{value}");
    } else {
        println!("macsep v{}", macsep::VERSION);
        if with_hint {
            println!("\nRun 'macsep --help' for usage");
            println!("Run 'macsep sample --kind export' for an example manifest");
        }
    }
}
