use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::constants::{
    APP_NAME_LOWER, ENV_COLOR, ENV_CONFIG, ENV_GUIDES, ENV_PROMOTE_ORPHANS, ENV_TIME_RANGE,
};
use crate::data::types::TraceListTimeRange;
use crate::domain::details::DetailsTab;
use crate::domain::explorer::{ColorMode, TreeGuides};

#[derive(Parser)]
#[command(name = APP_NAME_LOWER)]
#[command(version, about = "Explore agent traces from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Colour output (auto, always, never)
    #[arg(long, global = true, env = ENV_COLOR, value_parser = parse_color_mode)]
    pub color: Option<ColorMode>,

    /// Tree guide style (unicode or ascii)
    #[arg(long, global = true, env = ENV_GUIDES, value_parser = parse_tree_guides)]
    pub guides: Option<TreeGuides>,

    /// Shorthand for --guides ascii
    #[arg(long, global = true)]
    pub ascii: bool,

    /// List spans whose parent is missing from the trace as extra roots
    #[arg(long, global = true, env = ENV_PROMOTE_ORPHANS)]
    pub promote_orphans: bool,

    /// Hide attribute chips on tree rows
    #[arg(long, global = true)]
    pub no_attributes: bool,
}

/// Parse colour mode from CLI/env string
fn parse_color_mode(s: &str) -> Result<ColorMode, String> {
    match s.to_lowercase().as_str() {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => Err(format!(
            "Invalid color mode '{}'. Valid options: auto, always, never",
            s
        )),
    }
}

/// Parse tree guide style from CLI/env string
fn parse_tree_guides(s: &str) -> Result<TreeGuides, String> {
    match s.to_lowercase().as_str() {
        "unicode" => Ok(TreeGuides::Unicode),
        "ascii" => Ok(TreeGuides::Ascii),
        _ => Err(format!(
            "Invalid guide style '{}'. Valid options: unicode, ascii",
            s
        )),
    }
}

fn parse_time_range(s: &str) -> Result<TraceListTimeRange, String> {
    s.parse()
}

fn parse_details_tab(s: &str) -> Result<DetailsTab, String> {
    s.parse()
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Render the span tree of one trace
    Tree {
        /// Trace details JSON (`{"spans": [...]}` or a bare array), `-` for stdin
        input: PathBuf,

        /// Collapse a span (repeatable)
        #[arg(long, value_name = "SPAN_ID")]
        collapse: Vec<String>,

        /// Collapse every span that has children
        #[arg(long)]
        collapse_all: bool,

        /// Highlight a span as selected
        #[arg(long, value_name = "SPAN_ID")]
        select: Option<String>,

        /// Render only the subtree under a span
        #[arg(long, value_name = "SPAN_ID")]
        focus: Option<String>,
    },
    /// Show the details panel of one span
    Span {
        /// Trace details JSON, `-` for stdin
        input: PathBuf,

        /// Span to show (defaults to the first span of the trace)
        span_id: Option<String>,

        /// Panel tab (overview, tools, raw, all)
        #[arg(long, short = 't', value_parser = parse_details_tab)]
        tab: Option<DetailsTab>,
    },
    /// List traces as a table
    List {
        /// Trace list JSON (`{"traces": [...]}` or a bare array), `-` for stdin
        input: PathBuf,

        /// Case-insensitive filter over id, name, kind, input and output
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Only traces started within this window (10m, 30m, 1h, 3h, 6h, 12h, 1d, 3d, 7d)
        #[arg(long, env = ENV_TIME_RANGE, value_parser = parse_time_range)]
        time_range: Option<TraceListTimeRange>,

        /// Maximum number of rows
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Input/output preview width
        #[arg(long)]
        preview_chars: Option<usize>,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub config: Option<PathBuf>,
    pub color: Option<ColorMode>,
    pub guides: Option<TreeGuides>,
    pub promote_orphans: bool,
    pub no_attributes: bool,
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Commands) {
    let cli = Cli::parse();
    let config = CliConfig {
        config: cli.config,
        color: cli.color,
        // --ascii wins over --guides
        guides: if cli.ascii {
            Some(TreeGuides::Ascii)
        } else {
            cli.guides
        },
        promote_orphans: cli.promote_orphans,
        no_attributes: cli.no_attributes,
    };
    (config, cli.command)
}
