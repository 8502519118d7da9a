use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for seatchart
#[derive(Parser)]
#[command(
    name = "seatchart",
    version = env!("CARGO_PKG_VERSION"),
    about = "A seating-chart editor: names, memos, colors, attendance and sketches per seat, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the storage namespace (e.g. seat9, seat10)
    #[arg(global = true, long = "namespace", short = 'n')]
    pub namespace: Option<String>,

    /// Disable ANSI colors in the grid view
    #[arg(global = true, long = "plain")]
    pub plain: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Grid dimensions, read fresh on every invocation and never stored.
/// Non-numeric values count as zero and give an empty grid.
#[derive(Args, Clone, Debug, Default)]
pub struct GridArgs {
    /// Number of rows (default: config `default_rows`)
    #[arg(long = "rows", short = 'r')]
    pub rows: Option<String>,

    /// Number of columns (default: config `default_cols`)
    #[arg(long = "cols", short = 'c')]
    pub cols: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check the configuration file for missing fields and add their defaults"
        )]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the seat grid
    Show {
        #[command(flatten)]
        grid: GridArgs,

        /// List every seat with all of its fields
        #[arg(long = "details")]
        details: bool,
    },

    /// Edit one seat (only the given fields change)
    Edit {
        /// Seat position (ROW-COL, e.g. 0-3)
        position: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        memo: Option<String>,

        /// #rrggbb or palette index 0-9
        #[arg(long)]
        color: Option<String>,

        /// present, absent or other
        #[arg(long)]
        attendance: Option<String>,

        #[command(flatten)]
        grid: GridArgs,
    },

    /// Swap name, memo and color of two seats
    Swap {
        /// First seat (ROW-COL)
        a: String,

        /// Second seat (ROW-COL)
        b: String,

        #[command(flatten)]
        grid: GridArgs,
    },

    /// Randomly redistribute name, memo and color over all seats
    Shuffle {
        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        grid: GridArgs,
    },

    /// Delete all seat data and sketches of the namespace
    Reset {
        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,

        #[command(flatten)]
        grid: GridArgs,
    },

    /// Draw on, clear or export a sketch
    Sketch {
        #[command(subcommand)]
        action: SketchAction,
    },

    /// Export the seat chart
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        grid: GridArgs,
    },

    /// Interactive editor: one command per line (type `help`)
    Shell {
        /// Read commands from a file instead of stdin
        #[arg(long, value_name = "FILE")]
        script: Option<String>,

        #[command(flatten)]
        grid: GridArgs,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum SketchAction {
    /// Draw one stroke through the given points
    Draw {
        /// Seat position; the global sketch when omitted
        #[arg(long)]
        seat: Option<String>,

        /// Stroke points as X,Y (at least one)
        #[arg(required = true, num_args = 1.., value_name = "X,Y", allow_hyphen_values = true)]
        points: Vec<String>,
    },

    /// Erase a sketch
    Clear {
        #[arg(long)]
        seat: Option<String>,
    },

    /// Write a stored sketch to a PNG file
    Export {
        #[arg(long)]
        seat: Option<String>,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
