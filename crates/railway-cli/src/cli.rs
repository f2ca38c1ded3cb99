use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "railway",
    about = "Railway: inspect the error taxonomy and render problem reports",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List taxonomy kinds in type-number order
    Kinds {
        /// Only list one family (e.g. `parameter`, `business-rule`)
        #[arg(long)]
        family: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the metadata of one kind
    Describe {
        /// Type number of the kind (e.g. 6001)
        type_number: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a system error and print its problem report
    Render {
        /// Type number of the kind (e.g. 6001)
        type_number: u32,

        /// Subject the error is about (parameter, rule or resource)
        #[arg(long)]
        subject: String,

        /// Message template argument; repeat in template order.
        /// Values that parse as JSON are used as JSON, others as strings
        #[arg(long = "arg")]
        args: Vec<String>,

        /// Offending value, parsed like `--arg`
        #[arg(long)]
        actual: Option<String>,

        /// Problem instance (absolute URI or path relative to the config base)
        #[arg(long)]
        instance: Option<String>,

        /// Error id to attach
        #[arg(long)]
        error_id: Option<String>,

        /// Path to a report config TOML
        #[arg(long)]
        config: Option<String>,

        /// Print the one-line format instead of the JSON report
        #[arg(long)]
        line: bool,
    },

    /// Generate an error id for a kind
    ErrorId {
        /// Type number of the kind (e.g. 6001)
        type_number: u32,

        /// Instance component; defaults to a time-derived value
        #[arg(long)]
        instance: Option<u64>,
    },
}
