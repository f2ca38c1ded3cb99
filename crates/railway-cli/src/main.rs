//! Railway CLI: the `railway` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Kinds { family, json } => commands::kinds::run(family, json),

        Commands::Describe { type_number, json } => commands::describe::run(type_number, json),

        Commands::Render {
            type_number,
            subject,
            args,
            actual,
            instance,
            error_id,
            config,
            line,
        } => commands::render::run(commands::render::Args {
            type_number,
            subject,
            args,
            actual,
            instance,
            error_id,
            config,
            line,
        }),

        Commands::ErrorId {
            type_number,
            instance,
        } => commands::error_id::run(type_number, instance),
    }
}
