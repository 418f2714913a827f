use std::path::PathBuf;

use clap::{Parser, Subcommand};

use sign_cli::commands::{catalog_ops, compose_ops, config_ops, key_ops};
use sign_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "signtool", about = "Sign input method diagnostics")]
struct Cli {
    /// Directory for the JSON trace log (with the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    /// Custom settings TOML to use instead of the defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show ranked candidates for a composition prefix
    Lookup {
        /// Sign catalog file
        catalog_file: String,
        /// Composition prefix
        query: String,
        /// Page to show (1-based)
        #[arg(long, default_value = "1")]
        page: usize,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the collation key of a composition
    Key {
        composition: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Summarise a catalog file
    Check {
        /// Sign catalog file
        catalog_file: String,
    },
    /// Replay keystrokes against an in-memory document
    Compose {
        /// Sign catalog file
        catalog_file: String,
        /// Key script: space commits, `<` is backspace, `{name}` for other keys
        keys: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Settings file operations
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the default settings TOML
    Export,
    /// Validate a custom settings TOML file
    Validate { file: String },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.log_dir {
        init_tracing(dir);
    }
    if let Some(file) = &cli.settings {
        config_ops::settings_load(file);
    }

    match cli.command {
        Command::Lookup {
            catalog_file,
            query,
            page,
            json,
        } => catalog_ops::lookup(&catalog_file, &query, page, json),
        Command::Key { composition, json } => key_ops::key(&composition, json),
        Command::Check { catalog_file } => catalog_ops::check(&catalog_file),
        Command::Compose {
            catalog_file,
            keys,
            json,
        } => compose_ops::compose(&catalog_file, &keys, json),
        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
