//! registrar CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

use commands::backup::BackupAction;
use commands::list::ListKind;

#[derive(Parser)]
#[command(name = "registrar", version, about = "Student/course records manager")]
struct Cli {
    /// Config file path (default: ./registrar.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create starter config and a seeded data directory
    Init,

    /// Run a self-contained in-memory demo session
    Demo,

    /// List records from the data directory
    List {
        #[arg(value_enum)]
        kind: ListKind,
    },

    /// Validate CSV files and install them as the data directory
    Import {
        /// Students CSV to import
        #[arg(long)]
        students: Option<PathBuf>,

        /// Courses CSV to import
        #[arg(long)]
        courses: Option<PathBuf>,
    },

    /// Export the data directory's records to another directory
    Export {
        /// Destination directory
        #[arg(long, default_value = "./registrar-export")]
        out: PathBuf,
    },

    /// Manage timestamped backups of the data directory
    Backup {
        #[command(subcommand)]
        action: BackupAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("registrar=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = config::load_config_from(cli.config.as_deref(), cli.data_dir).and_then(|cfg| {
        match cli.command {
            Commands::Init => commands::init::execute(&cfg),
            Commands::Demo => commands::demo::execute(),
            Commands::List { kind } => commands::list::execute(kind, &cfg),
            Commands::Import { students, courses } => {
                commands::import::execute(students, courses, &cfg)
            }
            Commands::Export { out } => commands::export::execute(&out, &cfg),
            Commands::Backup { action } => commands::backup::execute(action, &cfg),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
