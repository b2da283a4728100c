//! `qklist` command-line entry point.
//!
//! # Responsibility
//! - Parse commands and resolve the config that names the item store.
//! - Call `ListManager` and render its results for a terminal.
//! - Map error kinds to stable process exit codes.

mod render;

use clap::{Parser, Subcommand};
use log::{info, warn};
use qklist_core::config::{config_file_path, default_db_path, init_app, open_store};
use qklist_core::{
    core_version, default_log_level, init_logging, AppConfig, ConfigError, JsonFileStore,
    ListError, ListManager, RecordStore, DEFAULT_PRIORITY,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DIR_ERROR_CODE: u8 = 1;
const FILE_ERROR_CODE: u8 = 2;

#[derive(Parser)]
#[command(name = "qklist")]
#[command(about = "Quick personal task list")]
#[command(version = core_version())]
struct Cli {
    /// Config file to use instead of the per-user default
    #[arg(long, global = true, env = "QKLIST_CONFIG")]
    config: Option<PathBuf>,

    /// Write rolling logs into this absolute directory
    #[arg(long, global = true, env = "QKLIST_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log level used with --log-dir
    #[arg(long, global = true, env = "QKLIST_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the config file and an empty item store
    Init {
        /// Item store location (defaults to ~/.qklist.json)
        #[arg(long)]
        db_path: Option<PathBuf>,
    },
    /// Add a new item
    Add {
        /// Description words
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
        #[arg(short, long, default_value_t = DEFAULT_PRIORITY,
              value_parser = clap::value_parser!(i64).range(1..=3))]
        priority: i64,
    },
    /// Show all items
    List,
    /// Mark an item as done
    Complete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Remove one item by ID
    Remove {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Remove every item
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Failure reported to the user with its exit code.
struct CliError {
    message: String,
    code: u8,
}

impl From<ListError> for CliError {
    fn from(value: ListError) -> Self {
        Self {
            message: render::list_error(&value),
            code: u8::try_from(value.kind().code()).unwrap_or(FILE_ERROR_CODE),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        let code = match value {
            ConfigError::Dir { .. } | ConfigError::MissingHomeDir => DIR_ERROR_CODE,
            _ => FILE_ERROR_CODE,
        };
        Self {
            message: render::config_error(&value),
            code,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self {
            message: format!("terminal i/o failed: {value}"),
            code: FILE_ERROR_CODE,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            ExitCode::from(err.code)
        }
    }
}

fn setup_logging(cli: &Cli) {
    let Some(log_dir) = cli.log_dir.as_deref() else {
        return;
    };
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = match cli.config {
        Some(path) => path,
        None => config_file_path()?,
    };

    match cli.command {
        Commands::Init { db_path } => init(&config_path, db_path),
        Commands::Add {
            description,
            priority,
        } => {
            let item = open_manager(&config_path)?.add(description.as_slice(), priority)?;
            println!("{}", render::added(&item));
            Ok(())
        }
        Commands::List => {
            let items = open_manager(&config_path)?.list()?;
            print!("{}", render::item_table(&items));
            Ok(())
        }
        Commands::Complete { id } => {
            let item = open_manager(&config_path)?.set_done(id)?;
            println!("{}", render::completed(id, &item));
            Ok(())
        }
        Commands::Remove { id, force } => remove(&mut open_manager(&config_path)?, id, force),
        Commands::Clear { force } => clear(&mut open_manager(&config_path)?, force),
    }
}

fn open_manager(config_path: &Path) -> Result<ListManager<JsonFileStore>, CliError> {
    let config = AppConfig::load(config_path)?;
    info!("event=cli_start module=cli status=ok");
    Ok(ListManager::new(open_store(&config)))
}

fn init(config_path: &Path, db_path: Option<PathBuf>) -> Result<(), CliError> {
    let database = match db_path {
        Some(path) => path,
        None => default_db_path()?,
    };
    let config = AppConfig::new(database);
    init_app(config_path, &config)?;
    println!("config saved to {}", config_path.display());
    println!("items are stored in {}", config.database.display());
    Ok(())
}

fn remove<S: RecordStore>(
    manager: &mut ListManager<S>,
    id: i64,
    force: bool,
) -> Result<(), CliError> {
    if !force {
        let items = manager.list()?;
        let target = usize::try_from(id)
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|index| items.get(index));
        // Out-of-range ids fall through so the manager reports them.
        if let Some(item) = target {
            if !confirm(&format!("Delete item #{id}: {}?", item.description))? {
                println!("Operation canceled");
                return Ok(());
            }
        }
    }

    let item = manager.remove(id)?;
    println!("{}", render::removed(id, &item));
    Ok(())
}

fn clear<S: RecordStore>(manager: &mut ListManager<S>, force: bool) -> Result<(), CliError> {
    if !force && !confirm("Delete all items?")? {
        println!("Operation canceled");
        return Ok(());
    }
    manager.remove_all()?;
    println!("All items were removed");
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool, CliError> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer)? == 0 {
        warn!("event=confirm module=cli status=eof");
        return Ok(false);
    }
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
