//! CLI Tooling
//!
//! Command-line interface for all inventory operations. One-shot
//! subcommands map onto the store contract; `menu` runs the interactive
//! shell loop.
//!
//! Duplicate and missing ids are ordinary outcomes: they render as plain
//! messages, not process errors.

use crate::config::ConfigLoader;
use crate::error::ApiError;
use crate::record::Record;
use crate::store::Inventory;
use crate::views::{
    format_record_json, format_record_text, format_records_json, format_records_text,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Stockpile CLI - flat-file inventory tracking
#[derive(Parser)]
#[command(name = "stockpile")]
#[command(about = "Single-user inventory tracking with flat-file persistence")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backing file for inventory records (overrides config)
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new record
    Add {
        /// Record name
        name: String,
        /// Quantity on hand
        quantity: i64,
        /// Unit price
        price: f64,
        /// Record id (default: highest id + 1)
        #[arg(long)]
        id: Option<i64>,
    },
    /// Remove a record by id
    Remove {
        /// Record id
        id: i64,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Update fields of an existing record
    Update {
        /// Record id
        id: i64,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New quantity
        #[arg(long)]
        quantity: Option<i64>,
        /// New price
        #[arg(long)]
        price: Option<f64>,
    },
    /// Show one record
    Show {
        /// Record id
        id: i64,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List records
    List {
        /// Show only low-stock records
        #[arg(long)]
        low_stock: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the next free record id
    NextId,
    /// Run the interactive menu shell
    Menu,
}

/// Logging overrides carried from CLI flags into logging initialization.
#[derive(Debug, Clone, Default)]
pub struct LoggingOverrides {
    pub level: Option<String>,
    pub format: Option<String>,
    pub output: Option<String>,
    pub file: Option<PathBuf>,
}

impl Cli {
    pub fn logging_overrides(&self) -> LoggingOverrides {
        LoggingOverrides {
            level: self.log_level.clone(),
            format: self.log_format.clone(),
            output: self.log_output.clone(),
            file: self.log_file.clone(),
        }
    }
}

/// CLI context owning the store for the duration of one invocation.
pub struct CliContext {
    store: Inventory,
}

impl CliContext {
    /// Create a new CLI context.
    ///
    /// Loads configuration, initializes logging (CLI flags win over config),
    /// resolves the backing file path (CLI flag wins over config), and opens
    /// the store. Logging comes up before the store so load-time
    /// diagnostics are not lost.
    pub fn new(
        data_file: Option<PathBuf>,
        config_path: Option<PathBuf>,
        overrides: &LoggingOverrides,
    ) -> Result<Self, ApiError> {
        let cwd = std::env::current_dir()
            .map_err(|e| ApiError::ConfigError(format!("Failed to resolve working directory: {}", e)))?;
        let config = if let Some(cfg_path) = &config_path {
            ConfigLoader::load_from_file(cfg_path)
        } else {
            ConfigLoader::load(&cwd)
        }
        .map_err(|e| ApiError::ConfigError(format!("Failed to load config: {}", e)))?;

        let mut logging_config = config.logging.clone();
        if let Some(level) = &overrides.level {
            logging_config.level = level.clone();
        }
        if let Some(format) = &overrides.format {
            logging_config.format = format.clone();
        }
        if let Some(output) = &overrides.output {
            logging_config.output = output.clone();
        }
        if let Some(file) = &overrides.file {
            logging_config.file = Some(file.clone());
        }
        crate::logging::init_logging(Some(&logging_config))?;

        let path = data_file.unwrap_or_else(|| config.storage.resolve_data_file(&cwd));
        info!("Opening inventory at {}", path.display());
        let store = Inventory::open(path);

        Ok(Self { store })
    }

    /// Execute a CLI command.
    pub fn execute(&mut self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Add {
                name,
                quantity,
                price,
                id,
            } => {
                let id = id.unwrap_or_else(|| self.store.next_id());
                let record = Record::new(id, name.clone(), *quantity, *price);
                if self.store.add(record) {
                    Ok(format!("Added record {}.", id))
                } else {
                    Ok(format!("A record with id {} already exists.", id))
                }
            }
            Commands::Remove { id, force } => {
                if !force {
                    use dialoguer::Confirm;
                    let confirmed = Confirm::new()
                        .with_prompt(format!("Remove record {}?", id))
                        .interact()
                        .map_err(|e| {
                            ApiError::ConfigError(format!("Failed to get user input: {}", e))
                        })?;
                    if !confirmed {
                        return Ok("Removal cancelled.".to_string());
                    }
                }
                if self.store.remove(*id) {
                    Ok(format!("Removed record {}.", id))
                } else {
                    Ok(format!("No record with id {}.", id))
                }
            }
            Commands::Update {
                id,
                name,
                quantity,
                price,
            } => {
                let Some(existing) = self.store.find_by_id(*id) else {
                    return Ok(format!("No record with id {}.", id));
                };
                let updated = Record::new(
                    *id,
                    name.clone().unwrap_or(existing.name),
                    quantity.unwrap_or(existing.quantity),
                    price.unwrap_or(existing.price),
                );
                self.store.update(updated);
                Ok(format!("Updated record {}.", id))
            }
            Commands::Show { id, format } => match self.store.find_by_id(*id) {
                Some(record) => {
                    if format == "json" {
                        format_record_json(&record)
                            .map_err(|e| ApiError::ConfigError(e.to_string()))
                    } else {
                        Ok(format_record_text(&record))
                    }
                }
                None => Ok(format!("No record with id {}.", id)),
            },
            Commands::List { low_stock, format } => {
                let (title, records) = if *low_stock {
                    ("Low Stock", self.store.list_low_stock())
                } else {
                    ("Inventory", self.store.list_all())
                };
                if format == "json" {
                    format_records_json(&records)
                        .map_err(|e| ApiError::ConfigError(e.to_string()))
                } else {
                    Ok(format_records_text(title, &records))
                }
            }
            Commands::NextId => Ok(self.store.next_id().to_string()),
            Commands::Menu => self.run_menu(),
        }
    }

    /// Interactive menu loop: select an action, prompt for its fields,
    /// print the outcome, repeat until Exit.
    fn run_menu(&mut self) -> Result<String, ApiError> {
        use dialoguer::Select;

        const ACTIONS: &[&str] = &[
            "Add record",
            "Update record",
            "Remove record",
            "View all records",
            "View low stock",
            "Find record by id",
            "Exit",
        ];

        loop {
            let selection = Select::new()
                .with_prompt("Inventory menu")
                .items(ACTIONS)
                .default(0)
                .interact()
                .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;

            match selection {
                0 => self.menu_add()?,
                1 => self.menu_update()?,
                2 => self.menu_remove()?,
                3 => println!("{}", format_records_text("Inventory", &self.store.list_all())),
                4 => println!(
                    "{}",
                    format_records_text("Low Stock", &self.store.list_low_stock())
                ),
                5 => self.menu_find()?,
                _ => return Ok("Goodbye.".to_string()),
            }
        }
    }

    fn menu_add(&mut self) -> Result<(), ApiError> {
        use dialoguer::Input;

        let id: i64 = Input::new()
            .with_prompt("Record id")
            .default(self.store.next_id())
            .interact_text()
            .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;
        let name: String = Input::new()
            .with_prompt("Name")
            .interact_text()
            .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;
        let quantity: i64 = Input::new()
            .with_prompt("Quantity")
            .interact_text()
            .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;
        let price: f64 = Input::new()
            .with_prompt("Price")
            .interact_text()
            .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;

        if self.store.add(Record::new(id, name, quantity, price)) {
            println!("Added record {}.", id);
        } else {
            println!("A record with id {} already exists.", id);
        }
        Ok(())
    }

    fn menu_update(&mut self) -> Result<(), ApiError> {
        use dialoguer::Input;

        let id: i64 = Input::new()
            .with_prompt("Record id")
            .interact_text()
            .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;
        let Some(existing) = self.store.find_by_id(id) else {
            println!("No record with id {}.", id);
            return Ok(());
        };
        let name: String = Input::new()
            .with_prompt("Name")
            .default(existing.name.clone())
            .interact_text()
            .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;
        let quantity: i64 = Input::new()
            .with_prompt("Quantity")
            .default(existing.quantity)
            .interact_text()
            .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;
        let price: f64 = Input::new()
            .with_prompt("Price")
            .default(existing.price)
            .interact_text()
            .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;

        self.store.update(Record::new(id, name, quantity, price));
        println!("Updated record {}.", id);
        Ok(())
    }

    fn menu_remove(&mut self) -> Result<(), ApiError> {
        use dialoguer::{Confirm, Input};

        let id: i64 = Input::new()
            .with_prompt("Record id")
            .interact_text()
            .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove record {}?", id))
            .interact()
            .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;
        if !confirmed {
            println!("Removal cancelled.");
            return Ok(());
        }
        if self.store.remove(id) {
            println!("Removed record {}.", id);
        } else {
            println!("No record with id {}.", id);
        }
        Ok(())
    }

    fn menu_find(&mut self) -> Result<(), ApiError> {
        use dialoguer::Input;

        let id: i64 = Input::new()
            .with_prompt("Record id")
            .interact_text()
            .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;
        match self.store.find_by_id(id) {
            Some(record) => println!("{}", format_record_text(&record)),
            None => println!("No record with id {}.", id),
        }
        Ok(())
    }
}
