use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{debug, error, info};
use veil::{
    DEFAULT_MAX_INPUT_LENGTH, Error, MaskedJsonExt, SanitizedDisplay, is_safe_filename,
    mask_email, mask_sensitive_data, sanitize_log_message, tracing::TracingSanitizedExt,
    validate_input_length,
};

use crate::{config::Settings, logging, service};

#[derive(Parser)]
#[command(name = "veil")]
#[command(about = "veil: mask sensitive data before it reaches logs and output")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show the current settings")]
    ShowConfig,

    #[command(about = "Create an item and print it")]
    CreateItem {
        #[arg(long, default_value_t = 1, help = "Item ID")]
        id: i64,

        #[arg(long, default_value = "Sample Item", help = "Item name")]
        name: String,

        #[arg(long, default_value_t = 100.0, allow_negative_numbers = true, help = "Price, must be positive")]
        price: f64,

        #[arg(long, help = "Item description")]
        description: Option<String>,
    },

    #[command(about = "Partially mask an email address")]
    MaskEmail {
        #[arg(help = "Email address to mask")]
        email: String,
    },

    #[command(about = "Mask emails, API keys and UUIDs in a message")]
    Sanitize {
        #[arg(help = "Free-text message")]
        message: String,
    },

    #[command(about = "Mask sensitive fields of a JSON object")]
    MaskRecord {
        #[arg(help = "JSON object, e.g. '{\"password\": \"x\"}'")]
        record: String,
    },

    #[command(about = "Check whether a filename is safe to use")]
    CheckFilename {
        #[arg(help = "Filename to check")]
        filename: String,
    },

    #[command(about = "Validate and truncate an input value")]
    Validate {
        #[arg(help = "Value to validate")]
        value: String,

        #[arg(long, default_value_t = DEFAULT_MAX_INPUT_LENGTH, help = "Maximum length in characters")]
        max_length: usize,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = Settings::load()?;
    if !logging::init_logging(&settings.log_level)? {
        debug!("logging already initialized, keeping the existing subscriber");
    }
    debug!(app = %settings.app_name, "settings loaded");

    match cli.command {
        Commands::ShowConfig => show_config(&settings),
        Commands::CreateItem {
            id,
            name,
            price,
            description,
        } => create_item(id, &name, price, description),
        Commands::MaskEmail { email } => {
            println!("{}", mask_email(&email));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Sanitize { message } => {
            println!("{}", sanitize_log_message(&message));
            Ok(ExitCode::SUCCESS)
        }
        Commands::MaskRecord { record } => mask_record(&record),
        Commands::CheckFilename { filename } => {
            if is_safe_filename(&filename) {
                println!("safe");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("unsafe");
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Validate { value, max_length } => {
            match validate_input_length(&value, max_length) {
                Ok(valid) => {
                    println!("{valid}");
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    error!("{}", err.sanitized_display());
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

fn show_config(settings: &Settings) -> anyhow::Result<ExitCode> {
    info!("current settings:");
    let record = mask_sensitive_data(settings.to_record());
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(ExitCode::SUCCESS)
}

fn create_item(
    id: i64,
    name: &str,
    price: f64,
    description: Option<String>,
) -> anyhow::Result<ExitCode> {
    match service::create_item(id, name, price, description) {
        Ok(item) => {
            info!("item created");
            let value = item.masked_json().to_value()?;
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!("failed to create item: {}", err.sanitized_display());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn mask_record(input: &str) -> anyhow::Result<ExitCode> {
    let parsed: Value = serde_json::from_str(input).context("record is not valid JSON")?;
    let Value::Object(record) = parsed else {
        return Err(Error::validation("record must be a JSON object").into());
    };

    debug!(record = record.masked_json().tracing_sanitized(), "masking record");
    let masked = mask_sensitive_data(record);
    println!("{}", serde_json::to_string_pretty(&masked)?);
    Ok(ExitCode::SUCCESS)
}
