use rapid_ai::APP_DIR_NAME;
use rapid_ai::commands::CommandContext;
use rapid_ai::commands::ask::{self, QuickActionKind};
use rapid_ai::commands::settings;
use rapid_ai::error::RapidAiError;
use rapid_ai::logger::{DEFAULT_CONSOLE_LEVEL, initialize as LoggerInitialize};
use rapid_ai::presentation::{Presentation, present};
use rapid_ai::state::SettingsState;
use rapid_ai::terminal::{TerminalSurface, render};

use client_core::{AppSettings, ReqwestTransport};

use models::ResultStatus;

use std::fs::create_dir_all;
use std::io::{stderr, stdout};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use url::Url;

/// AI writing assistant for markdown notes
#[derive(Parser)]
#[command(name = "rapid-ai", version)]
#[command(about = "Send prompts and quick actions to the Rapid AI completion service")]
struct Cli {
    /// Echo debug logs to the terminal
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding settings.json
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a free-form question
    Ask {
        prompt: String,
        /// Text the question is about
        #[arg(short, long)]
        selection: Option<String>,
    },
    /// Correct the grammar of the selection
    Grammar {
        #[arg(short, long)]
        selection: String,
    },
    /// Format the selection as markdown
    Format {
        #[arg(short, long)]
        selection: String,
    },
    /// Translate the selection into the configured language
    Translate {
        #[arg(short, long)]
        selection: String,
    },
    /// Check an API key against the service
    TestKey {
        /// Key to test instead of the stored one
        #[arg(short, long)]
        key: Option<String>,
    },
    /// Store the API key
    SetKey { key: String },
    /// Set the translation language
    SetLanguage { language: String },
    /// Print the current settings
    ShowSettings,
    /// List supported translation languages
    Languages,
}

#[tokio::main]
async fn main() -> Result<ExitCode, RapidAiError> {
    let cli = Cli::parse();

    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => dirs::config_dir()
            .ok_or_else(|| RapidAiError::app("Failed to get config directory"))?
            .join(APP_DIR_NAME),
    };
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| config_dir.clone())
        .join(APP_DIR_NAME)
        .join("logs");

    create_dir_all(&log_dir)
        .map_err(|e| RapidAiError::app(format!("Failed to create log directory: {e}")))?;

    let console_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        DEFAULT_CONSOLE_LEVEL
    };
    LoggerInitialize(&log_dir, console_level)?;

    info!("Rapid AI starting");
    info!("Config directory: {}", config_dir.display());

    let mut app_settings = AppSettings::load(&config_dir)?;
    let key_from_env = app_settings.apply_env_override();

    let endpoint = Url::parse(&app_settings.endpoint_url)
        .map_err(|e| RapidAiError::app(format!("Invalid endpoint URL: {e}")))?;
    let state = SettingsState::new(app_settings, config_dir).with_key_from_env(key_from_env);
    let transport = ReqwestTransport::new()
        .map_err(|e| RapidAiError::app(format!("Failed to build HTTP client: {e}")))?;
    let ctx = CommandContext::new(state, transport, endpoint);

    let presentation = match cli.command {
        Commands::Ask { prompt, selection } => {
            present(&ask::ask(&ctx, &prompt, selection.as_deref()).await)
        }
        Commands::Grammar { selection } => {
            present(&ask::quick_action(&ctx, QuickActionKind::Grammar, &selection).await?)
        }
        Commands::Format { selection } => {
            present(&ask::quick_action(&ctx, QuickActionKind::Format, &selection).await?)
        }
        Commands::Translate { selection } => {
            present(&ask::quick_action(&ctx, QuickActionKind::Translate, &selection).await?)
        }
        Commands::TestKey { key } => {
            let mut surface = TerminalSurface::new(stderr());
            let status = settings::test_key(&ctx, &mut surface, key.as_deref()).await;
            return Ok(exit_code(status == ResultStatus::Success));
        }
        Commands::SetKey { key } => {
            settings::set_key(&ctx, &key).await?;
            println!("API key saved");
            return Ok(ExitCode::SUCCESS);
        }
        Commands::SetLanguage { language } => {
            let language = settings::set_language(&ctx, &language).await?;
            println!("Translating to {language}");
            return Ok(ExitCode::SUCCESS);
        }
        Commands::ShowSettings => {
            print!("{}", settings::show_settings(&ctx).await);
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Languages => {
            for language in settings::languages() {
                println!("{language}");
            }
            return Ok(ExitCode::SUCCESS);
        }
    };

    render(&presentation, &mut stdout(), &mut stderr())
        .map_err(|e| RapidAiError::app(format!("Failed to write output: {e}")))?;

    Ok(exit_code(matches!(presentation, Presentation::Render(_))))
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
