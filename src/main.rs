// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, error, warn};
use std::io::Write;
use std::path::Path;

use crate::app_config::Config;
use crate::app_controller::ChatController;
use crate::errors::AppError;
use crate::replies::select_reply;
use crate::session::SessionState;
use crate::translation::{TranslationOutcome, TranslationService};

mod app_config;
mod app_controller;
mod directory;
mod errors;
mod language_detect;
mod providers;
mod replies;
mod router;
mod session;
mod translation;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive company chooser and translator chat (default command)
    Chat(ChatArgs),

    /// Translate a single message and print the bot reply
    Translate {
        /// Text to translate
        #[arg(value_name = "TEXT")]
        text: String,

        #[command(flatten)]
        common: ChatArgs,
    },

    /// Generate shell completions for linguachat
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug, Clone)]
struct ChatArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Inference API endpoint override
    #[arg(short, long)]
    endpoint: Option<String>,

    /// API key for the inference endpoint
    #[arg(short, long, env = "LINGUACHAT_API_KEY")]
    api_key: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// linguachat - Bilingual EN/ZH translator chat
///
/// A terminal chat demo that detects whether a message is English or Chinese,
/// translates it with a pretrained model pair, and answers with a canned reply.
#[derive(Parser, Debug)]
#[command(name = "linguachat")]
#[command(author = "linguachat Team")]
#[command(version = "1.0.0")]
#[command(about = "Bilingual EN/ZH translator chat with canned replies")]
#[command(long_about = "linguachat detects the language of each chat message, translates it with a \
pretrained EN<->ZH model pair, and replies with a fixed keyword-matched response.

EXAMPLES:
    linguachat                                  # Start the interactive chat
    linguachat translate \"Hello, thank you\"     # One-shot translation
    linguachat -l debug                         # Interactive chat with debug logging
    linguachat completions bash > lc.bash       # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    chat: ChatArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "linguachat", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate { text, common }) => run_translate(common, &text).await,
        Some(Commands::Chat(args)) => run_chat(args).await,
        None => {
            // Default behavior - interactive chat with top-level args
            let args = cli.chat;
            run_chat(args).await
        }
    }
}

/// Load the configuration, creating a default config file when missing,
/// and apply command line overrides
fn load_config(options: &ChatArgs) -> Result<Config> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config.save_to(config_path)?;
        config
    };

    // Override config with CLI options if provided
    if let Some(endpoint) = &options.endpoint {
        config.models.endpoint = endpoint.clone();
    }

    if let Some(api_key) = &options.api_key {
        config.models.api_key = api_key.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    Ok(config)
}

/// Map config log levels onto the log crate's filter
fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

/// One-shot translation mode
async fn run_translate(options: ChatArgs, text: &str) -> Result<()> {
    let config = load_config(&options)?;
    let service = TranslationService::new(&config.models)?;

    let outcome = match service.translate(text).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Translation failed: {}", e);
            println!("Translation failed.");
            return Ok(());
        }
    };

    match &outcome {
        TranslationOutcome::Translated { text, direction } => {
            println!("Translated ({}): {}", direction.label(), text);
            println!("🤖 Bot reply: {}", select_reply(text));
        }
        _ => println!("{}", outcome.display_text()),
    }

    Ok(())
}

/// Interactive chat mode
async fn run_chat(options: ChatArgs) -> Result<()> {
    let config = load_config(&options)?;
    let mut controller = ChatController::with_config(&config)?;

    println!("🏢 Company Collaboration Chooser");
    println!();

    loop {
        match controller.machine().state() {
            SessionState::SelectingCompany => {
                if !run_selection_screen(&mut controller)? {
                    return Ok(());
                }
            }
            SessionState::Chatting => {
                if !run_chat_screen(&controller).await? {
                    // User asked to go back
                    if let Err(e) = controller.machine_mut().go_back() {
                        debug!("Ignored transition: {}", e);
                    }
                    println!();
                    continue;
                }
                return Ok(());
            }
        }
    }
}

/// Drive the selection screen until the session is confirmed
///
/// Returns false when the user quits.
fn run_selection_screen(controller: &mut ChatController) -> Result<bool> {
    loop {
        let name = prompt("What is your name? ")?;
        if name.eq_ignore_ascii_case("/quit") {
            return Ok(false);
        }
        controller.machine_mut().set_name(name);

        let sectors = directory::sectors();
        println!("Select a sector:");
        for (i, sector) in sectors.iter().enumerate() {
            println!("  {}. {}", i + 1, sector);
        }

        let sector = match pick_from(&sectors)? {
            Some(sector) => sector,
            None => return Ok(false),
        };
        if let Err(e) = controller.machine_mut().select_sector(sector) {
            println!("🚧 {}", e);
            continue;
        }

        let companies = directory::companies_in(sector).unwrap_or(&[]);
        println!("Choose a company in {}:", sector);
        for (i, company) in companies.iter().enumerate() {
            println!("  {}. {}", i + 1, company);
        }

        let company = match pick_from(companies)? {
            Some(company) => company,
            None => return Ok(false),
        };
        if let Err(e) = controller.machine_mut().select_company(company) {
            println!("🚧 {}", e);
            continue;
        }

        match controller.machine_mut().confirm() {
            Ok(()) => {
                let session = controller.machine().session();
                println!();
                println!(
                    "✅ Welcome {}! You're collaborating with {} in the {} sector.",
                    session.name, session.company, session.sector
                );
                println!();
                return Ok(true);
            }
            Err(e) => {
                // Inline warning, stay on the selection screen
                println!("🚧 {}", e);
            }
        }
    }
}

/// Drive the chat screen until the user goes back or quits
///
/// Returns true on quit, false on going back to the selection screen.
async fn run_chat_screen(controller: &ChatController) -> Result<bool> {
    println!("💬 Translator chat. Send a message (EN/中文), /back to reselect, /quit to exit.");

    loop {
        let input = prompt("> ")?;

        if input.eq_ignore_ascii_case("/quit") {
            return Ok(true);
        }
        if input.eq_ignore_ascii_case("/back") {
            return Ok(false);
        }

        match controller.submit_message(&input).await {
            Ok(exchange) => {
                match &exchange.outcome {
                    TranslationOutcome::Translated { text, direction } => {
                        println!("Translated ({}): {}", direction.label(), text);
                    }
                    other => println!("{}", other.display_text()),
                }
                if let Some(reply) = exchange.reply {
                    println!("🤖 Bot reply: {}", reply.text());
                }
            }
            Err(AppError::Session(e)) => {
                // Inline warning, submission blocked
                println!("🚧 {}", e);
            }
            Err(e) => {
                error!("Translation failed: {}", e);
                println!("Translation failed.");
            }
        }
    }
}

/// Read one trimmed line from stdin after printing a prompt
fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    Ok(line.trim().to_string())
}

/// Resolve a menu answer to an entry, accepting an index or a literal name
///
/// Returns `None` when the user quits.
fn pick_from<'a>(entries: &[&'a str]) -> Result<Option<&'a str>> {
    loop {
        let answer = prompt("? ")?;

        if answer.eq_ignore_ascii_case("/quit") {
            return Ok(None);
        }

        if let Ok(index) = answer.parse::<usize>() {
            if index >= 1 && index <= entries.len() {
                return Ok(Some(entries[index - 1]));
            }
        }

        if let Some(entry) = entries.iter().find(|e| e.eq_ignore_ascii_case(&answer)) {
            return Ok(Some(*entry));
        }

        println!("🚧 Please pick one of the listed options.");
    }
}
