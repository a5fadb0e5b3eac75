//! wachat CLI: terminal chat client for a `/api/chat` service

use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wachat_engine::{Config, ConfigError, Conversation, HttpChatClient, ThemeName};

/// WhatsApp-style terminal chat client
#[derive(Parser, Debug)]
#[command(name = "wachat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the chat service (overrides config and WACHAT_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Color theme: light or dark (overrides config and WACHAT_THEME)
    #[arg(long, global = true)]
    theme: Option<ThemeName>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Log file used while the chat view is open
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the chat view (default when no command specified)
    Tui,

    /// Send one message and print the reply
    Send {
        /// Message text
        message: String,
    },

    /// Print the resolved configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(&cli, |key| std::env::var(key).ok())?;

    match cli.command {
        None | Some(Commands::Tui) => {
            let log_file = cli
                .log_file
                .clone()
                .unwrap_or_else(|| std::env::temp_dir().join("wachat.log"));
            init_file_logging(&cli.log_level, &log_file)?;

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(wachat_tui::run_tui(&config))?;
            Ok(0)
        }
        Some(Commands::Send { message }) => {
            init_stderr_logging(&cli.log_level);

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(cmd_send(&config, message))
        }
        Some(Commands::Config { json }) => {
            cmd_config(&config, cli.config.as_deref(), json)?;
            Ok(0)
        }
    }
}

/// Resolve configuration: file, then environment (via `lookup`), then flags.
fn resolve_config<F>(cli: &Cli, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::load_file_layer(cli.config.as_deref())?;
    config.apply_env_from(lookup)?;
    let config = config.with_overrides(cli.api_url.clone(), cli.theme);
    config.validate()?;
    Ok(config)
}

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Log to a file so output never lands on the alternate screen.
fn init_file_logging(log_level: &str, path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(env_filter(log_level))
        .init();
    Ok(())
}

fn init_stderr_logging(log_level: &str) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter(log_level))
        .init();
}

/// One submit cycle without the chat view. Exit code 1 when delivery failed.
async fn cmd_send(config: &Config, message: String) -> Result<i32, Box<dyn std::error::Error>> {
    let client = HttpChatClient::from_config(config)?;
    tracing::info!(endpoint = client.endpoint(), "sending message");

    let mut conversation = Conversation::new();
    conversation.set_draft(message);
    if !conversation.can_submit() {
        return Err("message is empty".into());
    }

    conversation.submit(&client).await;

    match conversation.last_message() {
        Some(reply) => {
            println!("{}", reply.content());
            Ok(i32::from(reply.is_error()))
        }
        None => Err("no reply recorded".into()),
    }
}

fn cmd_config(config: &Config, explicit: Option<&Path>, json: bool) -> Result<(), ConfigError> {
    if json {
        let output = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
        println!("{output}");
        return Ok(());
    }

    let source = explicit
        .map(Path::to_path_buf)
        .or_else(|| Config::default_path().filter(|p| p.exists()));

    println!("wachat Configuration\n");
    match source {
        Some(path) => println!("File: {}", path.display()),
        None => println!("File: (none, using defaults)"),
    }
    println!("API URL: {}", config.api_url);
    println!("Assistant: {}", config.assistant_name);
    println!("Theme: {}", config.theme);
    match config.request_timeout_secs {
        Some(secs) => println!("Request timeout: {secs}s"),
        None => println!("Request timeout: none"),
    }
    Ok(())
}
