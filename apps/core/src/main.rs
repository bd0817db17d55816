// MindSpace CLI Entry Point
// One chat turn or one journal analysis per invocation

use anyhow::Result;
use clap::{Parser, Subcommand};
use mindspace_core::config::AppConfig;
use mindspace_core::models::{AnalyzeRequest, ChatMessage, ChatRequest};
use mindspace_core::{AppError, AssistantService, ErrorBody};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "mindspace", version)]
#[command(about = "Well-being assistant: empathetic replies and journal analysis")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer one chat message
    Chat {
        /// Message text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,

        /// Print the JSON reply instead of the rendered text
        #[arg(long)]
        json: bool,

        /// Never call a model, always use the fallback
        #[arg(long)]
        offline: bool,
    },
    /// Analyze one journal entry and print the JSON result
    Analyze {
        /// Journal text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Self-reported stress level, 0 to 10
        #[arg(long)]
        stress: Option<u8>,

        /// Entry date (YYYY-MM-DD), today by default
        #[arg(long)]
        date: Option<String>,

        /// Never call a model, always use the fallback
        #[arg(long)]
        offline: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let json = std::env::var("MINDSPACE_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_service(offline: bool) -> Result<AssistantService> {
    let mut config = AppConfig::load()?;
    if offline {
        config.chat.api_key = None;
        config.analysis.api_key = None;
    }
    Ok(AssistantService::from_config(&config)?)
}

fn print_error(err: &AppError) -> Result<ExitCode> {
    if !err.is_client_error() {
        error!("{}", err);
    }
    println!("{}", serde_json::to_string(&ErrorBody::from(err))?);
    Ok(ExitCode::FAILURE)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Chat {
            message,
            json,
            offline,
        } => {
            let service = build_service(offline)?;
            let request = ChatRequest {
                messages: vec![ChatMessage::user(message.join(" "))],
            };
            match service.chat(&request).await {
                Ok(reply) if json => println!("{}", serde_json::to_string_pretty(&reply)?),
                Ok(reply) => println!("{}", reply.render_reply()),
                Err(e) => return print_error(&e),
            }
        }
        Command::Analyze {
            text,
            stress,
            date,
            offline,
        } => {
            let service = build_service(offline)?;
            let request = AnalyzeRequest {
                text: text.join(" "),
                date,
                stress_level: stress,
            };
            match service.analyze(&request).await {
                Ok(analysis) => println!("{}", serde_json::to_string_pretty(&analysis)?),
                Err(e) => return print_error(&e),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
