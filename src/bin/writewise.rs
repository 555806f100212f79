//! WriteWise CLI - run the rewrite pipeline or the social reframing path

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use writewise::config::Config;
use writewise::generation::OpenAiClient;
use writewise::orchestration::{OrchestratorConfig, RewriteOrchestrator, RewriteRequest};

#[derive(Parser, Debug)]
#[command(author, version, about = "Tone-aware text rewriting", long_about = None)]
struct Args {
    /// Path to configuration file (TOML); environment variables override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewrite text in a requested tone
    Rewrite {
        /// Text to rewrite
        text: String,

        /// Target tone (e.g. "Professional", "Gen Z tone")
        #[arg(short, long)]
        tone: String,

        /// Present the rewrite as a story
        #[arg(long)]
        as_story: bool,

        /// Detail level: brief, elaborate, comprehensive
        #[arg(long, default_value = "elaborate")]
        response_level: String,
    },

    /// Reframe text for a social platform (no generation call)
    Social {
        /// Text to reframe
        text: String,

        /// Platform label (Instagram, Facebook, LinkedIn, Twitter/X, WhatsApp)
        #[arg(short, long)]
        platform: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env(),
    };

    match args.command {
        Command::Rewrite {
            text,
            tone,
            as_story,
            response_level,
        } => {
            let client = Arc::new(OpenAiClient::new(&config.openai)?);
            let orchestrator = RewriteOrchestrator::with_config(
                client,
                OrchestratorConfig {
                    model: config.openai.model.clone(),
                    ..OrchestratorConfig::default()
                },
            );

            let request = RewriteRequest {
                text,
                tone,
                as_story,
                response_level,
            };

            let result = orchestrator.rewrite(&request).await?;

            println!("📌 Input type: {}", result.input_type);
            println!("🏷️  Title: {}", result.title);
            println!();
            println!("{}", result.rewritten_text);
        }

        Command::Social { text, platform } => {
            let post = writewise::social::render(&platform, &text);

            println!("{}", post.platform_text);
            println!();
            for (label, url) in &post.posting_links {
                println!("🔗 {label}: {url}");
            }
        }
    }

    Ok(())
}
