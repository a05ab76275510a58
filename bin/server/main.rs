//! Gemini Proxy Server
//!
//! Runs the Gemini API proxy as a standalone HTTP server.

use anyhow::Result;
use clap::Parser;
use gemini_proxy::config::{DEFAULT_API_BASE, DEFAULT_TEXT_MODEL, DEFAULT_TTS_MODEL, DEFAULT_VOICE};
use gemini_proxy::ProxyConfig;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "gemini-proxy")]
#[command(about = "Gemini API proxy with server-side API key")]
struct Args {
    /// Server port
    #[arg(short, long, default_value = "8080", env = "PORT")]
    port: u16,

    /// Server host
    #[arg(long, default_value = "0.0.0.0", env = "PROXY_HOST")]
    host: String,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Gemini API base URL
    #[arg(long, default_value = DEFAULT_API_BASE, env = "GEMINI_API_BASE")]
    api_base: String,

    /// Model for text generation
    #[arg(long, default_value = DEFAULT_TEXT_MODEL, env = "GEMINI_TEXT_MODEL")]
    text_model: String,

    /// Model for text-to-speech
    #[arg(long, default_value = DEFAULT_TTS_MODEL, env = "GEMINI_TTS_MODEL")]
    tts_model: String,

    /// Prebuilt voice for text-to-speech
    #[arg(long, default_value = DEFAULT_VOICE, env = "GEMINI_TTS_VOICE")]
    voice: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gemini_proxy=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .init();

    let args = Args::parse();

    let config = ProxyConfig {
        api_key: args.api_key,
        text_model: args.text_model,
        tts_model: args.tts_model,
        voice_name: args.voice,
        ..ProxyConfig::default()
    }
    .with_api_base(args.api_base);

    info!("Starting Gemini Proxy");
    info!("  Config: {:?}", config);

    gemini_proxy::run_server(config, &args.host, args.port).await?;

    Ok(())
}
