//! Gemini API Proxy
//!
//! Forwards prompts from browser clients to the Gemini generative-language
//! API, injecting a server-held API key. Requests are routed to a text model
//! or a text-to-speech model and the upstream JSON is relayed verbatim.
//!
//! ## Module Structure
//!
//! - `config`: Proxy configuration (API key, upstream base, models, voice)
//! - `error`: Error kinds and their HTTP mapping
//! - `gemini`: Inbound request parsing and upstream payloads
//! - `proxy`: The prompt forwarding operation
//! - `server`: HTTP routes and server startup

pub mod config;
pub mod error;
pub mod gemini;
pub mod proxy;
pub mod server;

pub use config::ProxyConfig;
pub use error::{ProxyError, Result};
pub use gemini::{Mode, PromptRequest, UpstreamPayload};
pub use proxy::PromptProxy;
pub use server::{router, run_server};
