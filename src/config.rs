//! Proxy Configuration
//!
//! Defines the values the proxy needs at construction time:
//! - Gemini API key (optional; its absence is reported per request)
//! - Upstream base URL
//! - Model ids for text generation and text-to-speech
//! - Prebuilt voice for speech output

use std::fmt;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";
pub const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
pub const DEFAULT_VOICE: &str = "Kore";

/// Proxy configuration, injected into [`crate::proxy::PromptProxy`].
#[derive(Clone)]
pub struct ProxyConfig {
    /// Gemini API key as supplied. Never logged. Read it through
    /// [`ProxyConfig::configured_api_key`], which treats an empty key as unset.
    pub api_key: Option<String>,
    /// Upstream base URL, without trailing slash
    pub api_base: String,
    /// Model used when `isTTS` is absent or false
    pub text_model: String,
    /// Model used when `isTTS` is true
    pub tts_model: String,
    /// Prebuilt voice name for speech output
    pub voice_name: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            tts_model: DEFAULT_TTS_MODEL.to_string(),
            voice_name: DEFAULT_VOICE.to_string(),
        }
    }
}

impl ProxyConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// The configured key, treating an empty string as unset.
    pub fn configured_api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }
}

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("api_key", &self.configured_api_key().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("text_model", &self.text_model)
            .field("tts_model", &self.tts_model)
            .field("voice_name", &self.voice_name)
            .finish()
    }
}
