//! Gemini request types
//!
//! Inbound body parsing, the two outbound payload shapes and the
//! `generateContent` endpoint URL.

use crate::config::ProxyConfig;
use crate::error::{ProxyError, Result};
use serde::{Deserialize, Serialize};

/// Which Gemini model a request is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Text,
    Speech,
}

impl Mode {
    pub fn from_tts_flag(is_tts: bool) -> Self {
        if is_tts {
            Self::Speech
        } else {
            Self::Text
        }
    }

    pub fn model<'a>(&self, config: &'a ProxyConfig) -> &'a str {
        match self {
            Self::Text => &config.text_model,
            Self::Speech => &config.tts_model,
        }
    }
}

/// Body accepted from the caller.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InboundRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(rename = "isTTS", default)]
    pub is_tts: Option<bool>,
}

/// A validated inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub prompt: String,
    pub mode: Mode,
}

impl PromptRequest {
    /// Parse and validate a raw request body.
    ///
    /// Malformed JSON, unknown fields, a non-string `prompt`, a non-boolean
    /// `isTTS`, and a missing or whitespace-only prompt are all rejected
    /// with [`ProxyError::PromptRequired`].
    pub fn parse(body: &[u8]) -> Result<Self> {
        let inbound: InboundRequest =
            serde_json::from_slice(body).map_err(|_| ProxyError::PromptRequired)?;

        let prompt = inbound
            .prompt
            .filter(|p| !p.trim().is_empty())
            .ok_or(ProxyError::PromptRequired)?;

        Ok(Self {
            prompt,
            mode: Mode::from_tts_flag(inbound.is_tts.unwrap_or(false)),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamPayload {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
    pub speech_config: SpeechConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    pub voice_config: VoiceConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    pub voice_name: String,
}

impl UpstreamPayload {
    pub fn text(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: None,
        }
    }

    pub fn speech(prompt: &str, voice_name: &str) -> Self {
        Self {
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["AUDIO".to_string()],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: voice_name.to_string(),
                        },
                    },
                },
            }),
            ..Self::text(prompt)
        }
    }

    pub fn for_request(request: &PromptRequest, config: &ProxyConfig) -> Self {
        match request.mode {
            Mode::Text => Self::text(&request.prompt),
            Mode::Speech => Self::speech(&request.prompt, &config.voice_name),
        }
    }
}

/// `generateContent` URL for `model`. The key travels as a query parameter.
pub fn generate_content_url(api_base: &str, model: &str) -> String {
    format!("{}/v1beta/models/{}:generateContent", api_base, model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_text_request() {
        let req = PromptRequest::parse(br#"{"prompt": "hello"}"#).unwrap();
        assert_eq!(req.prompt, "hello");
        assert_eq!(req.mode, Mode::Text);
    }

    #[test]
    fn test_parse_tts_request() {
        let req = PromptRequest::parse(br#"{"prompt": "say hi", "isTTS": true}"#).unwrap();
        assert_eq!(req.mode, Mode::Speech);

        let req = PromptRequest::parse(br#"{"prompt": "say hi", "isTTS": false}"#).unwrap();
        assert_eq!(req.mode, Mode::Text);

        let req = PromptRequest::parse(br#"{"prompt": "say hi", "isTTS": null}"#).unwrap();
        assert_eq!(req.mode, Mode::Text);
    }

    #[test]
    fn test_parse_rejects_missing_or_blank_prompt() {
        let bodies: [&[u8]; 5] = [
            br#"{}"#,
            br#"{"prompt": ""}"#,
            br#"{"prompt": "   \n\t"}"#,
            br#"{"prompt": null}"#,
            br#"{"isTTS": true}"#,
        ];
        for body in bodies {
            assert!(
                matches!(PromptRequest::parse(body), Err(ProxyError::PromptRequired)),
                "accepted {}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_parse_rejects_malformed_shapes() {
        let bodies: [&[u8]; 8] = [
            b"",
            b"not json",
            b"[]",
            br#""hello""#,
            br#"{"prompt": 42}"#,
            br#"{"prompt": "hi", "isTTS": "yes"}"#,
            br#"{"prompt": "hi", "isTTS": 1}"#,
            br#"{"prompt": "hi", "model": "other"}"#,
        ];
        for body in bodies {
            assert!(
                matches!(PromptRequest::parse(body), Err(ProxyError::PromptRequired)),
                "accepted {}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_text_payload_shape() {
        let payload = serde_json::to_value(UpstreamPayload::text("hello")).unwrap();
        assert_eq!(payload, json!({ "contents": [{ "parts": [{ "text": "hello" }] }] }));
        assert!(payload.get("generationConfig").is_none());
    }

    #[test]
    fn test_speech_payload_shape() {
        let payload = serde_json::to_value(UpstreamPayload::speech("hello", "Kore")).unwrap();
        assert_eq!(
            payload,
            json!({
                "contents": [{ "parts": [{ "text": "hello" }] }],
                "generationConfig": {
                    "responseModalities": ["AUDIO"],
                    "speechConfig": {
                        "voiceConfig": {
                            "prebuiltVoiceConfig": { "voiceName": "Kore" }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_model_selection() {
        let config = ProxyConfig::default();
        assert_eq!(Mode::Text.model(&config), "gemini-2.5-flash-preview-09-2025");
        assert_eq!(Mode::Speech.model(&config), "gemini-2.5-flash-preview-tts");
    }

    #[test]
    fn test_generate_content_url() {
        assert_eq!(
            generate_content_url("https://generativelanguage.googleapis.com", "gemini-2.5-flash-preview-tts"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-tts:generateContent"
        );
    }
}
