use crate::config::Config;
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{error, info};

/// One conversation turn, forwarded to the gateway as received.
///
/// `content` may be a string or an array of content parts; any other fields
/// (`name`, tool call data, ...) are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatMessage {
    pub fn new(role: &str, content: impl Into<Value>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
            extra: Map::new(),
        }
    }
}

/// Body of a chat-support request from the portal
#[derive(Debug, Deserialize)]
pub struct ChatSupportRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// Portal language code; anything other than "hi" gets the English prompt
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
struct GatewayRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("AI_GATEWAY_API_KEY is not configured")]
    MissingApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Payment required. Please add funds to continue.")]
    PaymentRequired,

    #[error("AI gateway error")]
    Gateway { status: u16, body: String },

    #[error("Failed to send request to AI gateway: {0}")]
    Http(#[from] reqwest::Error),
}

impl ChatError {
    /// HTTP status the portal should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            ChatError::RateLimited => 429,
            ChatError::PaymentRequired => 402,
            ChatError::MissingApiKey | ChatError::Gateway { .. } | ChatError::Http(_) => 500,
        }
    }
}

const ENGLISH_SYSTEM_PROMPT: &str = r#"You are a helpful government service portal chatbot. You assist citizens with various government services including:
- Bill Payments (electricity, water, gas)
- Document Requests (birth certificates, residence certificates, etc.)
- Grievance Filing
- Health Services
- Property Records
- Tax Services
- Education Services
- Business Licenses

Always be polite, clear, and helpful. If you don't know the answer to a question, advise the user to contact the appropriate government department."#;

const HINDI_SYSTEM_PROMPT: &str = r#"आप एक सहायक सरकारी सेवा पोर्टल चैटबॉट हैं। आप नागरिकों को विभिन्न सरकारी सेवाओं के बारे में मदद करते हैं जैसे:
- बिल भुगतान (बिजली, पानी, गैस)
- दस्तावेज़ अनुरोध (जन्म प्रमाण पत्र, निवास प्रमाण पत्र, आदि)
- शिकायत दर्ज करना
- स्वास्थ्य सेवाएं
- संपत्ति रिकॉर्ड
- कर सेवाएं
- शिक्षा सेवाएं
- व्यवसाय लाइसेंस

हमेशा विनम्र, स्पष्ट और सहायक रहें। यदि आप किसी प्रश्न का उत्तर नहीं जानते हैं, तो उपयोगकर्ता को उचित सरकारी विभाग से संपर्क करने की सलाह दें।"#;

/// System prompt for the assistant, written in the user's language
pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::English => ENGLISH_SYSTEM_PROMPT,
        Language::Hindi => HINDI_SYSTEM_PROMPT,
    }
}

/// Resolve the language sent by the portal; unknown or missing codes mean English
pub fn request_language(code: Option<&str>) -> Language {
    code.and_then(|code| Language::from_code(code).ok())
        .unwrap_or_default()
}

/// Prepend the system prompt to the conversation
pub fn build_messages(language: Language, messages: Vec<ChatMessage>) -> Vec<ChatMessage> {
    let mut all = Vec::with_capacity(messages.len() + 1);
    all.push(ChatMessage::new("system", system_prompt(language)));
    all.extend(messages);
    all
}

/// Forward a chat-support conversation to the AI gateway.
///
/// Returns the upstream response untouched on success so the caller can
/// stream its event-stream body back to the portal.
pub async fn forward_chat(
    client: &reqwest::Client,
    config: &Config,
    request: ChatSupportRequest,
) -> Result<reqwest::Response, ChatError> {
    let api_key = config
        .ai_gateway_api_key
        .as_deref()
        .ok_or(ChatError::MissingApiKey)?;

    let language = request_language(request.language.as_deref());
    info!(
        language = %language,
        messages = request.messages.len(),
        "Forwarding chat-support request"
    );

    let body = GatewayRequest {
        model: &config.ai_model,
        messages: build_messages(language, request.messages),
        stream: true,
    };

    let response = client
        .post(&config.ai_gateway_url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        match status.as_u16() {
            429 => return Err(ChatError::RateLimited),
            402 => return Err(ChatError::PaymentRequired),
            code => {
                let body = response.text().await.unwrap_or_default();
                error!(status = code, body = %body, "AI gateway error");
                return Err(ChatError::Gateway { status: code, body });
            }
        }
    }

    Ok(response)
}
