use crate::error::InterpretError;
use crate::interpreters::local::extract_locally;
use crate::interpreters::traits::Interpreter;
use crate::interpreters::types::InterpreterConfig;
use crate::interpreters::validate::{validate, validate_result};
use crate::interpreters::vocabulary::{
    ADDIS_AREAS, BEDROOMS_MAX, BUSINESS_FEATURES, PRICE_CEILING, RESIDENTIAL_FEATURES,
    SQUARE_METERS_MAX,
};
use crate::models::InterpretationResult;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Interpreter backed by an OpenAI-compatible chat completion endpoint.
///
/// Falls back to local extraction whenever the key is missing or the call
/// fails for any reason; the result is always validated.
pub struct OpenAiInterpreter {
    client: Client,
    config: InterpreterConfig,
}

impl OpenAiInterpreter {
    pub fn new(config: InterpreterConfig) -> Result<Self, InterpretError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    pub fn is_remote_configured(&self) -> bool {
        self.config.is_remote_configured()
    }

    /// One completion round trip, decoded into untyped JSON
    async fn request_interpretation(&self, query: &str) -> Result<Value, InterpretError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if self.is_remote_configured() => key,
            _ => return Err(InterpretError::NotConfigured),
        };

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt(),
                },
                ChatMessage {
                    role: "user",
                    content: query.to_string(),
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!("Sending interpretation request to {}", self.config.completions_url());

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InterpretError::Status(status));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(InterpretError::EmptyCompletion)?;

        let payload: Value = serde_json::from_str(&content)?;
        if !payload.is_object() {
            return Err(InterpretError::MalformedPayload(
                "expected a JSON object".to_string(),
            ));
        }
        Ok(payload)
    }
}

#[async_trait]
impl Interpreter for OpenAiInterpreter {
    async fn interpret(&self, query: &str) -> InterpretationResult {
        if !self.is_remote_configured() {
            debug!("Remote interpreter not configured, using local extraction");
            return validate_result(&extract_locally(query));
        }

        match self.request_interpretation(query).await {
            Ok(payload) => {
                let result = validate(&payload, query);
                info!(
                    "Remote interpretation succeeded (confidence {:.2})",
                    result.confidence
                );
                result
            }
            Err(err) => {
                warn!("Remote interpretation failed, falling back to local: {}", err);
                validate_result(&extract_locally(query))
            }
        }
    }

    fn source_name(&self) -> &'static str {
        "openai"
    }
}

fn system_prompt() -> String {
    format!(
        r#"You are a property search assistant for Addis Ababa, Ethiopia. Extract search filters from natural language queries and return them as JSON.

Available areas in Addis Ababa: {areas}

Property types: residential, business

Common features:
- Residential: {residential}
- Business: {business}

Price range: 1 - {price} ETB per month
Bedrooms: 1-{bedrooms}
Square meters: 1-{sqm}

Return only JSON with these fields, omitting any filter you cannot infer:
{{
  "filters": {{
    "type": "residential" | "business",
    "location": "area name",
    "priceMin": number,
    "priceMax": number,
    "bedrooms": number,
    "squareMetersMin": number,
    "features": ["feature1", "feature2"]
  }},
  "searchQuery": "cleaned search query",
  "confidence": 0.0-1.0
}}"#,
        areas = ADDIS_AREAS.join(", "),
        residential = RESIDENTIAL_FEATURES.join(", "),
        business = BUSINESS_FEATURES.join(", "),
        price = PRICE_CEILING,
        bedrooms = BEDROOMS_MAX,
        sqm = SQUARE_METERS_MAX,
    )
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatReply>,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}
