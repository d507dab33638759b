// ABOUTME: AI formatting collaborator over the OpenAI chat-completions API
// ABOUTME: Blocking call; non-success surfaces status and body, never placeholder content

use crate::util::truncate_str;
use crate::{Error, Result};
use reqwest::blocking::Client;
use serde_json::json;
use std::time::Duration;

const SYSTEM_PROMPT: &str =
    "Convert raw content into properly formatted HTML excluding any DOCTYPE or extraneous header lines.";

pub struct Formatter {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl Formatter {
    pub fn new(api_key: String, base_url: Option<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Formatter {
            client,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com".into()),
            api_key,
            model: "gpt-4o-mini".into(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Ask the model to format `content` as HTML for the given module/page.
    /// The caller re-applies the placeholder transform to the reply, so the
    /// model echoing a token back is harmless.
    pub fn format(&self, module_name: &str, page_title: &str, content: &str) -> Result<String> {
        let prompt = format!(
            "Module: {}\nPage Title: {}\nContent: {}",
            module_name, page_title, content
        );

        let payload = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt }
            ],
            "temperature": 0.3
        });

        let url = format!("{}/v1/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .map_err(|e| Error::Formatting {
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = truncate_str(&response.text().unwrap_or_default(), 200);
            return Err(Error::Formatting {
                status: Some(status.as_u16()),
                message,
            });
        }

        let body: serde_json::Value = response.json().map_err(|e| Error::Formatting {
            status: None,
            message: format!("unreadable response: {}", e),
        })?;

        let content = body
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::Formatting {
                status: None,
                message: "response contained no message content".into(),
            })?;

        Ok(strip_code_fences(content))
    }
}

/// The model sometimes wraps its reply in ``` fences, optionally tagged
/// "html". Strip them so fence markers never end up in a published page.
fn strip_code_fences(reply: &str) -> String {
    let trimmed = reply.trim().trim_matches('`');
    let trimmed = trimmed
        .strip_prefix("html")
        .map(str::trim_start)
        .unwrap_or(trimmed);
    trimmed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_new_defaults() {
        let formatter = Formatter::new("key".into(), None).unwrap();
        assert_eq!(formatter.base_url, "https://api.openai.com");
        assert_eq!(formatter.model, "gpt-4o-mini");
    }

    #[test]
    fn test_formatter_with_model() {
        let formatter = Formatter::new("key".into(), None)
            .unwrap()
            .with_model("gpt-4o");
        assert_eq!(formatter.model, "gpt-4o");
    }

    #[test]
    fn test_strip_code_fences_plain() {
        assert_eq!(strip_code_fences("<p>Hello</p>"), "<p>Hello</p>");
    }

    #[test]
    fn test_strip_code_fences_fenced() {
        assert_eq!(strip_code_fences("```<p>Hello</p>```"), "<p>Hello</p>");
    }

    #[test]
    fn test_strip_code_fences_html_tagged() {
        assert_eq!(
            strip_code_fences("```html\n<p>Hello</p>\n```"),
            "<p>Hello</p>"
        );
    }
}
