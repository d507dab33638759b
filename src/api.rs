// ABOUTME: Blocking HTTP client for the Canvas course API
// ABOUTME: Maps every operation's failure to its pipeline-step error, follows Link pagination

use crate::model::{Module, ModuleItem, Page};
use crate::util::truncate_str;
use crate::{Error, Result};
use reqwest::blocking::{Client, Response};
use reqwest::{Method, StatusCode};
use serde_json::json;
use std::time::Duration;

/// Which pipeline step an operation belongs to; decides the error variant
/// a failed call surfaces as. Network failures and timeouts map here too,
/// never to "absent".
#[derive(Debug, Clone, Copy)]
enum Step {
    Lookup,
    Create,
    Update,
    Link,
}

impl Step {
    fn error(self, endpoint: &str, status: Option<u16>, message: String) -> Error {
        let endpoint = endpoint.to_string();
        match self {
            Step::Lookup => Error::Lookup {
                endpoint,
                status,
                message,
            },
            Step::Create => Error::Create {
                endpoint,
                status,
                message,
            },
            Step::Update => Error::Update {
                endpoint,
                status,
                message,
            },
            Step::Link => Error::Link {
                endpoint,
                status,
                message,
            },
        }
    }
}

/// Extract the rel="next" target from an RFC 5988 Link header value.
fn parse_next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|part| {
        let (target, params) = part.split_once(';')?;
        if params.trim() == r#"rel="next""# {
            Some(
                target
                    .trim()
                    .trim_start_matches('<')
                    .trim_end_matches('>')
                    .to_string(),
            )
        } else {
            None
        }
    })
}

fn next_page_url(response: &Response) -> Option<String> {
    let header = response.headers().get(reqwest::header::LINK)?.to_str().ok()?;
    parse_next_link(header)
}

pub struct CanvasClient {
    client: Client,
    base_url: String,
    course_id: String,
    token: String,
    published: bool,
}

impl CanvasClient {
    pub fn new(token: String, course_id: String, base_url: Option<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(CanvasClient {
            client,
            base_url: base_url.unwrap_or_else(|| "https://canvas.instructure.com".into()),
            course_id,
            token,
            published: true,
        })
    }

    /// Whether created modules, pages, and items go live immediately.
    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    fn send(
        &self,
        step: Step,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Response> {
        let mut request = self
            .client
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .header("User-Agent", "coursepress/0.1 (Rust)");

        if let Some(body) = body {
            request = request.json(body);
        }

        request
            .send()
            .map_err(|e| step.error(url, None, e.to_string()))
    }

    fn checked(
        &self,
        step: Step,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Response> {
        let response = self.send(step, method, url, body)?;

        let status = response.status();
        if !status.is_success() {
            let message = truncate_str(&response.text().unwrap_or_default(), 200);
            return Err(step.error(url, Some(status.as_u16()), message));
        }

        Ok(response)
    }

    fn parse<T: serde::de::DeserializeOwned>(
        step: Step,
        url: &str,
        response: Response,
    ) -> Result<T> {
        let body = response
            .text()
            .map_err(|e| step.error(url, None, e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            eprintln!("Failed to parse response from {}: {}", url, e);
            eprintln!("Response body (first 500 chars): {}", truncate_str(&body, 500));
            Error::Parse(e)
        })
    }

    /// GET a listing endpoint and follow rel="next" links until exhausted.
    /// Concluding "absent" from a partial listing would cause duplicate
    /// creation, so every result page is consumed.
    fn get_paginated<T: serde::de::DeserializeOwned>(
        &self,
        step: Step,
        first_url: String,
    ) -> Result<Vec<T>> {
        let mut url = first_url;
        let mut items = Vec::new();

        loop {
            let response = self.checked(step, Method::GET, &url, None)?;
            let next = next_page_url(&response);

            let page: Vec<T> = Self::parse(step, &url, response)?;
            items.extend(page);

            match next {
                Some(n) => url = n,
                None => return Ok(items),
            }
        }
    }

    pub fn list_modules(&self) -> Result<Vec<Module>> {
        self.get_paginated(
            Step::Lookup,
            format!(
                "{}/api/v1/courses/{}/modules?per_page=100",
                self.base_url, self.course_id
            ),
        )
    }

    pub fn create_module(&self, name: &str) -> Result<Module> {
        let url = format!("{}/api/v1/courses/{}/modules", self.base_url, self.course_id);
        let payload = json!({
            "module": { "name": name, "published": self.published }
        });

        let response = self.checked(Step::Create, Method::POST, &url, Some(&payload))?;
        Self::parse(Step::Create, &url, response)
    }

    /// Direct lookup by slug. 404 means confirmed absent; any other
    /// non-success is a lookup failure and must not be treated as absence.
    pub fn get_page(&self, slug: &str) -> Result<Option<Page>> {
        let url = format!(
            "{}/api/v1/courses/{}/pages/{}",
            self.base_url, self.course_id, slug
        );

        let response = self.send(Step::Lookup, Method::GET, &url, None)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let message = truncate_str(&response.text().unwrap_or_default(), 200);
            return Err(Step::Lookup.error(&url, Some(status.as_u16()), message));
        }

        Ok(Some(Self::parse(Step::Lookup, &url, response)?))
    }

    pub fn create_page(&self, title: &str, body: &str) -> Result<Page> {
        let url = format!("{}/api/v1/courses/{}/pages", self.base_url, self.course_id);
        let payload = json!({
            "wiki_page": { "title": title, "body": body, "published": self.published }
        });

        let response = self.checked(Step::Create, Method::POST, &url, Some(&payload))?;
        Self::parse(Step::Create, &url, response)
    }

    /// Update an existing page's body in place, addressed by its remote slug.
    pub fn update_page(&self, page_url: &str, body: &str) -> Result<Page> {
        let url = format!(
            "{}/api/v1/courses/{}/pages/{}",
            self.base_url, self.course_id, page_url
        );
        let payload = json!({ "wiki_page": { "body": body } });

        let response = self.checked(Step::Update, Method::PUT, &url, Some(&payload))?;
        Self::parse(Step::Update, &url, response)
    }

    pub fn list_module_items(&self, module_id: u64) -> Result<Vec<ModuleItem>> {
        self.get_paginated(
            Step::Link,
            format!(
                "{}/api/v1/courses/{}/modules/{}/items?per_page=100",
                self.base_url, self.course_id, module_id
            ),
        )
    }

    pub fn create_module_item(
        &self,
        module_id: u64,
        title: &str,
        page_url: &str,
    ) -> Result<ModuleItem> {
        let url = format!(
            "{}/api/v1/courses/{}/modules/{}/items",
            self.base_url, self.course_id, module_id
        );
        let payload = json!({
            "module_item": {
                "title": title,
                "type": "Page",
                "page_url": page_url,
                "published": self.published
            }
        });

        let response = self.checked(Step::Link, Method::POST, &url, Some(&payload))?;
        Self::parse(Step::Link, &url, response)
    }
}
