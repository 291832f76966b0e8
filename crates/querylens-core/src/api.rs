//! Blocking client for the analysis server's HTTP API.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::artifact::{
    DescribeResponse, QuestionAnswer, RandomQuestionsResponse, TableArtifact,
};
use crate::config::{ClientConfig, ImageFormat};
use crate::consts::STATIC_SEGMENT;
use crate::error::{QueryLensError, Result};
use crate::preview::{Blob, SourceRef};
use crate::settings::DatabaseSettings;

/// Image bytes as served, with the server's content type.
#[derive(Clone, Debug)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub url: String,
}

impl FetchedImage {
    /// Source reference and content-type hint for opening a preview.
    pub fn into_source(self) -> (SourceRef, Option<String>) {
        let blob = Blob::new(self.bytes).with_origin(self.url);
        (SourceRef::Blob(blob), self.content_type)
    }
}

#[derive(Serialize)]
struct QuestionRequest<'a> {
    question: &'a str,
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, path: &str, request: RequestBuilder) -> Result<Response> {
        debug!(path, "Sending request");
        let response = request.send()?;
        check_status(path, response)
    }

    /// `GET /schema/image`: the rendered database schema.
    pub fn schema_image(&self) -> Result<FetchedImage> {
        let path = "/schema/image";
        let response = self.send(path, self.client.get(self.url(path)))?;
        into_image(self.url(path), response)
    }

    /// `GET /describe`: one row per table/column summary.
    pub fn describe(&self) -> Result<TableArtifact> {
        let path = "/describe";
        let response = self.send(path, self.client.get(self.url(path)))?;
        parse_describe(&response.text()?)
    }

    /// `POST /question`: answer a natural-language question.
    pub fn ask(&self, question: &str, format: ImageFormat) -> Result<QuestionAnswer> {
        let question = question.trim();
        if question.is_empty() {
            return Err(QueryLensError::EmptyQuestion);
        }
        info!(question, %format, "Asking question");

        let path = "/question";
        let request = self
            .client
            .post(self.url(path))
            .query(&[("format", format.as_str())])
            .json(&QuestionRequest { question });
        let response = self.send(path, request)?;
        QuestionAnswer::from_json(&response.text()?)
    }

    /// Download an image referenced by a question result.
    pub fn fetch_image(&self, image_ref: &str) -> Result<FetchedImage> {
        let url = resolve_image_url(&self.base_url, image_ref);
        let response = self.send(image_ref, self.client.get(&url))?;
        into_image(url, response)
    }

    /// `GET /random-questions?count=N`.
    pub fn random_questions(&self, count: usize) -> Result<Vec<String>> {
        let path = "/random-questions";
        let request = self.client.get(self.url(path)).query(&[("count", count)]);
        let response = self.send(path, request)?;
        parse_random_questions(&response.text()?)
    }

    /// `POST /settings`: point the server at another database.
    pub fn update_settings(&self, settings: &DatabaseSettings) -> Result<()> {
        info!(db_path = %settings.db_path, db_type = %settings.db_type, "Updating settings");
        let path = "/settings";
        let request = self.client.post(self.url(path)).json(settings);
        self.send(path, request)?;
        Ok(())
    }
}

fn check_status(path: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response.text().ok().and_then(|body| error_detail(&body));
    Err(QueryLensError::Status {
        status: status.as_u16(),
        path: path.to_string(),
        detail,
    })
}

/// Pull the message out of an error body (`{"detail": ...}`), falling back
/// to the raw text.
fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => Some(body.to_string()),
        },
        _ => Some(body.to_string()),
    }
}

fn into_image(url: String, response: Response) -> Result<FetchedImage> {
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response.bytes()?.to_vec();
    debug!(%url, len = bytes.len(), ?content_type, "Image fetched");
    Ok(FetchedImage {
        bytes,
        content_type,
        url,
    })
}

pub fn parse_describe(body: &str) -> Result<TableArtifact> {
    let response: DescribeResponse = parse_shaped(body)?;
    Ok(TableArtifact::from_rows(response.rows))
}

pub fn parse_random_questions(body: &str) -> Result<Vec<String>> {
    let response: RandomQuestionsResponse = parse_shaped(body)?;
    Ok(response
        .questions
        .into_iter()
        .map(|q| q.into_text())
        .collect())
}

/// Syntax errors stay `Json`; valid JSON of the wrong shape is a malformed
/// artifact, the same as on `/question`.
fn parse_shaped<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value: Value = serde_json::from_str(body)?;
    serde_json::from_value(value).map_err(|e| QueryLensError::MalformedTable(e.to_string()))
}

/// Turn an image reference from a result into a fetchable URL. Absolute URLs
/// pass through; server filesystem paths are rebased at their static segment.
pub fn resolve_image_url(base_url: &str, image_ref: &str) -> String {
    if image_ref.starts_with("http://") || image_ref.starts_with("https://") {
        return image_ref.to_string();
    }

    let base = base_url.trim_end_matches('/');
    let path = image_ref.replace('\\', "/");
    if let Some(idx) = path.find(STATIC_SEGMENT) {
        return format!("{base}{}", &path[idx..]);
    }
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
