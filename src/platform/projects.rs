//! Saved projects on the server (`GET`/`POST /projects`).
//!
//! Nothing here is allowed to break the view: a failed list is an empty
//! list, a failed save is "no id".

use std::fmt;

use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::OverlayError;
use crate::state::ImageSource;
use crate::util::{clog, cwarn};

pub const PROJECTS_ENDPOINT: &str = "/projects";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Num(i64),
    Text(String),
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Num(n) => write!(f, "{n}"),
            ProjectId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub image: String,
}

#[derive(Serialize)]
struct SaveRequest<'a> {
    image: &'a str,
}

#[derive(Deserialize)]
struct SaveResponse {
    id: ProjectId,
}

pub fn parse_project_list(body: &str) -> Result<Vec<ProjectRecord>, OverlayError> {
    serde_json::from_str(body).map_err(|e| OverlayError::Persistence(e.to_string()))
}

pub fn parse_save_response(body: &str) -> Result<ProjectId, OverlayError> {
    serde_json::from_str::<SaveResponse>(body)
        .map(|r| r.id)
        .map_err(|e| OverlayError::Persistence(e.to_string()))
}

pub fn save_request_body(image: &ImageSource) -> Result<String, OverlayError> {
    serde_json::to_string(&SaveRequest {
        image: image.as_str(),
    })
    .map_err(|e| OverlayError::Persistence(e.to_string()))
}

/// Records whose image cannot be displayed are dropped.
pub fn records_to_sources(records: Vec<ProjectRecord>) -> Vec<ImageSource> {
    records
        .into_iter()
        .filter_map(|r| ImageSource::parse(&r.image).ok())
        .collect()
}

async fn fetch_text(method: &str, body: Option<String>) -> Result<String, OverlayError> {
    let window = web_sys::window().ok_or_else(|| OverlayError::Persistence("no window".into()))?;
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(b) = &body {
        opts.set_body(&JsValue::from_str(b));
    }
    let request =
        Request::new_with_str_and_init(PROJECTS_ENDPOINT, &opts).map_err(OverlayError::from_js)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(OverlayError::from_js)?;
    }
    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(OverlayError::from_js)?
        .dyn_into()
        .map_err(OverlayError::from_js)?;
    if !resp.ok() {
        return Err(OverlayError::Persistence(format!(
            "{method} {PROJECTS_ENDPOINT}: HTTP {}",
            resp.status()
        )));
    }
    let text = JsFuture::from(resp.text().map_err(OverlayError::from_js)?)
        .await
        .map_err(OverlayError::from_js)?;
    text.as_string()
        .ok_or_else(|| OverlayError::Persistence("response body is not text".into()))
}

pub async fn list_projects() -> Vec<ImageSource> {
    let records = match fetch_text("GET", None).await.and_then(|b| parse_project_list(&b)) {
        Ok(r) => r,
        Err(e) => {
            cwarn(&format!("loading projects failed: {e}"));
            return Vec::new();
        }
    };
    let total = records.len();
    let sources = records_to_sources(records);
    clog(&format!("loaded {} of {} saved projects", sources.len(), total));
    sources
}

pub async fn save_project(image: &ImageSource) -> Option<ProjectId> {
    let result = match save_request_body(image) {
        Ok(body) => fetch_text("POST", Some(body))
            .await
            .and_then(|b| parse_save_response(&b)),
        Err(e) => Err(e),
    };
    match result {
        Ok(id) => {
            clog(&format!("project saved as {id}"));
            Some(id)
        }
        Err(e) => {
            cwarn(&format!("saving project failed: {e}"));
            None
        }
    }
}
