//! Browser client for the analyzer. One page, served from the same binary;
//! the upload, timeout handling, and result rendering live in the template.

use askama::Template;
use axum::response::Html;

use crate::errors::AppError;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub version: &'static str,
}

/// GET /ui
pub async fn ui_handler() -> Result<Html<String>, AppError> {
    let page = IndexPage {
        version: env!("CARGO_PKG_VERSION"),
    };
    Ok(Html(page.render()?))
}
