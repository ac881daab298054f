//! Index page: renders the browser UI and accepts text and image submissions

use axum::Form;
use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse, Response};
use log::{debug, info};
use minijinja::{Environment, context};
use serde::Deserialize;

use crate::clipboard::normalize_line_endings;
use crate::error::ServerError;
use crate::server::state::AppState;

const INDEX_TEMPLATE_NAME: &str = "index.html";
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

pub const IMAGE_COPIED: &str = "Image uploaded and copied to clipboard!";

/// Fields of the text form; anything else posted alongside is ignored
#[derive(Debug, Default, Deserialize)]
pub struct TextForm {
    pub action: Option<String>,
    pub text: Option<String>,
}

/// Template environment holding the index page.
///
/// The `.html` name turns on HTML auto-escaping for rendered values.
pub fn template_environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
    Ok(env)
}

async fn render_index(state: &AppState) -> Result<Html<String>, ServerError> {
    let last_text = state.last_text.read().await.clone();
    let template = state.templates.get_template(INDEX_TEMPLATE_NAME)?;
    let html = template.render(context! {
        last_text => last_text,
        default_base_path => state.config.default_base_path.as_str(),
    })?;
    Ok(Html(html))
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    render_index(&state).await
}

/// `POST /`
///
/// Form submissions carry text for the clipboard; any other non-empty body
/// is treated as a PNG image.
pub async fn submit(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ServerError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| ServerError::BadRequest(e.body_text()))?;
        let form = read_multipart_form(multipart).await?;
        copy_text(&state, form).await?;
        return Ok(render_index(&state).await?.into_response());
    }

    if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(form) = Form::<TextForm>::from_request(request, &state)
            .await
            .map_err(|e| ServerError::BadRequest(e.body_text()))?;
        copy_text(&state, form).await?;
        return Ok(render_index(&state).await?.into_response());
    }

    let body = Bytes::from_request(request, &state)
        .await
        .map_err(|e| ServerError::BadRequest(e.body_text()))?;

    if body.is_empty() {
        return Ok(render_index(&state).await?.into_response());
    }

    state.clipboard.set_image(&body).await?;
    info!("Image uploaded and copied to clipboard ({} bytes)", body.len());

    Ok(IMAGE_COPIED.into_response())
}

async fn read_multipart_form(mut multipart: Multipart) -> Result<TextForm, ServerError> {
    let mut form = TextForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(e.body_text()))?
    {
        let name = field.name().map(str::to_owned);
        let value = field
            .text()
            .await
            .map_err(|e| ServerError::BadRequest(e.body_text()))?;

        match name.as_deref() {
            Some("action") => form.action = Some(value),
            Some("text") => form.text = Some(value),
            _ => {}
        }
    }

    Ok(form)
}

/// Copies the submitted text to the clipboard and remembers it for the page
async fn copy_text(state: &AppState, form: TextForm) -> Result<(), ServerError> {
    if form.action.as_deref() != Some("text") {
        debug!("Form submitted without text action");
        return Ok(());
    }

    let Some(text) = form.text.filter(|text| !text.is_empty()) else {
        return Ok(());
    };

    let text = if state.config.normalize_line_endings {
        normalize_line_endings(&text)
    } else {
        text
    };

    state.clipboard.set_text(&text).await?;
    info!("Text copied to clipboard: {} characters", text.chars().count());

    *state.last_text.write().await = text;
    Ok(())
}
