// File: src/routes.rs
// Purpose: HTTP handlers for the form, its change events, submission and results

use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use regform::{FormEvent, FormState, RegistrationForm, ResultsView, Route, SubmitOutcome};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::pages;
use crate::request::{failed_fields, field_value, FormRequest, RequestMode};
use crate::AppState;

type Fields = Vec<(String, String)>;

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(Route::Form.path(), get(form_page).post(submit))
        .route(pages::form::CHANGE_PATH, post(change))
        .route(Route::Results.path(), get(results_page))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// How much of the form an HTML response carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormPart {
    Page,
    Form,
    Status,
}

fn render_form(form: &RegistrationForm, req: &FormRequest, status: StatusCode, part: FormPart) -> Response {
    let view = form.view();
    let markup = match (req.preferred_mode(), part) {
        (RequestMode::Json, _) => return (status, Json(view)).into_response(),
        (RequestMode::Html, FormPart::Page) => pages::form::page(&view),
        (RequestMode::Html, FormPart::Form) => pages::form::fragment(&view),
        (RequestMode::Html, FormPart::Status) => pages::form::status_update(&view),
    };
    (status, Html(markup.into_string())).into_response()
}

async fn form_page(req: FormRequest) -> Response {
    render_form(&RegistrationForm::new(), &req, StatusCode::OK, FormPart::Page)
}

/// One input changed: rebuild the form from the posted values and apply the
/// change. htmx gets the whole form back only when the change reshapes it;
/// other edits get the out-of-band status update so typed input survives.
async fn change(req: FormRequest, Form(fields): Form<Fields>) -> Result<Response, AppError> {
    let state = FormState::from_fields(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let mut form = RegistrationForm::restore(state, failed_fields(&fields));
    let mut part = FormPart::Form;

    if let Some(name) = req.trigger_name.as_deref() {
        let event = FormEvent::from_input(name, field_value(&fields, name))?;
        debug!(input = name, "form changed");
        if !event.reshapes_form() {
            part = FormPart::Status;
        }
        form = form.apply(event);
    }

    if !req.is_htmx {
        part = FormPart::Page;
    }
    Ok(render_form(&form, &req, StatusCode::OK, part))
}

async fn submit(
    State(state): State<AppState>,
    req: FormRequest,
    Form(fields): Form<Fields>,
) -> Result<Response, AppError> {
    let values = FormState::from_fields(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let outcome = RegistrationForm::from_state(values).submit();
    let route = outcome.route();

    let response = match outcome {
        SubmitOutcome::Accepted(submission) => {
            let token = state.handoff.put(submission).await;
            info!(%token, "registration accepted");
            let location = format!("{}?token={}", route.path(), token);
            match req.preferred_mode() {
                RequestMode::Json => {
                    (StatusCode::CREATED, Json(json!({ "location": location }))).into_response()
                }
                RequestMode::Html => {
                    let location = HeaderValue::from_str(&location)
                        .with_context(|| format!("invalid redirect location {:?}", location))?;
                    (StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response()
                }
            }
        }
        SubmitOutcome::Rejected(form) => {
            info!(failed = form.errors().len(), "registration rejected");
            render_form(&form, &req, StatusCode::UNPROCESSABLE_ENTITY, FormPart::Page)
        }
    };
    Ok(response)
}

#[derive(Debug, Deserialize)]
struct ResultsQuery {
    token: Option<String>,
}

async fn results_page(
    State(state): State<AppState>,
    req: FormRequest,
    Query(query): Query<ResultsQuery>,
) -> Response {
    let payload = match query.token.as_deref().map(Uuid::parse_str) {
        Some(Ok(token)) => {
            let payload = state.handoff.take(&token).await;
            if payload.is_none() {
                debug!(%token, "no submission waiting for token");
            }
            payload
        }
        Some(Err(err)) => {
            warn!("malformed handoff token: {}", err);
            None
        }
        None => None,
    };

    let view = ResultsView::new(payload);
    match req.preferred_mode() {
        RequestMode::Json => {
            let submission = match &view {
                ResultsView::Details(submission) => Some(submission),
                ResultsView::Empty => None,
            };
            Json(json!({ "submission": submission })).into_response()
        }
        RequestMode::Html => Html(pages::success::page(&view).into_string()).into_response(),
    }
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
