// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sidepanel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sidepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTTP panel: public submission view and admin moderation view.
//!
//! One route. `GET /` renders the user view, `GET /?view=admin` the admin
//! view; the admin view is reachable by anyone who knows the query flag,
//! which is the product's pre-existing access model. `POST /` applies one
//! form action through the store and redirects back to the originating view
//! so a refresh never resubmits the form.

mod views;

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;

use crate::model::Timestamp;
use crate::store::{SessionFile, StoreError};

pub fn router(store: Arc<SessionFile>) -> Router {
    Router::new()
        .route("/", get(get_panel).post(post_action))
        .with_state(store)
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ViewParams {
    #[serde(default)]
    view: Option<String>,
}

impl ViewParams {
    fn is_admin(&self) -> bool {
        self.view.as_deref() == Some("admin")
    }

    fn panel_path(&self) -> &'static str {
        if self.is_admin() {
            "/?view=admin"
        } else {
            "/"
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ActionForm {
    action: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    question_index: Option<String>,
}

async fn get_panel(
    State(store): State<Arc<SessionFile>>,
    Query(params): Query<ViewParams>,
) -> Result<Html<String>, PanelError> {
    let session = store.load()?;
    let page = if params.is_admin() {
        views::render_admin_view(&session)
    } else {
        views::render_user_view(&session)
    };
    Ok(Html(page))
}

async fn post_action(
    State(store): State<Arc<SessionFile>>,
    Query(params): Query<ViewParams>,
    Form(form): Form<ActionForm>,
) -> Result<Redirect, PanelError> {
    match form.action.as_str() {
        "set_title" => store.set_title(form.title.unwrap_or_default())?,
        "add_question" => {
            store.add_question(form.question.unwrap_or_default(), Timestamp::now())?;
        }
        "delete_question" => {
            // An index that does not parse gets the same treatment as an
            // out-of-range one: ignored.
            let index = form
                .question_index
                .as_deref()
                .and_then(|raw| raw.trim().parse::<usize>().ok());
            if let Some(index) = index {
                store.delete_question(index)?;
            }
        }
        _ => {}
    }

    Ok(Redirect::to(params.panel_path()))
}

#[derive(Debug)]
struct PanelError(StoreError);

impl From<StoreError> for PanelError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PanelError {
    fn into_response(self) -> Response {
        match &self.0 {
            StoreError::Busy { .. } => {
                tracing::warn!(error = %self.0, "session store busy");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "The panel is busy, please retry.",
                )
                    .into_response()
            }
            _ => {
                tracing::error!(error = %self.0, "session store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The panel hit an internal error.",
                )
                    .into_response()
            }
        }
    }
}
