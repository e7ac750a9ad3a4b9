//! Contact form: show on GET, generate a wallpaper on POST.

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use contact_card::ContactRecord;

use crate::app::SharedState;
use crate::error::AppError;
use crate::template::{FormView, Template};

/// GET /
pub async fn show_form(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let template = load_template(&state)?;
    render(&template, &FormView::default())
}

/// POST /
pub async fn submit_form(
    State(state): State<SharedState>,
    Form(contact): Form<ContactRecord>,
) -> Result<Html<String>, AppError> {
    let template = load_template(&state)?;

    let svc = state.wallpaper().clone();
    let record = contact.clone();
    let url = tokio::task::spawn_blocking(move || svc.generate(&record))
        .await
        .map_err(|e| AppError::Internal(format!("wallpaper task failed: {e}")))??;

    tracing::info!(
        url = %url,
        first_name = %contact.first_name,
        sur_name = %contact.sur_name,
        "Wallpaper generated"
    );
    render(&template, &FormView::submitted(contact, url))
}

fn load_template(state: &SharedState) -> Result<Template, AppError> {
    Template::load(state.template_path()).map_err(AppError::TemplateLoad)
}

fn render(template: &Template, view: &FormView) -> Result<Html<String>, AppError> {
    template.render(view).map(Html).map_err(AppError::Render)
}
