//! REST calls shared by every catalog screen.
//!
//! Each call only gathers `(status, body)`; interpreting them is left to
//! `contracts::shared::api_error`.

use crate::shared::api_utils::{api_base, api_url};
use contracts::domain::common::{CatalogEntity, EntityForm, EntityId};
use contracts::shared::api_error::{
    parse_delete_response, parse_list_response, parse_save_response, ApiError,
};
use gloo_net::http::{Request, Response};

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(format!("No se pudo conectar con el servidor ({})", e))
}

async fn status_and_body(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    Ok((status, body))
}

/// GET the whole collection
pub async fn fetch_all<E: CatalogEntity>() -> Result<Vec<E>, ApiError> {
    let response = Request::get(&api_url(E::COLLECTION_PATH))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(transport)?;

    let (status, body) = status_and_body(response).await?;
    parse_list_response(status, &body)
}

/// POST a new record; the payload is trimmed before sending
pub async fn create<E: CatalogEntity>(form: &E::Form) -> Result<(), ApiError> {
    let payload = form.trimmed();
    let response = Request::post(&api_url(E::ELEMENT_PATH))
        .json(&payload)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(transport)?;

    let (status, body) = status_and_body(response).await?;
    parse_save_response(status, &body, E::TEXTS.conflict)
}

/// PUT an existing record
pub async fn update<E: CatalogEntity>(id: EntityId, form: &E::Form) -> Result<(), ApiError> {
    let payload = form.trimmed();
    let response = Request::put(&E::element_url(&api_base(), id))
        .json(&payload)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(transport)?;

    let (status, body) = status_and_body(response).await?;
    parse_save_response(status, &body, E::TEXTS.conflict)
}

/// DELETE a record
pub async fn delete<E: CatalogEntity>(id: EntityId) -> Result<(), ApiError> {
    let response = Request::delete(&E::element_url(&api_base(), id))
        .send()
        .await
        .map_err(transport)?;

    parse_delete_response(response.status(), E::TEXTS.delete_failed)
}
