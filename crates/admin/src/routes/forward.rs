//! Multipart forwarding.
//!
//! Management surfaces that carry file uploads (resources, blog posts,
//! member registration, thread edits) are passed through to the
//! platform API verbatim: each incoming part becomes an outgoing part
//! with the same name, file name, and content type.

use axum::extract::Multipart;

use crate::error::AppError;

/// Re-buffers an incoming multipart request into an outgoing form.
///
/// # Errors
///
/// `AppError::BadRequest` when the incoming body is malformed or a
/// part carries no name.
pub async fn into_platform_form(
    mut multipart: Multipart,
) -> Result<reqwest::multipart::Form, AppError> {
    let mut form = reqwest::multipart::Form::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(format!("malformed multipart body: {err}")))?
    {
        let name = field
            .name()
            .map(ToOwned::to_owned)
            .ok_or_else(|| AppError::BadRequest("multipart part without a name".to_owned()))?;

        if let Some(file_name) = field.file_name().map(ToOwned::to_owned) {
            let content_type = field.content_type().map(ToOwned::to_owned);
            let bytes = field
                .bytes()
                .await
                .map_err(|err| AppError::BadRequest(format!("failed to read upload: {err}")))?;

            let mut part = reqwest::multipart::Part::bytes(bytes.to_vec()).file_name(file_name);
            if let Some(content_type) = content_type {
                part = part
                    .mime_str(&content_type)
                    .map_err(|err| AppError::BadRequest(format!("bad content type: {err}")))?;
            }
            form = form.part(name, part);
        } else {
            let text = field
                .text()
                .await
                .map_err(|err| AppError::BadRequest(format!("failed to read field: {err}")))?;
            form = form.text(name, text);
        }
    }

    Ok(form)
}
