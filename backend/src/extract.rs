//! Request extractors whose rejections use the `{"error": …}` body

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body; a missing, malformed or mistyped body becomes a 400
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters; an unparsable id becomes a 400
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
