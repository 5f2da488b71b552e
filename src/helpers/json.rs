use actix_web::error::InternalError;
use actix_web::http::header;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde_derive::Serialize;

// Error payload shape: {"status": "Error", "code": 404, "message": ".."}.
// Success bodies are emitted by the handlers themselves, since the API
// contract fixes their shape (summaries and the paginated envelope).
#[derive(Serialize)]
pub(crate) struct JsonResponse {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
}

#[derive(Default)]
pub struct JsonResponseBuilder {}

impl JsonResponse {
    pub(crate) fn build() -> JsonResponseBuilder {
        JsonResponseBuilder::default()
    }
}

impl JsonResponseBuilder {
    fn error(self, code: StatusCode, message: &str, fallback: &str) -> Error {
        let message = if !message.trim().is_empty() {
            message.to_string()
        } else {
            fallback.to_string()
        };

        let body = JsonResponse {
            status: "Error".to_string(),
            message: message.clone(),
            code: code.as_u16() as u32,
        };

        InternalError::from_response(message, HttpResponse::build(code).json(body)).into()
    }

    pub(crate) fn bad_request(self, message: impl AsRef<str>) -> Error {
        self.error(StatusCode::BAD_REQUEST, message.as_ref(), "Bad request")
    }

    pub(crate) fn form_error(self, message: impl AsRef<str>) -> Error {
        self.error(StatusCode::BAD_REQUEST, message.as_ref(), "Validation error")
    }

    pub(crate) fn unauthorized(self, message: impl AsRef<str>) -> Error {
        self.error(StatusCode::UNAUTHORIZED, message.as_ref(), "Unauthorized")
    }

    pub(crate) fn not_found(self, message: impl AsRef<str>) -> Error {
        self.error(StatusCode::NOT_FOUND, message.as_ref(), "Object not found")
    }

    pub(crate) fn internal_server_error(self, message: impl AsRef<str>) -> Error {
        self.error(
            StatusCode::INTERNAL_SERVER_ERROR,
            message.as_ref(),
            "Internal error",
        )
    }

    pub(crate) fn created<T: serde::Serialize>(self, location: String, item: T) -> HttpResponse {
        HttpResponse::Created()
            .insert_header((header::LOCATION, location))
            .json(item)
    }

    pub(crate) fn no_content(self) -> HttpResponse {
        HttpResponse::NoContent().finish()
    }
}
