use rocket::http::{Header, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use serde::Serialize;
use std::io::Cursor;

/// Exact Content-Type value carried by every JSON response, and the value
/// POST requests are required to send.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// JSON responder that pins the Content-Type header to [`JSON_CONTENT_TYPE`].
///
/// `rocket::serde::json::Json` renders `application/json` without a charset;
/// the API contract names the charset explicitly, so bodies are built by hand
/// here.
#[derive(Debug)]
pub struct ApiJson<T> {
    status: Status,
    value: T,
}

impl<T> ApiJson<T> {
    pub fn new(status: Status, value: T) -> Self {
        Self { status, value }
    }

    pub fn ok(value: T) -> Self {
        Self::new(Status::Ok, value)
    }
}

impl<'r, T: Serialize> Responder<'r, 'static> for ApiJson<T> {
    fn respond_to(self, _request: &'r Request<'_>) -> response::Result<'static> {
        let body = serde_json::to_string(&self.value).map_err(|_| Status::InternalServerError)?;

        Response::build()
            .status(self.status)
            .header(Header::new("Content-Type", JSON_CONTENT_TYPE))
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}
