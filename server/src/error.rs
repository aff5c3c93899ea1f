use crate::respond::ApiJson;
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire format for every error body.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_name: String,
    pub error_details: Vec<String>,
}

/// Client-facing request failures.
///
/// Each variant maps to one status code and one `errorName`. The details list
/// is assembled per variant instead of being packed into a delimited string,
/// so a message containing ';' cannot corrupt the response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Path id segment is not an integer.
    #[error("an invalid ID was supplied")]
    InvalidId,

    /// Well-formed id with no matching movie.
    #[error("movie not found")]
    MovieNotFound,

    /// Path shape the `/movies` resource does not serve.
    #[error("malformed request path")]
    MalformedPath,

    /// `year` query parameter present but not an integer.
    #[error("year query parameter is not an integer")]
    NonIntegerYear,

    /// Query string with anything other than a single `year` parameter.
    #[error("unrecognized query parameter")]
    UnrecognizedQuery,

    /// POST without the exact JSON content type.
    #[error("unsupported content type")]
    UnsupportedContentType,

    /// Body that does not decode into a complete movie payload.
    #[error("malformed request body")]
    MalformedBody,

    /// Payload decoded but one or more fields violate the catalog rules.
    #[error("movie payload rejected: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Method the `/movies` resource does not support.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Path outside the `/movies` resource.
    #[error("unknown path")]
    UnknownPath,
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidId | Self::MalformedPath | Self::NonIntegerYear | Self::UnrecognizedQuery => {
                Status::BadRequest
            }
            Self::MovieNotFound | Self::UnknownPath => Status::NotFound,
            Self::MethodNotAllowed => Status::MethodNotAllowed,
            Self::UnsupportedContentType => Status::UnsupportedMediaType,
            Self::MalformedBody | Self::Validation(_) => Status::UnprocessableEntity,
        }
    }

    pub fn error_name(&self) -> &'static str {
        match self {
            Self::InvalidId => "Invalid ID",
            Self::MovieNotFound => "Missing ID",
            Self::MalformedPath => "Bad request",
            Self::NonIntegerYear | Self::UnrecognizedQuery => "Invalid request",
            Self::UnsupportedContentType => "Invalid Content-Type header value",
            Self::MalformedBody | Self::Validation(_) => "Validation error",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::UnknownPath => "Not Found",
        }
    }

    fn error_details(&self) -> Vec<String> {
        let message = match self {
            Self::InvalidId => "An invalid ID was supplied",
            Self::MovieNotFound => "Movie not found",
            Self::MalformedPath => "Malformed request",
            Self::NonIntegerYear => "year query parameter must be an integer",
            Self::UnrecognizedQuery => {
                "Unrecognized query parameter — expected 'year' or malformed parameter"
            }
            Self::UnsupportedContentType => "requested data type not supported",
            Self::MalformedBody => "Malformed request body",
            Self::Validation(violations) => return violations.clone(),
            Self::MethodNotAllowed => "Supplied method is invalid",
            Self::UnknownPath => "Unknown path",
        };

        vec![message.to_string()]
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let body = ErrorResponse {
            error_name: self.error_name().to_string(),
            error_details: self.error_details(),
        };

        ApiJson::new(self.status(), body).respond_to(request)
    }
}
