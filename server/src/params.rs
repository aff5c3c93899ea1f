//! Infallible request and path guards.
//!
//! Rocket's own guards reject bad input by forwarding to a catcher, which
//! loses the structured error body. These guards always succeed and hand the
//! classification to the route, so every failure renders the API's error
//! envelope.

use crate::respond::JSON_CONTENT_TYPE;
use rocket::request::{self, FromParam, FromRequest, Request};
use std::convert::Infallible;

/// Classification of a `/movies/<id>` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdParam {
    /// Non-negative integer usable as a store key.
    Id(u64),
    /// Well-formed integer that can never name a stored movie.
    Negative,
    /// Not an integer at all.
    Invalid,
}

impl IdParam {
    pub fn parse(segment: &str) -> Self {
        match segment.parse::<i64>() {
            Ok(id) if id >= 0 => Self::Id(id as u64),
            Ok(_) => Self::Negative,
            Err(_) => Self::Invalid,
        }
    }
}

impl<'a> FromParam<'a> for IdParam {
    type Error = Infallible;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        Ok(Self::parse(param))
    }
}

/// Classification of the query string on `GET /movies`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListQuery {
    /// No query string: list everything.
    All,
    /// `?year=<N>` with an integer value.
    Year(i32),
    /// `?year=<...>` where the value is not an integer.
    NonIntegerYear,
    /// Anything else.
    Unrecognized,
}

impl ListQuery {
    pub fn parse(query: Option<&str>) -> Self {
        let Some(query) = query else {
            return Self::All;
        };

        if query.is_empty() {
            return Self::All;
        }

        // Only a single year=<N> pair is recognized.
        if query.contains('&') {
            return Self::Unrecognized;
        }

        match query.split_once('=') {
            Some(("year", value)) => value.parse().map_or(Self::NonIntegerYear, Self::Year),
            _ => Self::Unrecognized,
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ListQuery {
    type Error = Infallible;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        request::Outcome::Success(Self::parse(req.uri().query().map(|q| q.as_str())))
    }
}

/// Whether a request body was declared with the one supported content type.
///
/// The header must equal `application/json; charset=UTF-8` exactly; a bare
/// `application/json` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyContentType {
    Json,
    Unsupported,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for BodyContentType {
    type Error = Infallible;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let declared = req.headers().get_one("Content-Type");

        if declared == Some(JSON_CONTENT_TYPE) {
            request::Outcome::Success(Self::Json)
        } else {
            request::Outcome::Success(Self::Unsupported)
        }
    }
}
