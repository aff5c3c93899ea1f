use crate::SharedStore;
use crate::error::ApiError;
use crate::models::NewMovieRequest;
use crate::params::{BodyContentType, IdParam, ListQuery};
use crate::respond::ApiJson;
use crate::validate::{self, YearPolicy};
use moviehub::Movie;
use rocket::State;
use rocket::http::Status;
use rocket::response::status::NoContent;

/// List the whole catalog, or filter it by exact year with `?year=<N>`.
///
/// GET /movies
#[get("/movies")]
pub fn list_movies(
    store: &State<SharedStore>,
    query: ListQuery,
) -> Result<ApiJson<Vec<Movie>>, ApiError> {
    match query {
        ListQuery::All => Ok(ApiJson::ok(store.read().all_movies())),
        ListQuery::Year(year) => Ok(ApiJson::ok(store.read().movies_by_year(year))),
        ListQuery::NonIntegerYear => Err(ApiError::NonIntegerYear),
        ListQuery::Unrecognized => Err(ApiError::UnrecognizedQuery),
    }
}

/// Fetch a single movie by id.
///
/// GET /movies/<id>
#[get("/movies/<id>")]
pub fn get_movie(store: &State<SharedStore>, id: IdParam) -> Result<ApiJson<Movie>, ApiError> {
    match id {
        IdParam::Id(id) => store
            .read()
            .get_movie(id)
            .cloned()
            .map(ApiJson::ok)
            .ok_or(ApiError::MovieNotFound),
        IdParam::Negative => Err(ApiError::MovieNotFound),
        IdParam::Invalid => Err(ApiError::InvalidId),
    }
}

/// Add a movie. Requires the exact JSON content type and a body carrying
/// non-null `title` and `year`; field validation errors accumulate into one
/// 422 response.
///
/// POST /movies
#[post("/movies", data = "<body>")]
pub fn create_movie(
    store: &State<SharedStore>,
    policy: &State<YearPolicy>,
    content_type: BodyContentType,
    body: String,
) -> Result<ApiJson<Movie>, ApiError> {
    if content_type != BodyContentType::Json {
        return Err(ApiError::UnsupportedContentType);
    }

    let request: NewMovieRequest =
        serde_json::from_str(&body).map_err(|_| ApiError::MalformedBody)?;
    let (Some(title), Some(year)) = (request.title, request.year) else {
        return Err(ApiError::MalformedBody);
    };

    let violations = validate::validate_new_movie(&title, year, policy);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let movie = store.write().add_new_movie(title, year);
    Ok(ApiJson::new(Status::Created, movie))
}

/// Remove a movie by id. Deleting the same id twice answers 404 the second
/// time; the id is never handed out again.
///
/// DELETE /movies/<id>
#[delete("/movies/<id>")]
pub fn delete_movie(store: &State<SharedStore>, id: IdParam) -> Result<NoContent, ApiError> {
    match id {
        IdParam::Id(id) => {
            if store.write().delete_movie(id) {
                Ok(NoContent)
            } else {
                Err(ApiError::MovieNotFound)
            }
        }
        IdParam::Negative => Err(ApiError::MovieNotFound),
        IdParam::Invalid => Err(ApiError::InvalidId),
    }
}

// Lower-rank catch-alls for path shapes the resource does not serve, e.g.
// GET /movies/1/2 or DELETE /movies. Kept per method so a supported path
// with an unsupported method still reaches the 405 catcher.

#[get("/movies/<_..>", rank = 2)]
pub fn get_malformed() -> ApiError {
    ApiError::MalformedPath
}

#[post("/movies/<_..>", rank = 2)]
pub fn post_malformed() -> ApiError {
    ApiError::MalformedPath
}

#[delete("/movies/<_..>", rank = 2)]
pub fn delete_malformed() -> ApiError {
    ApiError::MalformedPath
}

// Rocket answers HEAD through GET handlers unless a HEAD route exists; the
// resource only supports GET, POST, and DELETE.
#[head("/movies/<_..>", rank = 2)]
pub fn head_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Unmatched requests. Every path under `/movies` is covered by a route for
/// the supported methods, so landing here with a `/movies` path means the
/// method is unsupported.
#[catch(404)]
pub fn unmatched(req: &rocket::Request<'_>) -> ApiError {
    if req.uri().path().as_str().starts_with("/movies") {
        ApiError::MethodNotAllowed
    } else {
        ApiError::UnknownPath
    }
}

/// Keep framework-generated errors (body limits, internal errors) in the
/// same JSON envelope as the API's own.
#[catch(default)]
pub fn any_error(status: Status, _req: &rocket::Request<'_>) -> ApiJson<crate::error::ErrorResponse> {
    ApiJson::new(
        status,
        crate::error::ErrorResponse {
            error_name: status.reason_lossy().to_string(),
            error_details: Vec::new(),
        },
    )
}
