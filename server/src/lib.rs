//! Movie catalog server library.
//!
//! This module exposes the server components for use in integration tests.

#[macro_use]
extern crate rocket;

pub mod error;
pub mod fairing;
pub mod models;
pub mod params;
pub mod respond;
pub mod routes;
pub mod validate;

use moviehub::MovieStore;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use validate::YearPolicy;

/// Store shared across request handlers.
///
/// The store itself assumes single-threaded access; Rocket dispatches
/// concurrently, so every read and mutation goes through this lock to keep
/// id assignment and the map consistent.
#[derive(Debug, Default)]
pub struct SharedStore(RwLock<MovieStore>);

impl SharedStore {
    pub fn read(&self) -> RwLockReadGuard<'_, MovieStore> {
        self.0.read().expect("RwLock poisoned")
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, MovieStore> {
        self.0.write().expect("RwLock poisoned")
    }
}

/// Mount every route and catcher of the movie API onto a Rocket instance.
pub fn mount_api(
    base: rocket::Rocket<rocket::Build>,
    store: SharedStore,
    policy: YearPolicy,
) -> rocket::Rocket<rocket::Build> {
    base.manage(store)
        .manage(policy)
        .attach(fairing::RequestTimer)
        .mount(
            "/",
            routes![
                routes::list_movies,
                routes::get_movie,
                routes::create_movie,
                routes::delete_movie,
                routes::get_malformed,
                routes::post_malformed,
                routes::delete_malformed,
                routes::head_not_allowed,
            ],
        )
        .register("/", catchers![routes::unmatched, routes::any_error])
}
