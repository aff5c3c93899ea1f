//! # Moviehub Store
//!
//! An in-memory catalog of movie records with monotonic id assignment.
//!
//! ## Overview
//!
//! This library owns the mapping from movie id to [`Movie`] and the counter
//! that hands out ids. It performs no validation (that is the HTTP layer's
//! job) and holds no locks: callers in a concurrent environment wrap the
//! store in their own synchronization.
//!
//! ## Ordering
//!
//! Listings preserve insertion order. Ids are assigned from a counter that
//! only ever increases and are never reused, so a `BTreeMap` keyed by id
//! iterates in exactly the order movies were added.
//!
//! ## Example
//!
//! ```
//! use moviehub::MovieStore;
//!
//! let mut store = MovieStore::new();
//! let movie = store.add_new_movie("Harry Potter", 2001);
//! assert_eq!(movie.id, 0);
//! assert!(store.contains_id(0));
//! ```

mod movie;
mod store;

pub use movie::Movie;
pub use store::MovieStore;
