use crate::Movie;
use std::collections::BTreeMap;

/// In-memory movie store.
///
/// Maps id to [`Movie`] and owns the id counter. Ids start at 0, increase by
/// one per added movie, and are never reused, even after deletion. Because of
/// that, iterating the underlying `BTreeMap` in key order is the same as
/// insertion order.
///
/// The store does no validation and no locking. It assumes single-threaded
/// access; the HTTP layer wraps it in an `RwLock` when serving concurrently.
#[derive(Debug, Default)]
pub struct MovieStore {
    movies: BTreeMap<u64, Movie>,
    next_id: u64,
}

impl MovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a movie, assigning the next id. Always succeeds; the caller is
    /// responsible for having validated the title and year.
    pub fn add_new_movie(&mut self, title: impl Into<String>, year: i32) -> Movie {
        let movie = Movie {
            title: title.into(),
            year,
            id: self.next_id,
        };
        self.next_id += 1;
        self.movies.insert(movie.id, movie.clone());
        movie
    }

    pub fn get_movie(&self, id: u64) -> Option<&Movie> {
        self.movies.get(&id)
    }

    pub fn contains_id(&self, id: u64) -> bool {
        self.movies.contains_key(&id)
    }

    /// All movies in insertion order.
    pub fn all_movies(&self) -> Vec<Movie> {
        self.movies.values().cloned().collect()
    }

    /// Movies with exactly the given year, in insertion order.
    pub fn movies_by_year(&self, year: i32) -> Vec<Movie> {
        self.movies
            .values()
            .filter(|movie| movie.year == year)
            .cloned()
            .collect()
    }

    /// Remove a movie. Returns whether an entry was actually removed. The id
    /// is not recycled.
    pub fn delete_movie(&mut self, id: u64) -> bool {
        self.movies.remove(&id).is_some()
    }

    /// Empty the store and reset the id counter to 0. Intended for test
    /// isolation, not for request handling.
    pub fn clear(&mut self) {
        self.movies.clear();
        self.next_id = 0;
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_assigned_sequentially() {
        let mut store = MovieStore::new();

        for expected in 0..5u64 {
            let movie = store.add_new_movie(format!("Movie {expected}"), 2000);
            assert_eq!(movie.id, expected);
        }

        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = MovieStore::new();

        store.add_new_movie("First", 1999);
        store.add_new_movie("Second", 2000);
        assert!(store.delete_movie(1));

        let third = store.add_new_movie("Third", 2001);
        assert_eq!(third.id, 2);
        assert!(!store.contains_id(1));
    }

    #[test]
    fn test_get_and_contains() {
        let mut store = MovieStore::new();
        let added = store.add_new_movie("Alien", 1979);

        assert!(store.contains_id(added.id));
        assert_eq!(store.get_movie(added.id), Some(&added));
        assert!(!store.contains_id(99));
        assert_eq!(store.get_movie(99), None);
    }

    #[test]
    fn test_all_movies_insertion_order() {
        let mut store = MovieStore::new();
        store.add_new_movie("A", 2001);
        store.add_new_movie("B", 2002);
        store.add_new_movie("C", 2003);

        let titles: Vec<_> = store.all_movies().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_order_preserved_across_interleaved_deletes() {
        let mut store = MovieStore::new();
        store.add_new_movie("A", 2001);
        store.add_new_movie("B", 2002);
        store.delete_movie(0);
        store.add_new_movie("C", 2003);
        store.delete_movie(2);
        store.add_new_movie("D", 2004);

        let ids: Vec<_> = store.all_movies().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_movies_by_year_exact_match() {
        let mut store = MovieStore::new();
        store.add_new_movie("A", 2001);
        store.add_new_movie("B", 2005);
        store.add_new_movie("C", 2001);

        let matched: Vec<_> = store
            .movies_by_year(2001)
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(matched, vec!["A", "C"]);

        assert!(store.movies_by_year(1980).is_empty());
    }

    #[test]
    fn test_delete_is_noop_when_absent() {
        let mut store = MovieStore::new();
        store.add_new_movie("A", 2001);

        assert!(!store.delete_movie(5));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_resets_counter() {
        let mut store = MovieStore::new();
        store.add_new_movie("A", 2001);
        store.add_new_movie("B", 2002);

        store.clear();
        assert!(store.is_empty());

        let movie = store.add_new_movie("C", 2003);
        assert_eq!(movie.id, 0);
    }
}
