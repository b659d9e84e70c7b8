//! Mock upstream catalog with call counters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::pokeapi::{FetchError, PokeApi, PokemonDetail, PokemonPage};

/// Mock [`PokeApi`] implementation.
///
/// Details are looked up both by name and by numeric id, like the real
/// upstream. Unknown identifiers yield `FetchError::HttpStatus(404)`.
#[derive(Default)]
pub struct MockPokeApi {
    list: Mutex<Option<PokemonPage>>,
    details: Mutex<HashMap<String, PokemonDetail>>,
    list_calls: AtomicU32,
    detail_calls: AtomicU32,
    last_list_params: Mutex<Option<(u32, u32)>>,
    fail_next_list: AtomicBool,
    fail_next_detail: AtomicBool,
}

impl MockPokeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page returned by every `fetch_list` call.
    pub fn set_list(&self, page: PokemonPage) {
        *self.list.lock().unwrap() = Some(page);
    }

    /// Register a detail, addressable by name and by id.
    pub fn add_detail(&self, detail: PokemonDetail) {
        let mut details = self.details.lock().unwrap();
        details.insert(detail.id.to_string(), detail.clone());
        details.insert(detail.name.clone(), detail);
    }

    /// Make the next `fetch_list` call fail with a network error.
    pub fn fail_next_list(&self) {
        self.fail_next_list.store(true, Ordering::SeqCst);
    }

    /// Make the next `fetch_detail` call fail with a network error.
    pub fn fail_next_detail(&self) {
        self.fail_next_detail.store(true, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> u32 {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> u32 {
        self.detail_calls.load(Ordering::SeqCst)
    }

    /// The (offset, limit) of the most recent `fetch_list` call.
    pub fn last_list_params(&self) -> Option<(u32, u32)> {
        *self.last_list_params.lock().unwrap()
    }
}

#[async_trait]
impl PokeApi for MockPokeApi {
    async fn fetch_list(&self, offset: u32, limit: u32) -> Result<PokemonPage, FetchError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_list_params.lock().unwrap() = Some((offset, limit));

        if self.fail_next_list.swap(false, Ordering::SeqCst) {
            return Err(FetchError::Network("mock upstream down".to_string()));
        }

        self.list
            .lock()
            .unwrap()
            .clone()
            .ok_or(FetchError::HttpStatus(404))
    }

    async fn fetch_detail(&self, identifier: &str) -> Result<PokemonDetail, FetchError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_next_detail.swap(false, Ordering::SeqCst) {
            return Err(FetchError::Network("mock upstream down".to_string()));
        }

        self.details
            .lock()
            .unwrap()
            .get(identifier)
            .cloned()
            .ok_or(FetchError::HttpStatus(404))
    }
}
