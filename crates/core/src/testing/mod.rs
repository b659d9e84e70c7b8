//! Test doubles and fixtures shared by core unit tests and server
//! integration tests.

pub mod fixtures;
mod mock_pokeapi;

pub use mock_pokeapi::MockPokeApi;
