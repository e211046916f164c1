/// Application layer - Use cases and DTOs
///
/// This layer holds the screen state (router, store, request workflow)
/// and orchestrates it with the infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod navigation;
pub mod read_models;
pub mod request_workflow;
pub mod store;
pub mod use_cases;
