/// In-memory adapters backed by the built-in seed data
mod catalog_repository;

pub use catalog_repository::InMemoryCatalogRepository;
