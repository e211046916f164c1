pub mod catalog_filter;
mod request_id;

pub use catalog_filter::CatalogFilter;
pub use request_id::RequestId;
