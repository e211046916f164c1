/// Type alias for Result with anyhow::Error as the error type.
/// Domain errors are raised as [`CatalogError`](super::CatalogError) and
/// converted with `?`, so callers can downcast when they need the variant.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
