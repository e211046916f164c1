/// Catalog domain - pure business logic with no infrastructure dependencies
///
/// `domain` holds the value objects shown on every screen, `services`
/// holds the stateless rules (filtering, derived views, request ids) and
/// `seed` holds the fixed data set the catalog starts from.
pub mod domain;
pub mod seed;
pub mod services;
