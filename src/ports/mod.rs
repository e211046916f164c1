/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only drives outward: it reads the catalog and
/// writes screens and progress, so only outbound (driven) ports exist.
pub mod outbound;
