/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports:
/// the seed-backed catalog, formatters, presenters and the console.
pub mod outbound;
