/// Validated layout combining canvas, outline and selection parameters
pub mod layout;
/// Selection parameters and validation
pub mod params;
/// Constrained greedy point selection with fallback
pub mod selection;
