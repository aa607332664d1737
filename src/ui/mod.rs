/// UI module
///
/// This module handles:
/// - Bottom-of-content detection from scroll viewports (sentinel.rs)
/// - Building the wrapped thumbnail grid and loading caption (grid.rs)

pub mod grid;
pub mod sentinel;
