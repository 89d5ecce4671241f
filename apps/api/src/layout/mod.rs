// Single-page letter layout: greedy text wrapping, zone splitting, and the
// vertical-cursor composition pass that turns zones into draw operations.
// Pure code — no I/O; the renderer consumes the op list this produces.

pub mod page;
pub mod sections;
pub mod wrap;

// Re-export the public API consumed by other modules (letter pipeline, render).
pub use page::{compose, ComposedPage, DrawOp};
pub use sections::{split_zones, LetterZones};
pub use wrap::{wrap_paragraph, WrappedLines};
