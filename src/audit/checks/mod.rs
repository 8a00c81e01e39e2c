//! Built-in checks for the camera invariants

pub mod clamp;
pub mod containment;
pub mod min_zoom;
pub mod round_trip;
pub mod zoom_bounds;

pub use clamp::ClampIdempotenceCheck;
pub use containment::ContainmentCheck;
pub use min_zoom::MinZoomCheck;
pub use round_trip::RoundTripCheck;
pub use zoom_bounds::ZoomBoundsCheck;
