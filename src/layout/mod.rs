//! Layout engine: measure (bottom-up) then arrange (top-down), plus spatial
//! hit testing.

pub mod arrange;
pub mod grid;
pub mod measure;
pub mod props;
pub mod spatial;

pub use arrange::arrange;
pub use measure::measure;
pub use props::LayoutProps;
pub use spatial::hit_test;
