// File: crates/weightplot-core/src/lib.rs
// Summary: Core library entry point; exports public API for the weight-log store,
// smoothing, and trend rendering.

pub mod render;
pub mod smooth;
pub mod store;
pub mod surface;
pub mod theme;
pub mod types;

pub use render::{PointClass, TrendRenderer};
pub use smooth::{smoothed, Smoother, Smoothing};
pub use store::{Entry, StoreError, WeightLog};
pub use surface::DrawingSurface;
pub use theme::{Rgb, Theme};
pub use types::ChartLayout;
