//! Presentation adapters for sweep results.
//!
//! Nothing in [`crate::models`] or [`crate::sweep`] depends on this module; these
//! functions only consume finished tables and matrices.

pub mod export;
pub mod heatmap;
pub mod text;

pub use export::{write_matrix_csv, write_table_csv};
pub use heatmap::{plot_heatmap_svg, pnl_color};
pub use text::{format_inputs, format_matrix, format_vol_table};
