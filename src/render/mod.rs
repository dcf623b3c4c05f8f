//! PDF rebuilding modules

pub mod compress;
pub mod document;
pub mod layer;
pub mod layout;
pub mod text_metrics;

pub use compress::compress_pdf;
pub use document::{DocumentRebuilder, RebuildOptions};
pub use layer::LayerBuilder;
pub use text_metrics::{get_helvetica_measurer, BuiltinFontMeasurer};
