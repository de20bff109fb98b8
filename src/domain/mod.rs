// Output value types: what the chart shell receives
pub mod document;
pub mod error;
pub mod option;
pub mod series;
pub mod unit;

// Re-export commonly used types
pub use document::OptionsDocument;
pub use error::{OptionsError, Result};
pub use option::{ChartOption, OptionsGroup, OptionsNode, PanelOption, UrlOption};
pub use series::{
    LineStyle, SeriesBlueprint, SeriesKind, SeriesOptions, baseline, candlestick, dots, dotted,
    histogram, line, price,
};
pub use unit::Unit;
