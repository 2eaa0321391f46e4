//! Terminal report rendering for forecast tally.
//!
//! Renders fixed-width tables whose cells may carry SGR style markers and
//! OSC8 hyperlinks. Column alignment is computed on visible width, so the
//! invisible control bytes never shift a column.
//!
//! # Layers
//!
//! - [`style`]: the closed set of SGR markers the report emits
//! - [`text`]: [`StyledText`], hyperlink/style decoration and padding
//! - [`width`]: the visible-width scanner for raw strings
//! - [`row`]: one table row from a record or aggregate
//! - [`render`]: section and overall blocks
//!
//! # Example
//!
//! ```
//! use ft_report::{pad, stylize, visible_width, Style};
//!
//! let cell = stylize("52.3", Style::Bold);
//! assert_eq!(visible_width(&cell), 4);
//! assert_eq!(visible_width(&pad(&cell, 10)), 10);
//! ```

pub mod config;
pub mod render;
pub mod row;
pub mod style;
pub mod text;
pub mod width;

pub use config::{Palette, TableConfig};
pub use render::{AggregateRow, ReportRenderer};
pub use row::RowFormatter;
pub use style::Style;
pub use text::{linkify, pad, stylize, StyledText};
pub use width::{strip_markers, visible_width, Token, Tokens};
