//! # AutoGrid
//! AutoGrid is a small presentational layout helper that distributes an
//! ordered list of items across a configurable grid, built on top of
//! [Taffy](https://docs.rs/taffy)'s CSS grid implementation.
//!
//! Each item is assigned a column span, computed either from an explicit
//! width list or from an equal-division column count, and the resulting
//! sequence repeats over the items.
//!
//! ## Example: Sidebar layout
//! ```rust
//! use autogrid::prelude::*;
//!
//! let grid = auto_grid(["nav", "content", "aside", "footer"]).column_widths([3, 6, 3]);
//!
//! let spans: Vec<_> = grid.cells().into_iter().map(|cell| cell.span).collect();
//! // The width sequence repeats, so the fourth item wraps to a new row.
//! assert_eq!(
//!     spans,
//!     vec![
//!         Span::Uniform(3),
//!         Span::Uniform(6),
//!         Span::Uniform(3),
//!         Span::Uniform(3),
//!     ],
//! );
//! ```
//!
//! ## Column sizing
//! A grid resolves its column spans from three inputs, checked in order:
//!
//! - [`column_widths`](AutoGrid::column_widths): explicit spans, used as
//!   given. The widths are expected to sum to the grid's track count but are
//!   not validated against it; a mismatched sum simply under- or over-fills
//!   each row.
//! - [`column_count`](AutoGrid::column_count): equal columns of
//!   `columns / count` tracks each. The division truncates, so a non-exact
//!   count leaves a sliver of each row unused.
//! - Neither: a single full-width column, one item per row.
//!
//! The resolution itself is a pure function, exposed as
//! [`resolve_column_sizes`](resolve::resolve_column_sizes) for callers that
//! only need the span sequence.
//!
//! ## Responsive spans
//! Column widths can also be [`ResponsiveSpan`]s, per-breakpoint maps in the
//! spirit of CSS framework grids: `ResponsiveSpan::new().xs(12).md(6)` is a
//! full-width column on narrow viewports and a half-width column from medium
//! viewports up. Entries cascade upward until overridden; the
//! [`responsive`] module defines the breakpoint scale and its pixel
//! thresholds.
//!
//! ## Building a layout
//! [`AutoGrid::build`] materializes the grid into a
//! [`taffy::TaffyTree`]: one grid container node plus one cell wrapper per
//! item around a caller-supplied leaf node. Extra container or cell styling
//! (gaps, padding, alignment) is forwarded verbatim through
//! [`container_style`](AutoGrid::container_style) and
//! [`item_style`](AutoGrid::item_style). Nothing is cached between calls;
//! rebuilding with the same inputs yields the same layout.

pub mod grid;
pub mod resolve;
pub mod responsive;
pub mod span;

pub use grid::{AutoGrid, GridCell, auto_grid};
pub use resolve::{ResolvedSpans, resolve_column_sizes};
pub use responsive::{Breakpoint, GridBreakpoints};
pub use span::{ColumnWidths, ResponsiveSpan, Span};
pub use taffy;

pub mod prelude {
    pub use crate::grid::{AutoGrid, GridCell, auto_grid};
    pub use crate::resolve::{ResolvedSpans, resolve_column_sizes};
    pub use crate::responsive::{Breakpoint, GridBreakpoints};
    pub use crate::span::{ColumnWidths, ResponsiveSpan, Span};
}
