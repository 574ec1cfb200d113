use taffy::prelude::{Line, NodeId, TaffyTree, fr, repeat, span};
use taffy::style::Display;
use taffy::{Style, TaffyError};

use crate::resolve::{ResolvedSpans, resolve_column_sizes};
use crate::responsive::{Breakpoint, GridBreakpoints};
use crate::span::{ColumnWidths, Span};

/// A grid that distributes an ordered list of items across its columns,
/// assigning each item a span from the resolved column sizes.
///
/// See [`auto_grid`].
pub struct AutoGrid<T> {
    items: Vec<T>,
    columns: u16,
    column_count: Option<u16>,
    column_widths: Option<ColumnWidths>,
    breakpoints: GridBreakpoints,
    container_style: Style,
    item_style: Style,
}

/// One item of an [`AutoGrid`] together with the span assigned to it.
#[derive(Clone, Debug, PartialEq)]
pub struct GridCell<'a, T> {
    pub item: &'a T,
    pub span: Span,
}

/// Creates a grid over the given items with the default 12-column layout.
///
/// How the columns are sized is configured with the builder methods:
/// [`column_widths`](AutoGrid::column_widths) gives each column an explicit
/// span, [`column_count`](AutoGrid::column_count) divides the grid into equal
/// columns, and with neither every item gets a full-width row. When the
/// column sequence is shorter than the item list it repeats.
///
/// ## Example
/// ```rust
/// use autogrid::prelude::*;
///
/// let grid = auto_grid(["sidebar", "content", "aside"]).column_widths([3, 6, 3]);
/// let spans: Vec<_> = grid.cells().into_iter().map(|cell| cell.span).collect();
/// assert_eq!(spans, vec![Span::Uniform(3), Span::Uniform(6), Span::Uniform(3)]);
/// ```
pub fn auto_grid<T>(items: impl IntoIterator<Item = T>) -> AutoGrid<T> {
    AutoGrid {
        items: items.into_iter().collect(),
        columns: 12,
        column_count: None,
        column_widths: None,
        breakpoints: GridBreakpoints::default(),
        container_style: Style::default(),
        item_style: Style::default(),
    }
}

impl<T> AutoGrid<T> {
    /// Sets the total number of column tracks in the grid. Defaults to 12.
    ///
    /// Spans are expressed as a number of these tracks, so explicit column
    /// widths should sum to this value to fill each row exactly.
    pub fn columns(mut self, columns: u16) -> Self {
        self.columns = columns;
        self
    }

    /// Divides the grid into `count` equal columns.
    ///
    /// Each column spans `columns / count` tracks, truncated. Ignored when
    /// non-empty [`column_widths`](Self::column_widths) are set.
    pub fn column_count(mut self, count: u16) -> Self {
        self.column_count = Some(count);
        self
    }

    /// Sets explicit column widths, taking precedence over
    /// [`column_count`](Self::column_count).
    ///
    /// Accepts plain track counts (`[3, 6, 3]`) or [`ResponsiveSpan`]s for
    /// layouts that change per breakpoint. The widths are used as given; no
    /// attempt is made to make them sum to the track count.
    ///
    /// [`ResponsiveSpan`]: crate::span::ResponsiveSpan
    pub fn column_widths(mut self, widths: impl Into<ColumnWidths>) -> Self {
        self.column_widths = Some(widths.into());
        self
    }

    /// Replaces the breakpoint table used to resolve responsive spans.
    pub fn breakpoints(mut self, breakpoints: GridBreakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Extra style applied to the grid container node, forwarded to the
    /// layout engine as given. The grid display mode and column template are
    /// set on top of it.
    pub fn container_style(mut self, style: Style) -> Self {
        self.container_style = style;
        self
    }

    /// Extra style applied to every cell wrapper node, forwarded to the
    /// layout engine as given. The cell's column span is set on top of it.
    pub fn item_style(mut self, style: Style) -> Self {
        self.item_style = style;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The column spans this grid cycles through, resolved from its
    /// configuration.
    pub fn resolved_spans(&self) -> ResolvedSpans {
        resolve_column_sizes(self.columns, self.column_count, self.column_widths.as_ref())
    }

    /// Pairs every item with its assigned span, in item order.
    pub fn cells(&self) -> Vec<GridCell<'_, T>> {
        let resolved = self.resolved_spans();
        self.items
            .iter()
            .enumerate()
            .map(|(idx, item)| GridCell {
                item,
                span: resolved.get(idx),
            })
            .collect()
    }

    /// Builds the grid into `tree`: a container node wrapping one cell node
    /// per item, each cell holding the node `leaf` produces for that item.
    ///
    /// `viewport_width` selects the active breakpoint for responsive spans; a
    /// responsive cell with no span at that breakpoint is left to the grid
    /// engine's automatic placement. The tree nodes are freshly created on
    /// every call, so a resized viewport just means building again.
    ///
    /// ## Example
    /// ```rust
    /// use autogrid::prelude::*;
    /// use taffy::prelude::*;
    ///
    /// let grid = auto_grid(["a", "b", "c", "d"]).column_count(4);
    ///
    /// let mut tree: TaffyTree<()> = TaffyTree::new();
    /// let root = grid
    ///     .build(&mut tree, 1200.0, |tree, _item| tree.new_leaf(Style::default()))
    ///     .unwrap();
    /// tree.compute_layout(
    ///     root,
    ///     Size {
    ///         width: AvailableSpace::Definite(1200.0),
    ///         height: AvailableSpace::MaxContent,
    ///     },
    /// )
    /// .unwrap();
    /// ```
    pub fn build<F>(
        &self,
        tree: &mut TaffyTree,
        viewport_width: f32,
        mut leaf: F,
    ) -> Result<NodeId, TaffyError>
    where
        F: FnMut(&mut TaffyTree, &T) -> Result<NodeId, TaffyError>,
    {
        let resolved = self.resolved_spans();
        let breakpoint = self.breakpoints.breakpoint_for(viewport_width as f64);

        let mut cells = Vec::with_capacity(self.items.len());
        for (idx, item) in self.items.iter().enumerate() {
            let content = leaf(tree, item)?;
            let style = self.cell_style(&resolved, idx, breakpoint);
            cells.push(tree.new_with_children(style, &[content])?);
        }

        tree.new_with_children(self.grid_style(), &cells)
    }

    fn grid_style(&self) -> Style {
        let mut style = self.container_style.clone();
        style.display = Display::Grid;
        style.grid_template_columns = vec![repeat(self.columns, vec![fr(1.)])];
        style
    }

    fn cell_style(&self, resolved: &ResolvedSpans, idx: usize, breakpoint: Breakpoint) -> Style {
        let mut style = self.item_style.clone();
        style.grid_column = match resolved.get(idx).span_at(breakpoint) {
            Some(tracks) => span(tracks),
            None => Line::default(),
        };
        style
    }
}
