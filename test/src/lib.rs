//! Testing utilities for AutoGrid layouts.
//!
//! This crate provides a small harness that builds a grid into a Taffy tree,
//! computes its layout at a fixed viewport size, and exposes the resulting
//! cell rectangles for assertions.
//!
//! # Example
//!
//! ```rust
//! use autogrid::prelude::*;
//! use autogrid_test::prelude::*;
//!
//! let grid = auto_grid([(); 4]).column_count(4);
//! let harness = LayoutHarness::new(&grid, 1200.0, 400.0);
//!
//! assert_eq!(harness.cell_count(), 4);
//! assert!((harness.cell_width(0) - 300.0).abs() < 0.1);
//! ```

use autogrid::AutoGrid;
use autogrid::taffy::prelude::{AvailableSpace, NodeId, Size, TaffyTree, auto, length};
use autogrid::taffy::style::FlexDirection;
use autogrid::taffy::{Layout, Style};

/// Prelude module for convenient imports in tests.
pub mod prelude {
    pub use super::{CELL_HEIGHT, LayoutHarness};
    pub use autogrid::prelude::*;
}

/// Height given to every leaf node the harness creates, so that rows have a
/// nonzero extent and wrapping shows up in cell positions.
pub const CELL_HEIGHT: f32 = 20.0;

/// Builds an [`AutoGrid`] into a Taffy tree and computes its layout once.
///
/// The grid container is stretched inside a viewport-sized root node, the way
/// a hosting window would size it. Every item becomes a leaf of
/// [`CELL_HEIGHT`]; the computed rectangle of each cell wrapper is then
/// available by item index.
pub struct LayoutHarness {
    tree: TaffyTree,
    container: NodeId,
    cells: Vec<NodeId>,
}

impl LayoutHarness {
    /// Builds `grid` at the given viewport size and computes the layout.
    ///
    /// The viewport width both constrains the layout and selects the active
    /// breakpoint for responsive spans.
    pub fn new<T>(grid: &AutoGrid<T>, width: f32, height: f32) -> Self {
        let mut tree: TaffyTree<()> = TaffyTree::new();

        let container = grid
            .build(&mut tree, width, |tree, _item| {
                tree.new_leaf(Style {
                    size: Size {
                        width: auto(),
                        height: length(CELL_HEIGHT),
                    },
                    ..Default::default()
                })
            })
            .expect("grid should build");

        // A column flex root stretches the container to the viewport width.
        let root = tree
            .new_with_children(
                Style {
                    flex_direction: FlexDirection::Column,
                    size: Size {
                        width: length(width),
                        height: length(height),
                    },
                    ..Default::default()
                },
                &[container],
            )
            .expect("root should build");

        tree.compute_layout(
            root,
            Size {
                width: AvailableSpace::Definite(width),
                height: AvailableSpace::Definite(height),
            },
        )
        .expect("layout should compute");

        let cells = tree
            .children(container)
            .expect("container should have children");

        Self {
            tree,
            container,
            cells,
        }
    }

    /// Number of cells in the grid container.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The computed layout of the grid container node.
    pub fn container(&self) -> &Layout {
        self.tree
            .layout(self.container)
            .expect("container has a layout")
    }

    /// The computed layout of the cell wrapper at `idx`, in item order.
    ///
    /// Locations are relative to the grid container.
    pub fn cell(&self, idx: usize) -> &Layout {
        self.tree
            .layout(self.cells[idx])
            .expect("cell has a layout")
    }

    pub fn cell_width(&self, idx: usize) -> f32 {
        self.cell(idx).size.width
    }

    pub fn cell_x(&self, idx: usize) -> f32 {
        self.cell(idx).location.x
    }

    pub fn cell_y(&self, idx: usize) -> f32 {
        self.cell(idx).location.y
    }

    /// The row the cell at `idx` landed in, derived from its y offset.
    pub fn cell_row(&self, idx: usize) -> usize {
        (self.cell_y(idx) / CELL_HEIGHT).round() as usize
    }
}
