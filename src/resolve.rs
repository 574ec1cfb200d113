use smallvec::{SmallVec, smallvec};

use crate::span::{ColumnWidths, ResponsiveSpan, Span};

/// The resolved, non-empty sequence of column spans for a grid.
///
/// The sequence is applied to the grid's items cyclically: item `i` receives
/// entry `i % len()`.
///
/// [`resolve_column_sizes`] always produces a sequence of at least one span;
/// the variants are public, so a hand-built value can hold an empty sequence,
/// but such a value is outside this contract and [`get`](Self::get) panics on
/// it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolvedSpans {
    Uniform(SmallVec<[u16; 12]>),
    Responsive(Vec<ResponsiveSpan>),
}

impl ResolvedSpans {
    /// Number of distinct spans before the sequence repeats.
    pub fn len(&self) -> usize {
        match self {
            ResolvedSpans::Uniform(spans) => spans.len(),
            ResolvedSpans::Responsive(spans) => spans.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The span assigned to the item at `index`, cycling through the
    /// sequence.
    ///
    /// Panics if the sequence is empty; sequences returned by
    /// [`resolve_column_sizes`] never are.
    pub fn get(&self, index: usize) -> Span {
        match self {
            ResolvedSpans::Uniform(spans) => Span::Uniform(spans[index % spans.len()]),
            ResolvedSpans::Responsive(spans) => Span::Responsive(spans[index % spans.len()]),
        }
    }
}

/// Computes the sequence of column spans for a grid from its configuration.
///
/// Checked in priority order:
/// 1. A non-empty `column_widths` is used verbatim. The widths are not
///    validated against `total_columns`; a mismatched sum produces a grid
///    that under- or over-fills its rows.
/// 2. Otherwise a nonzero `column_count` of `n` produces `n` equal spans of
///    `total_columns / n`. The division truncates, so a count that does not
///    divide `total_columns` evenly leaves part of each row unallocated.
/// 3. Otherwise a single full-width column.
///
/// ## Example
/// ```rust
/// use autogrid::resolve::{ResolvedSpans, resolve_column_sizes};
/// use smallvec::smallvec;
///
/// let spans = resolve_column_sizes(12, Some(4), None);
/// assert_eq!(spans, ResolvedSpans::Uniform(smallvec![3, 3, 3, 3]));
/// ```
pub fn resolve_column_sizes(
    total_columns: u16,
    column_count: Option<u16>,
    column_widths: Option<&ColumnWidths>,
) -> ResolvedSpans {
    if let Some(widths) = column_widths {
        if !widths.is_empty() {
            return match widths {
                ColumnWidths::Uniform(widths) => {
                    ResolvedSpans::Uniform(SmallVec::from_slice(widths))
                }
                ColumnWidths::Responsive(widths) => ResolvedSpans::Responsive(widths.clone()),
            };
        }
    }

    match column_count {
        Some(count) if count > 0 => {
            ResolvedSpans::Uniform(smallvec![total_columns / count; count as usize])
        }
        _ => ResolvedSpans::Uniform(smallvec![total_columns]),
    }
}
