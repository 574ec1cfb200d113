use crate::responsive::Breakpoint;

/// A per-breakpoint set of column spans.
///
/// Entries cascade upward: a span set at some breakpoint applies at that
/// breakpoint and every wider one, until a wider entry overrides it. A cell
/// whose map has no entry at or below the active breakpoint is left to the
/// grid engine's automatic placement.
///
/// ## Example
/// ```rust
/// use autogrid::responsive::Breakpoint;
/// use autogrid::span::ResponsiveSpan;
///
/// // Full width on phones, half width from medium screens up.
/// let span = ResponsiveSpan::new().xs(12).md(6);
/// assert_eq!(span.span_at(Breakpoint::Sm), Some(12));
/// assert_eq!(span.span_at(Breakpoint::Xl), Some(6));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResponsiveSpan {
    spans: [Option<u16>; 6],
}

impl ResponsiveSpan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the span that applies from the given breakpoint upward.
    pub fn at(mut self, breakpoint: Breakpoint, span: u16) -> Self {
        self.spans[breakpoint.index()] = Some(span);
        self
    }

    pub fn xs(self, span: u16) -> Self {
        self.at(Breakpoint::Xs, span)
    }

    pub fn sm(self, span: u16) -> Self {
        self.at(Breakpoint::Sm, span)
    }

    pub fn md(self, span: u16) -> Self {
        self.at(Breakpoint::Md, span)
    }

    pub fn lg(self, span: u16) -> Self {
        self.at(Breakpoint::Lg, span)
    }

    pub fn xl(self, span: u16) -> Self {
        self.at(Breakpoint::Xl, span)
    }

    pub fn xxl(self, span: u16) -> Self {
        self.at(Breakpoint::Xxl, span)
    }

    /// The entry set exactly at `breakpoint`, ignoring the cascade.
    pub fn get(&self, breakpoint: Breakpoint) -> Option<u16> {
        self.spans[breakpoint.index()]
    }

    /// The span in effect at `breakpoint`: the nearest entry at or below it.
    pub fn span_at(&self, breakpoint: Breakpoint) -> Option<u16> {
        self.spans[..=breakpoint.index()]
            .iter()
            .rev()
            .find_map(|span| *span)
    }
}

/// The span applied to a single grid cell: either a plain track count or a
/// per-breakpoint map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Span {
    Uniform(u16),
    Responsive(ResponsiveSpan),
}

impl Span {
    /// The concrete track count at `breakpoint`, or `None` for automatic
    /// placement.
    pub fn span_at(&self, breakpoint: Breakpoint) -> Option<u16> {
        match self {
            Span::Uniform(span) => Some(*span),
            Span::Responsive(span) => span.span_at(breakpoint),
        }
    }
}

impl From<u16> for Span {
    fn from(span: u16) -> Self {
        Span::Uniform(span)
    }
}

impl From<ResponsiveSpan> for Span {
    fn from(span: ResponsiveSpan) -> Self {
        Span::Responsive(span)
    }
}

/// Explicit column widths for a grid, as either uniform track counts or
/// per-breakpoint maps.
///
/// The two shapes are distinct variants rather than a mixed list, so the
/// choice between them is made once when the value is constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnWidths {
    /// Spans that apply identically at every breakpoint.
    Uniform(Vec<u16>),
    /// Per-breakpoint spans, forwarded verbatim to the grid engine.
    Responsive(Vec<ResponsiveSpan>),
}

impl ColumnWidths {
    pub fn len(&self) -> usize {
        match self {
            ColumnWidths::Uniform(widths) => widths.len(),
            ColumnWidths::Responsive(widths) => widths.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<u16>> for ColumnWidths {
    fn from(widths: Vec<u16>) -> Self {
        ColumnWidths::Uniform(widths)
    }
}

impl From<&[u16]> for ColumnWidths {
    fn from(widths: &[u16]) -> Self {
        ColumnWidths::Uniform(widths.to_vec())
    }
}

impl<const N: usize> From<[u16; N]> for ColumnWidths {
    fn from(widths: [u16; N]) -> Self {
        ColumnWidths::Uniform(widths.to_vec())
    }
}

impl From<Vec<ResponsiveSpan>> for ColumnWidths {
    fn from(widths: Vec<ResponsiveSpan>) -> Self {
        ColumnWidths::Responsive(widths)
    }
}

impl<const N: usize> From<[ResponsiveSpan; N]> for ColumnWidths {
    fn from(widths: [ResponsiveSpan; N]) -> Self {
        ColumnWidths::Responsive(widths.to_vec())
    }
}
