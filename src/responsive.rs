use std::ops::{Range, RangeFrom, RangeTo};

/// A named viewport-width threshold at which a different column span may apply.
///
/// Breakpoints are ordered from narrowest to widest, so `Xs < Sm < ... < Xxl`.
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    /// All breakpoints, narrowest first.
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Width breakpoints in pixels
pub struct GridBreakpoints {
    xs: RangeTo<f64>,
    sm: Range<f64>,
    md: Range<f64>,
    lg: Range<f64>,
    xl: Range<f64>,
    xxl: RangeFrom<f64>,
}

impl Default for GridBreakpoints {
    fn default() -> Self {
        Self {
            xs: ..576.0,
            sm: 576.0..768.0,
            md: 768.0..992.0,
            lg: 992.0..1200.0,
            xl: 1200.0..1400.0,
            xxl: 1400.0..,
        }
    }
}

impl GridBreakpoints {
    /// Creates a breakpoint table from the widths at which the `sm`, `md`,
    /// `lg`, `xl`, and `xxl` ranges begin; everything below `sm` is `xs`.
    ///
    /// Thresholds must be ascending so the ranges stay contiguous.
    pub fn new(sm: f64, md: f64, lg: f64, xl: f64, xxl: f64) -> Self {
        Self {
            xs: ..sm,
            sm: sm..md,
            md: md..lg,
            lg: lg..xl,
            xl: xl..xxl,
            xxl: xxl..,
        }
    }

    /// Returns the breakpoint that is active at the given viewport width.
    pub fn breakpoint_for(&self, width: f64) -> Breakpoint {
        if self.xs.contains(&width) {
            return Breakpoint::Xs;
        }
        if self.sm.contains(&width) {
            return Breakpoint::Sm;
        }
        if self.md.contains(&width) {
            return Breakpoint::Md;
        }
        if self.lg.contains(&width) {
            return Breakpoint::Lg;
        }
        if self.xl.contains(&width) {
            return Breakpoint::Xl;
        }
        if self.xxl.contains(&width) {
            return Breakpoint::Xxl;
        }

        // This can only happen if breakpoint ranges are incorrect and have a gap
        panic!("Width {} did not match any breakpoint", width);
    }
}
