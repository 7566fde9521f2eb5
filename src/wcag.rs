//! WCAG 2.x pass/fail classification of contrast ratios.

use std::fmt;

use crate::contrast::contrast;

/// Minimum ratio for AA normal text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for AA large text.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for AAA normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for AAA large text.
pub const AAA_LARGE: f64 = 4.5;

/// One WCAG success criterion for text contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Level AA, normal-size text.
    AaNormal,
    /// Level AA, large text.
    AaLarge,
    /// Level AAA, normal-size text.
    AaaNormal,
    /// Level AAA, large text.
    AaaLarge,
}

impl Criterion {
    /// All criteria, in report order.
    pub const ALL: [Self; 4] = [Self::AaNormal, Self::AaLarge, Self::AaaNormal, Self::AaaLarge];

    /// Inclusive minimum ratio for this criterion.
    #[must_use]
    pub const fn threshold(self) -> f64 {
        match self {
            Self::AaNormal => AA_NORMAL,
            Self::AaLarge => AA_LARGE,
            Self::AaaNormal => AAA_NORMAL,
            Self::AaaLarge => AAA_LARGE,
        }
    }

    /// Short label, e.g. `AA Normal`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AaNormal => "AA Normal",
            Self::AaLarge => "AA Large",
            Self::AaaNormal => "AAA Normal",
            Self::AaaLarge => "AAA Large",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Ratio meets the threshold.
    Pass,
    /// Ratio falls short.
    Fail,
}

impl From<bool> for Status {
    fn from(passed: bool) -> Self {
        if passed { Self::Pass } else { Self::Fail }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        })
    }
}

/// Four independent verdicts derived from a single ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct WcagVerdict {
    /// Ratio ≥ 4.5.
    pub aa_normal: bool,
    /// Ratio ≥ 3.0.
    pub aa_large: bool,
    /// Ratio ≥ 7.0.
    pub aaa_normal: bool,
    /// Ratio ≥ 4.5.
    pub aaa_large: bool,
}

impl WcagVerdict {
    /// Verdict for a single criterion.
    #[must_use]
    pub const fn passes(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::AaNormal => self.aa_normal,
            Criterion::AaLarge => self.aa_large,
            Criterion::AaaNormal => self.aaa_normal,
            Criterion::AaaLarge => self.aaa_large,
        }
    }

    /// Whether every criterion passes.
    #[must_use]
    pub const fn all_pass(&self) -> bool {
        self.aa_normal && self.aa_large && self.aaa_normal && self.aaa_large
    }

    /// `(criterion, status)` rows in report order.
    pub fn rows(&self) -> impl Iterator<Item = (Criterion, Status)> + '_ {
        Criterion::ALL
            .into_iter()
            .map(|c| (c, Status::from(self.passes(c))))
    }
}

/// Classify a contrast ratio against the four WCAG thresholds.
///
/// # Arguments
///
/// * `ratio` - A contrast ratio, normally in `[1, 21]`
///
/// # Returns
///
/// One pass/fail flag per criterion. Thresholds are inclusive, so exactly
/// 4.5 passes AA normal text.
#[must_use]
pub fn classify(ratio: f64) -> WcagVerdict {
    WcagVerdict {
        aa_normal: ratio >= AA_NORMAL,
        aa_large: ratio >= AA_LARGE,
        aaa_normal: ratio >= AAA_NORMAL,
        aaa_large: ratio >= AAA_LARGE,
    }
}

/// Contrast and verdict for a hex color pair, with the usual fallbacks.
#[must_use]
pub fn evaluate(background: &str, foreground: &str) -> (f64, WcagVerdict) {
    let ratio = contrast(background, foreground);
    (ratio, classify(ratio))
}

/// Render a ratio the way the preview shows it, e.g. `4.54:1`.
#[must_use]
pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio:.2}:1")
}
