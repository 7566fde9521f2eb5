//! Universal color lab: try a background/text pair against WCAG.

use serde::{Deserialize, Serialize};

use crate::contrast::text_color_for;
use crate::report::ColorSystem;
use crate::wcag::{WcagVerdict, evaluate};

/// Background the lab starts with.
pub const DEFAULT_BACKGROUND: &str = "#F5F5F5";

/// Text color the lab starts with.
pub const DEFAULT_TEXT: &str = "#333333";

/// The pair of colors under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabColors {
    /// Background color.
    #[serde(rename = "bgColor")]
    pub background: String,
    /// Text color.
    #[serde(rename = "textColor")]
    pub text: String,
}

impl Default for LabColors {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND.to_string(),
            text: DEFAULT_TEXT.to_string(),
        }
    }
}

/// Everything the lab preview shows for one pair.
#[derive(Debug, Clone, PartialEq)]
pub struct LabPreview {
    /// Contrast of text on background.
    pub ratio: f64,
    /// WCAG verdicts for `ratio`.
    pub verdict: WcagVerdict,
    /// Sample button fill.
    pub button_background: String,
    /// Label color on the sample button.
    pub button_text: &'static str,
}

impl LabColors {
    /// Create a pair.
    #[must_use]
    pub fn new(background: &str, text: &str) -> Self {
        Self {
            background: background.to_string(),
            text: text.to_string(),
        }
    }

    /// Exchange background and text.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.background, &mut self.text);
    }

    /// Back to [`DEFAULT_BACKGROUND`] and [`DEFAULT_TEXT`].
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Evaluate the pair.
    ///
    /// The sample button uses the generated primary color when one exists and
    /// is not blank, and the text color otherwise.
    #[must_use]
    pub fn preview(&self, system: Option<&ColorSystem>) -> LabPreview {
        let (ratio, verdict) = evaluate(&self.background, &self.text);
        let button_background = system
            .and_then(|cs| cs.primary.as_ref())
            .and_then(|p| p.main.clone())
            .filter(|main| !main.trim().is_empty())
            .unwrap_or_else(|| self.text.clone());
        let button_text = text_color_for(&button_background);

        LabPreview {
            ratio,
            verdict,
            button_background,
            button_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::{DARK_TEXT, LIGHT_TEXT};
    use crate::report::ColorRole;

    #[test]
    fn test_default_pair_passes_everything() {
        let preview = LabColors::default().preview(None);
        assert!((preview.ratio - 11.59).abs() < 0.05, "ratio {}", preview.ratio);
        assert!(preview.verdict.all_pass());
        assert_eq!(preview.button_background, DEFAULT_TEXT);
        assert_eq!(preview.button_text, LIGHT_TEXT);
    }

    #[test]
    fn test_swap_keeps_ratio() {
        let mut lab = LabColors::new("#ffffff", "#767676");
        let before = lab.preview(None).ratio;
        lab.swap();
        assert_eq!(lab, LabColors::new("#767676", "#ffffff"));
        assert_eq!(lab.preview(None).ratio.to_bits(), before.to_bits());
    }

    #[test]
    fn test_reset() {
        let mut lab = LabColors::new("#000", "#fff");
        lab.reset();
        assert_eq!(lab, LabColors::default());
    }

    #[test]
    fn test_button_uses_primary() {
        let system = ColorSystem {
            primary: Some(ColorRole::new("#ffcc00", "#ffe680", "#806600")),
            secondary: None,
        };
        let preview = LabColors::default().preview(Some(&system));
        assert_eq!(preview.button_background, "#ffcc00");
        assert_eq!(preview.button_text, DARK_TEXT);
    }

    #[test]
    fn test_blank_primary_uses_text_color() {
        for main in ["", "   "] {
            let system = ColorSystem {
                primary: Some(ColorRole {
                    main: Some(main.to_string()),
                    light: None,
                    dark: None,
                }),
                secondary: None,
            };
            let preview = LabColors::default().preview(Some(&system));
            assert_eq!(preview.button_background, DEFAULT_TEXT, "{main:?}");
            assert_eq!(preview.button_text, LIGHT_TEXT, "{main:?}");
        }
    }

    #[test]
    fn test_unset_color_falls_back() {
        let preview = LabColors::new("", "#333333").preview(None);
        assert!((preview.ratio - 1.0).abs() < f64::EPSILON);
        assert!(!preview.verdict.aa_large);
    }
}
