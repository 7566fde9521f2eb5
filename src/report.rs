//! Typed view of the generated design report, and what is derived from it.
//!
//! The report is produced elsewhere and is not validated here: every field is
//! optional and absent values degrade to empty strings or the fallbacks of the
//! color functions.

use std::fmt;
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::contrast::text_color_for;

/// Shown instead of exported code when no color system was generated.
pub const EXPORT_PLACEHOLDER: &str = "/* AI 가이드를 먼저 생성해주세요. */";

/// Shown in place of a missing reasoning paragraph.
pub const MISSING_REASONING: &str = "-";

/// Main, light and dark variants of one color role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorRole {
    /// Base color.
    pub main: Option<String>,
    /// Tint.
    pub light: Option<String>,
    /// Shade.
    pub dark: Option<String>,
}

impl ColorRole {
    /// Role with all three variants set.
    #[must_use]
    pub fn new(main: &str, light: &str, dark: &str) -> Self {
        Self {
            main: Some(main.to_string()),
            light: Some(light.to_string()),
            dark: Some(dark.to_string()),
        }
    }

    /// `(variant, hex)` pairs that are present, in main/light/dark order.
    pub fn variants(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("main", self.main.as_deref()),
            ("light", self.light.as_deref()),
            ("dark", self.dark.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, hex)| hex.map(|h| (name, h)))
    }

    fn main_or_empty(&self) -> &str {
        self.main.as_deref().unwrap_or_default()
    }

    fn light_or_empty(&self) -> &str {
        self.light.as_deref().unwrap_or_default()
    }

    fn dark_or_empty(&self) -> &str {
        self.dark.as_deref().unwrap_or_default()
    }
}

/// Named color roles of a generated palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSystem {
    /// Primary role.
    pub primary: Option<ColorRole>,
    /// Secondary role.
    pub secondary: Option<ColorRole>,
}

/// Free-text explanations attached to each report section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reasoning {
    /// Why these colors.
    pub color: Option<String>,
    /// Why this typography.
    pub typography: Option<String>,
    /// Why these accessibility rules.
    pub accessibility: Option<String>,
}

/// The generation payload as far as this crate consumes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
    /// Generated palette.
    #[serde(rename = "colorSystem")]
    pub color_system: Option<ColorSystem>,
    /// Typography specification, label to value.
    pub typography: Map<String, Value>,
    /// Universal design guide, label to value.
    pub accessibility: Map<String, Value>,
    /// Per-section explanations.
    pub reasoning: Reasoning,
}

/// One palette entry for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// `Primary` or `Secondary`.
    pub role: &'static str,
    /// `main`, `light` or `dark`.
    pub variant: &'static str,
    /// Color as given by the report.
    pub hex: String,
}

/// Background and label color of a button-like element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    /// Background color.
    pub background: String,
    /// Readable text color on that background.
    pub text: &'static str,
}

impl Fill {
    fn on(background: &str) -> Self {
        Self {
            background: background.to_string(),
            text: text_color_for(background),
        }
    }
}

/// Colors of the component preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showcase {
    /// Primary button.
    pub primary_button: Fill,
    /// Secondary button.
    pub secondary_button: Fill,
    /// Info alert background (primary light).
    pub alert_background: String,
    /// Info alert accent border (primary main).
    pub alert_border: String,
    /// Info alert title (primary dark).
    pub alert_title: String,
    /// Card heading (primary main).
    pub card_title: String,
}

/// Target syntax for design-token export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// CSS custom properties on `:root`.
    #[default]
    Css,
    /// SCSS variables.
    Scss,
    /// A `tailwind.config.js` color extension.
    Tailwind,
}

/// Unknown export format name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown export format '{0}' (expected css, scss or tailwind)")]
pub struct ParseFormatError(String);

impl FromStr for ExportFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "scss" => Ok(Self::Scss),
            "tailwind" => Ok(Self::Tailwind),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "tailwind",
        })
    }
}

impl ColorSystem {
    fn roles(&self) -> (ColorRole, ColorRole) {
        (
            self.primary.clone().unwrap_or_default(),
            self.secondary.clone().unwrap_or_default(),
        )
    }

    /// Render the palette as design tokens.
    #[must_use]
    pub fn export(&self, format: ExportFormat) -> String {
        let (p, s) = self.roles();
        match format {
            ExportFormat::Css => format!(
                ":root {{\n  --color-primary: {};\n  --color-primary-light: {};\n  --color-primary-dark: {};\n\n  --color-secondary: {};\n  --color-secondary-light: {};\n  --color-secondary-dark: {};\n}}\n",
                p.main_or_empty(),
                p.light_or_empty(),
                p.dark_or_empty(),
                s.main_or_empty(),
                s.light_or_empty(),
                s.dark_or_empty(),
            ),
            ExportFormat::Scss => format!(
                "$color-primary: {};\n$color-primary-light: {};\n$color-primary-dark: {};\n\n$color-secondary: {};\n$color-secondary-light: {};\n$color-secondary-dark: {};\n",
                p.main_or_empty(),
                p.light_or_empty(),
                p.dark_or_empty(),
                s.main_or_empty(),
                s.light_or_empty(),
                s.dark_or_empty(),
            ),
            ExportFormat::Tailwind => format!(
                "// tailwind.config.js\nmodule.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{\n        primary: {{\n          light: '{}',\n          DEFAULT: '{}',\n          dark: '{}',\n        }},\n        secondary: {{\n          light: '{}',\n          DEFAULT: '{}',\n          dark: '{}',\n        }},\n      }},\n    }},\n  }},\n  plugins: [],\n}}\n",
                p.light_or_empty(),
                p.main_or_empty(),
                p.dark_or_empty(),
                s.light_or_empty(),
                s.main_or_empty(),
                s.dark_or_empty(),
            ),
        }
    }

    /// Colors for the button, alert and card previews.
    #[must_use]
    pub fn showcase(&self) -> Showcase {
        let (p, s) = self.roles();
        Showcase {
            primary_button: Fill::on(p.main_or_empty()),
            secondary_button: Fill::on(s.main_or_empty()),
            alert_background: p.light_or_empty().to_string(),
            alert_border: p.main_or_empty().to_string(),
            alert_title: p.dark_or_empty().to_string(),
            card_title: p.main_or_empty().to_string(),
        }
    }

    /// Present palette entries, primary before secondary.
    #[must_use]
    pub fn swatches(&self) -> Vec<Swatch> {
        [("Primary", &self.primary), ("Secondary", &self.secondary)]
            .into_iter()
            .filter_map(|(role, r)| r.as_ref().map(|r| (role, r)))
            .flat_map(|(role, r)| {
                r.variants().map(move |(variant, hex)| Swatch {
                    role,
                    variant,
                    hex: hex.to_string(),
                })
            })
            .collect()
    }
}

impl Report {
    /// Parse a report from the generation service's JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or a present field has
    /// the wrong shape.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse report JSON")
    }

    /// Exported tokens, or [`EXPORT_PLACEHOLDER`] without a color system.
    #[must_use]
    pub fn export(&self, format: ExportFormat) -> String {
        self.color_system
            .as_ref()
            .map_or_else(|| EXPORT_PLACEHOLDER.to_string(), |cs| cs.export(format))
    }

    /// Palette entries; empty without a color system.
    #[must_use]
    pub fn swatches(&self) -> Vec<Swatch> {
        self.color_system
            .as_ref()
            .map(ColorSystem::swatches)
            .unwrap_or_default()
    }

    /// Typography rows as `(label, value)`.
    #[must_use]
    pub fn typography_rows(&self) -> Vec<(String, String)> {
        spec_rows(&self.typography)
    }

    /// Universal design guide rows as `(label, value)`.
    #[must_use]
    pub fn accessibility_rows(&self) -> Vec<(String, String)> {
        spec_rows(&self.accessibility)
    }

    /// Color reasoning, or [`MISSING_REASONING`].
    #[must_use]
    pub fn color_reasoning(&self) -> &str {
        self.reasoning.color.as_deref().unwrap_or(MISSING_REASONING)
    }

    /// Typography reasoning, or [`MISSING_REASONING`].
    #[must_use]
    pub fn typography_reasoning(&self) -> &str {
        self.reasoning.typography.as_deref().unwrap_or(MISSING_REASONING)
    }

    /// Accessibility reasoning, or [`MISSING_REASONING`].
    #[must_use]
    pub fn accessibility_reasoning(&self) -> &str {
        self.reasoning
            .accessibility
            .as_deref()
            .unwrap_or(MISSING_REASONING)
    }
}

fn spec_rows(map: &Map<String, Value>) -> Vec<(String, String)> {
    map.iter()
        .map(|(k, v)| {
            let value = match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (k.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::{DARK_TEXT, LIGHT_TEXT};
    use pretty_assertions::assert_eq;

    fn sample_system() -> ColorSystem {
        ColorSystem {
            primary: Some(ColorRole::new("#3366cc", "#99bbee", "#1a3366")),
            secondary: Some(ColorRole::new("#ffcc00", "#ffe680", "#806600")),
        }
    }

    #[test]
    fn test_export_css() {
        let css = sample_system().export(ExportFormat::Css);
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --color-primary: #3366cc;\n"));
        assert!(css.contains("  --color-primary-light: #99bbee;\n"));
        assert!(css.contains("  --color-secondary-dark: #806600;\n"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn test_export_scss() {
        let scss = sample_system().export(ExportFormat::Scss);
        assert_eq!(
            scss.lines().collect::<Vec<_>>(),
            vec![
                "$color-primary: #3366cc;",
                "$color-primary-light: #99bbee;",
                "$color-primary-dark: #1a3366;",
                "",
                "$color-secondary: #ffcc00;",
                "$color-secondary-light: #ffe680;",
                "$color-secondary-dark: #806600;",
            ]
        );
    }

    #[test]
    fn test_export_tailwind() {
        let tw = sample_system().export(ExportFormat::Tailwind);
        assert!(tw.starts_with("// tailwind.config.js\n"));
        assert!(tw.contains("          DEFAULT: '#3366cc',\n"));
        assert!(tw.contains("          light: '#ffe680',\n"));
        assert!(tw.contains("  plugins: [],\n"));
    }

    #[test]
    fn test_export_missing_fields_render_empty() {
        let cs = ColorSystem {
            primary: Some(ColorRole {
                main: Some("#123456".into()),
                ..ColorRole::default()
            }),
            secondary: None,
        };
        let css = cs.export(ExportFormat::Css);
        assert!(css.contains("--color-primary: #123456;"));
        assert!(css.contains("--color-primary-light: ;"));
        assert!(css.contains("--color-secondary: ;"));
    }

    #[test]
    fn test_report_export_placeholder() {
        assert_eq!(Report::default().export(ExportFormat::Scss), EXPORT_PLACEHOLDER);
    }

    #[test]
    fn test_export_format_parse() {
        assert_eq!("css".parse::<ExportFormat>(), Ok(ExportFormat::Css));
        assert_eq!(" SCSS ".parse::<ExportFormat>(), Ok(ExportFormat::Scss));
        assert_eq!("Tailwind".parse::<ExportFormat>(), Ok(ExportFormat::Tailwind));
        assert_eq!(
            "less".parse::<ExportFormat>(),
            Err(ParseFormatError("less".into()))
        );
        assert_eq!(ExportFormat::Tailwind.to_string(), "tailwind");
    }

    #[test]
    fn test_showcase_text_colors() {
        let show = sample_system().showcase();
        assert_eq!(show.primary_button.background, "#3366cc");
        assert_eq!(show.primary_button.text, LIGHT_TEXT);
        assert_eq!(show.secondary_button.text, DARK_TEXT);
        assert_eq!(show.alert_background, "#99bbee");
        assert_eq!(show.alert_border, "#3366cc");
        assert_eq!(show.alert_title, "#1a3366");
    }

    #[test]
    fn test_showcase_missing_roles() {
        let show = ColorSystem::default().showcase();
        assert_eq!(show.primary_button.background, "");
        assert_eq!(show.primary_button.text, LIGHT_TEXT);
        assert_eq!(show.card_title, "");
    }

    #[test]
    fn test_swatches_order() {
        let mut cs = sample_system();
        if let Some(secondary) = cs.secondary.as_mut() {
            secondary.light = None;
        }
        let labels: Vec<_> = cs
            .swatches()
            .into_iter()
            .map(|s| format!("{} {} {}", s.role, s.variant, s.hex))
            .collect();
        assert_eq!(
            labels,
            vec![
                "Primary main #3366cc",
                "Primary light #99bbee",
                "Primary dark #1a3366",
                "Secondary main #ffcc00",
                "Secondary dark #806600",
            ]
        );
    }

    #[test]
    fn test_report_from_json() -> anyhow::Result<()> {
        let report = Report::from_json_str(
            r##"{
                "colorSystem": {
                    "primary": { "main": "#3366cc", "light": "#99bbee", "dark": "#1a3366" }
                },
                "typography": { "bodySize": "16px", "lineHeight": 1.5 },
                "reasoning": { "color": "calm and trustworthy" }
            }"##,
        )?;
        assert_eq!(report.swatches().len(), 3);
        assert_eq!(
            report.typography_rows(),
            vec![
                ("bodySize".to_string(), "16px".to_string()),
                ("lineHeight".to_string(), "1.5".to_string()),
            ]
        );
        assert!(report.accessibility_rows().is_empty());
        assert_eq!(report.color_reasoning(), "calm and trustworthy");
        assert_eq!(report.typography_reasoning(), MISSING_REASONING);
        assert_eq!(report.accessibility_reasoning(), MISSING_REASONING);
        Ok(())
    }

    #[test]
    fn test_report_tolerates_empty_object() -> anyhow::Result<()> {
        let report = Report::from_json_str("{}")?;
        assert_eq!(report, Report::default());
        assert!(report.swatches().is_empty());
        Ok(())
    }
}
