//! Command-line front end for the palette-guide engine.
//!
//! # Usage
//!
//! ```bash
//! palette-guide contrast '#333333' '#F5F5F5'
//! palette-guide complement '#336699'
//! palette-guide shift '#336699' -- -32
//! palette-guide text-color '#ffcc00'
//! palette-guide keywords --soft 70 --static 30 --kb knowledge_base.json
//! palette-guide export report.json --format tailwind
//! palette-guide lab --bg '#ffffff' --text '#767676' --report report.json
//! ```
//!
//! Exit codes:
//! - 0: Success
//! - 2: Input could not be interpreted (bad color, unreadable file, ...)
//!
//! # Environment Variables
//!
//! - `PALETTE_GUIDE_KB`: default knowledge base path
//! - `PALETTE_GUIDE_LOG`: log level (`warn` by default)
//! - `DEBUG`: when set, forces debug logging
//! - `RUST_LOG`: full `tracing` filter, overrides the two above

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use palette_guide::color::{Rgb, decode_hex, encode_hex};
use palette_guide::contrast::{contrast_ratio, text_color_for, yiq_luma};
use palette_guide::lab::{DEFAULT_BACKGROUND, DEFAULT_TEXT, LabColors};
use palette_guide::logs;
use palette_guide::mood::{KnowledgeBase, MoodVector, keywords_for_mood};
use palette_guide::report::{ExportFormat, Report};
use palette_guide::request::GuideRequest;
use palette_guide::transform::{complementary, shift_brightness};
use palette_guide::wcag::{WcagVerdict, classify, format_ratio};

/// Color, contrast and keyword tools for design guides
#[derive(Parser, Debug)]
#[command(name = "palette-guide")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "PALETTE_GUIDE_LOG", default_value = logs::DEFAULT_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// WCAG contrast ratio and verdicts for two colors
    Contrast {
        /// First color (hex or rgb())
        a: Rgb,
        /// Second color
        b: Rgb,
    },
    /// Complementary color (hue rotated 180°)
    Complement {
        /// Base color
        color: Rgb,
    },
    /// Add an amount to every channel, clamped to 0-255
    Shift {
        /// Hex color, `#` optional
        hex: String,
        /// Amount to add, negative to darken
        #[arg(allow_negative_numbers = true)]
        amount: i32,
    },
    /// Whether black or white text reads better on a background
    TextColor {
        /// Background color
        background: Rgb,
    },
    /// Keywords suggested for a mood
    Keywords {
        /// Softness, 0-100
        #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
        soft: u8,
        /// Staticness, 0-100
        #[arg(long = "static", default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
        staticness: u8,
        /// Knowledge base JSON
        #[arg(long, env = "PALETTE_GUIDE_KB", value_name = "FILE")]
        kb: Option<PathBuf>,
    },
    /// Font pairings from the knowledge base
    Fonts {
        /// Knowledge base JSON
        #[arg(long, env = "PALETTE_GUIDE_KB", value_name = "FILE")]
        kb: PathBuf,
    },
    /// Design tokens from a generated report
    Export {
        /// Report JSON
        report: PathBuf,
        /// css, scss or tailwind
        #[arg(short, long, default_value_t = ExportFormat::Css)]
        format: ExportFormat,
    },
    /// Palette, specs and component colors of a generated report
    Show {
        /// Report JSON
        report: PathBuf,
    },
    /// Evaluate a background/text pair
    Lab {
        /// Background color
        #[arg(long, default_value = DEFAULT_BACKGROUND)]
        bg: String,
        /// Text color
        #[arg(long, default_value = DEFAULT_TEXT)]
        text: String,
        /// Exchange background and text before evaluating
        #[arg(long)]
        swap: bool,
        /// Report whose primary color styles the sample button
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },
    /// Validate a generation request and print its JSON body
    Request {
        /// Service purpose
        #[arg(long, default_value = "")]
        service: String,
        /// Target platform
        #[arg(long, default_value = "")]
        platform: String,
        /// Chosen keyword
        #[arg(long, default_value = "")]
        keyword: String,
        /// Optional primary color
        #[arg(long)]
        primary_color: Option<String>,
        /// Knowledge base JSON
        #[arg(long, env = "PALETTE_GUIDE_KB", value_name = "FILE")]
        kb: Option<PathBuf>,
    },
}

fn print_verdict(ratio: f64, verdict: &WcagVerdict) {
    println!("ratio: {}", format_ratio(ratio));
    for (criterion, status) in verdict.rows() {
        println!("{:<11} {status}", criterion.label());
    }
}

fn load_report(path: &Path) -> Result<Report> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read report: {}", path.display()))?;
    let report = Report::from_json_str(&text)
        .with_context(|| format!("Invalid report: {}", path.display()))?;
    debug!(path = %path.display(), has_colors = report.color_system.is_some(), "report loaded");
    Ok(report)
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Contrast { a, b } => {
            let ratio = contrast_ratio(a, b);
            debug!(%a, %b, ratio, "contrast");
            print_verdict(ratio, &classify(ratio));
        }
        Command::Complement { color } => {
            println!("{}", complementary(&encode_hex(color)));
        }
        Command::Shift { hex, amount } => {
            let digits = hex.trim().trim_start_matches('#');
            if decode_hex(&format!("#{digits}")).is_none() {
                bail!("Invalid hex color: {hex}");
            }
            println!("{}", shift_brightness(&hex, amount));
        }
        Command::TextColor { background } => {
            let hex = encode_hex(background);
            debug!(luma = yiq_luma(background), "yiq");
            println!("{}", text_color_for(&hex));
        }
        Command::Keywords {
            soft,
            staticness,
            kb,
        } => {
            let mood = MoodVector::new(soft, staticness);
            let kb = kb.as_deref().map(KnowledgeBase::load_or_default);
            let category = mood.category();
            info!(soft, staticness, %category, "resolved mood");
            println!("{category}");
            for keyword in keywords_for_mood(mood, kb.as_ref()) {
                println!("  {keyword}");
            }
        }
        Command::Fonts { kb } => {
            let kb = KnowledgeBase::load(&kb)?;
            for pairing in &kb.font_pairing_recommendations {
                println!("{}: {}", pairing.combination, pairing.reason);
            }
        }
        Command::Export { report, format } => {
            let tokens = load_report(&report)?.export(format);
            println!("{}", tokens.trim_end());
        }
        Command::Show { report } => {
            let report = load_report(&report)?;
            for swatch in report.swatches() {
                println!("{} ({}) {}", swatch.role, swatch.variant, swatch.hex);
            }
            println!("color: {}", report.color_reasoning());
            for (label, value) in report.typography_rows() {
                println!("{label}: {value}");
            }
            println!("typography: {}", report.typography_reasoning());
            for (label, value) in report.accessibility_rows() {
                println!("{label}: {value}");
            }
            println!("accessibility: {}", report.accessibility_reasoning());
            if let Some(system) = &report.color_system {
                let show = system.showcase();
                println!(
                    "primary button: {} on {}",
                    show.primary_button.text, show.primary_button.background
                );
                println!(
                    "secondary button: {} on {}",
                    show.secondary_button.text, show.secondary_button.background
                );
            }
        }
        Command::Lab {
            bg,
            text,
            swap,
            report,
        } => {
            let mut lab = LabColors::new(&bg, &text);
            if swap {
                lab.swap();
            }
            let report = report.as_deref().map(load_report).transpose()?;
            let preview = lab.preview(report.as_ref().and_then(|r| r.color_system.as_ref()));
            print_verdict(preview.ratio, &preview.verdict);
            println!(
                "button: {} on {}",
                preview.button_text, preview.button_background
            );
        }
        Command::Request {
            service,
            platform,
            keyword,
            primary_color,
            kb,
        } => {
            let request = GuideRequest {
                service,
                platform,
                keyword,
                primary_color,
            }
            .validate()?;
            let kb = kb
                .as_deref()
                .map(KnowledgeBase::load_or_default)
                .unwrap_or_default();
            let body = serde_json::to_string_pretty(&request.body(&kb))
                .context("Failed to serialize request body")?;
            println!("{body}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = logs::init(&args.log_level) {
        eprintln!("{e:#}");
        return ExitCode::from(2);
    }
    debug!(?args, "starting");

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
