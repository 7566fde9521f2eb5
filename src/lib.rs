//! Color-science and accessibility engine for design-guide generation.
//!
//! The engine is a set of pure functions:
//! 1. Decode and encode hex colors ([`color`])
//! 2. Compute relative luminance, WCAG contrast and readable text color ([`contrast`])
//! 3. Classify a ratio against the AA/AAA thresholds ([`wcag`])
//! 4. Derive complementary and lightened/darkened colors ([`transform`])
//! 5. Resolve mood sliders to keyword suggestions ([`mood`])
//!
//! Around it sit typed views of the generated report ([`report`]), the color
//! lab ([`lab`]) and the generation request ([`request`]).
//!
//! Color functions never fail on bad input. They return documented fallbacks
//! instead: contrast `1`, complementary `#000000`, light text.

pub mod color;
pub mod contrast;
pub mod lab;
pub mod logs;
pub mod mood;
pub mod report;
pub mod request;
pub mod transform;
pub mod wcag;

pub use color::{Rgb, decode_hex, encode_hex};
pub use contrast::{contrast, prefers_dark_text, relative_luminance};
pub use mood::{Category, KnowledgeBase, MoodVector, lookup_keywords, resolve_category};
pub use transform::{complementary, shift_brightness};
pub use wcag::{WcagVerdict, classify};
