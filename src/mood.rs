//! Mood-to-keyword resolution.
//!
//! Two 0–100 sliders (softness and staticness) are split at the midpoint into
//! one of four affect categories. Each category is looked up in a read-only
//! knowledge base to get the keywords offered to the user.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, warn};

/// Axis values strictly above this count as soft / static.
pub const MIDPOINT: u8 = 50;

/// Upper bound of each mood axis.
pub const AXIS_MAX: u8 = 100;

/// Keywords used when the knowledge base has nothing to offer.
pub const DEFAULT_KEYWORDS: [&str; 2] = ["귀여운", "경쾌한"];

/// Group consulted before [`DEFAULT_KEYWORDS`] when no description matches.
pub const FALLBACK_GROUP: &str = "group1";

/// Position of the two mood sliders.
///
/// Deserialized values go through [`MoodVector::new`], so they are clamped
/// the same way as values built in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMood")]
pub struct MoodVector {
    /// Softness, 0 (hard) to 100 (soft).
    pub soft: u8,
    /// Staticness, 0 (dynamic) to 100 (static).
    #[serde(rename = "static")]
    pub staticness: u8,
}

impl MoodVector {
    /// Create a mood vector, clamping each axis to `[0, 100]`.
    #[must_use]
    pub fn new(soft: u8, staticness: u8) -> Self {
        Self {
            soft: soft.min(AXIS_MAX),
            staticness: staticness.min(AXIS_MAX),
        }
    }

    /// Category for this slider position.
    #[must_use]
    pub fn category(self) -> Category {
        resolve_category(self.soft, self.staticness)
    }
}

#[derive(Deserialize)]
struct RawMood {
    soft: u8,
    #[serde(rename = "static")]
    staticness: u8,
}

impl From<RawMood> for MoodVector {
    fn from(raw: RawMood) -> Self {
        Self::new(raw.soft, raw.staticness)
    }
}

impl Default for MoodVector {
    fn default() -> Self {
        Self::new(MIDPOINT, MIDPOINT)
    }
}

/// One of the four affect quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Soft and static.
    SoftStatic,
    /// Soft and dynamic.
    SoftDynamic,
    /// Hard and static.
    HardStatic,
    /// Hard and dynamic.
    HardDynamic,
}

impl Category {
    /// Description string stored for this category in the knowledge base.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SoftStatic => "Soft + Static",
            Self::SoftDynamic => "Soft + Dynamic",
            Self::HardStatic => "Hard + Static",
            Self::HardDynamic => "Hard + Dynamic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Map two slider values to a category.
///
/// Each axis is split independently; exactly 50 falls on the "not greater"
/// side, so `(50, 50)` is [`Category::HardDynamic`].
///
/// # Arguments
///
/// * `soft` - Softness slider, 0-100
/// * `staticness` - Staticness slider, 0-100
///
/// # Returns
///
/// The quadrant both values fall into.
#[must_use]
pub fn resolve_category(soft: u8, staticness: u8) -> Category {
    match (soft > MIDPOINT, staticness > MIDPOINT) {
        (true, true) => Category::SoftStatic,
        (true, false) => Category::SoftDynamic,
        (false, true) => Category::HardStatic,
        (false, false) => Category::HardDynamic,
    }
}

/// A named keyword group of the knowledge base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordGroup {
    /// Category description, e.g. `Soft + Static`.
    pub description: String,
    /// Keywords in display order.
    pub keywords: Vec<String>,
}

/// Keyword groups in the order they appear in the knowledge base file.
///
/// When several groups carry the same description, the first one wins, so
/// document order matters and a sorted map would not do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordGroups(Vec<(String, KeywordGroup)>);

impl KeywordGroups {
    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The group stored under `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&KeywordGroup> {
        self.0.iter().find(|(k, _)| k == id).map(|(_, g)| g)
    }

    /// Add a group at the end, or replace the one already stored under `id`
    /// without moving it.
    pub fn insert(&mut self, id: String, group: KeywordGroup) {
        match self.0.iter_mut().find(|(k, _)| *k == id) {
            Some((_, slot)) => *slot = group,
            None => self.0.push((id, group)),
        }
    }

    /// Remove and return the group stored under `id`.
    pub fn remove(&mut self, id: &str) -> Option<KeywordGroup> {
        let pos = self.0.iter().position(|(k, _)| k == id)?;
        Some(self.0.remove(pos).1)
    }

    /// Group identifiers and groups, in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &KeywordGroup)> {
        self.0.iter().map(|(k, g)| (k.as_str(), g))
    }

    /// Groups in document order.
    pub fn values(&self) -> impl Iterator<Item = &KeywordGroup> {
        self.0.iter().map(|(_, g)| g)
    }
}

impl FromIterator<(String, KeywordGroup)> for KeywordGroups {
    fn from_iter<I: IntoIterator<Item = (String, KeywordGroup)>>(iter: I) -> Self {
        let mut groups = Self::default();
        for (id, group) in iter {
            groups.insert(id, group);
        }
        groups
    }
}

impl Serialize for KeywordGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (id, group) in self.entries() {
            map.serialize_entry(id, group)?;
        }
        map.end()
    }
}

struct GroupsVisitor;

impl<'de> Visitor<'de> for GroupsVisitor {
    type Value = KeywordGroups;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of keyword groups")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut groups = KeywordGroups::default();
        while let Some((id, group)) = access.next_entry::<String, KeywordGroup>()? {
            groups.insert(id, group);
        }
        Ok(groups)
    }
}

impl<'de> Deserialize<'de> for KeywordGroups {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(GroupsVisitor)
    }
}

/// A recommended font combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontPairing {
    /// The fonts, e.g. `Pretendard + Noto Serif KR`.
    pub combination: String,
    /// Why they work together.
    pub reason: String,
}

/// Reference data loaded once at startup and never mutated.
///
/// Missing sections deserialize as empty, so a partial file still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeBase {
    /// Keyword groups keyed by identifier (`group1`, `group2`, ...).
    pub iri_colors: KeywordGroups,
    /// Font pairing suggestions.
    pub font_pairing_recommendations: Vec<FontPairing>,
}

impl KnowledgeBase {
    /// Parse a knowledge base from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or a present field has
    /// the wrong shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse knowledge base JSON")
    }

    /// Read and parse a knowledge base file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read knowledge base: {}", path.display()))?;
        let kb = Self::from_json_str(&text)
            .with_context(|| format!("Invalid knowledge base: {}", path.display()))?;
        debug!(
            path = %path.display(),
            groups = kb.iri_colors.len(),
            pairings = kb.font_pairing_recommendations.len(),
            "knowledge base loaded"
        );
        Ok(kb)
    }

    /// Like [`KnowledgeBase::load`], but any failure yields an empty base.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!("using empty knowledge base: {e:#}");
            Self::default()
        })
    }

    /// The first group, in file order, whose description matches `category`.
    #[must_use]
    pub fn group_for(&self, category: Category) -> Option<&KeywordGroup> {
        self.iri_colors
            .values()
            .find(|g| g.description == category.description())
    }
}

/// Keywords offered for `category`.
///
/// # Arguments
///
/// * `category` - The resolved mood quadrant
/// * `kb` - The loaded knowledge base, if any
///
/// # Returns
///
/// The keywords of the first matching group. A group that is missing or has
/// no keywords falls back to the `group1` keywords, then to
/// [`DEFAULT_KEYWORDS`]. The result is never empty.
#[must_use]
pub fn lookup_keywords(category: Category, kb: Option<&KnowledgeBase>) -> Vec<String> {
    let Some(kb) = kb else {
        return default_keywords();
    };

    kb.group_for(category)
        .filter(|g| !g.keywords.is_empty())
        .or_else(|| {
            kb.iri_colors
                .get(FALLBACK_GROUP)
                .filter(|g| !g.keywords.is_empty())
        })
        .map_or_else(default_keywords, |g| g.keywords.clone())
}

/// Keywords for a slider position.
#[must_use]
pub fn keywords_for_mood(mood: MoodVector, kb: Option<&KnowledgeBase>) -> Vec<String> {
    lookup_keywords(mood.category(), kb)
}

/// Keep a previous keyword choice only if it is still on offer.
#[must_use]
pub fn retain_selection(selected: Option<&str>, keywords: &[String]) -> Option<String> {
    selected
        .filter(|s| keywords.iter().any(|k| k.as_str() == *s))
        .map(ToString::to_string)
}

fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(ToString::to_string).collect()
}
