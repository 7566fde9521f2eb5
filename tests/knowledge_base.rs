//! Loading the knowledge base from disk and resolving keywords through it.

use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use palette_guide::mood::{
    Category, DEFAULT_KEYWORDS, KnowledgeBase, MoodVector, keywords_for_mood, lookup_keywords,
    resolve_category,
};

const KB_JSON: &str = r#"{
    "iri_colors": {
        "group1": { "description": "Soft + Dynamic", "keywords": ["귀여운", "경쾌한", "즐거운"] },
        "group2": { "description": "Soft + Static", "keywords": ["은은한", "차분한"] },
        "group3": { "description": "Hard + Static", "keywords": ["격조있는", "클래식한"] },
        "group4": { "description": "Hard + Dynamic", "keywords": ["화려한", "다이나믹한"] }
    },
    "font_pairing_recommendations": [
        { "combination": "Pretendard + Gowun Batang", "reason": "modern body, warm headings" },
        { "combination": "Noto Sans KR + Roboto", "reason": "neutral across platforms" }
    ]
}"#;

fn write_kb(dir: &TempDir, contents: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join("knowledge_base.json");
    fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn loads_groups_and_pairings() -> Result<()> {
    let dir = TempDir::new()?;
    let kb = KnowledgeBase::load(&write_kb(&dir, KB_JSON)?)?;

    assert_eq!(kb.iri_colors.len(), 4);
    assert_eq!(kb.font_pairing_recommendations.len(), 2);
    assert_eq!(
        kb.font_pairing_recommendations[0].combination,
        "Pretendard + Gowun Batang"
    );
    Ok(())
}

#[test]
fn every_mood_quadrant_has_its_own_keywords() -> Result<()> {
    let kb = KnowledgeBase::from_json_str(KB_JSON)?;
    let cases = [
        ((70, 70), Category::SoftStatic, vec!["은은한", "차분한"]),
        ((70, 30), Category::SoftDynamic, vec!["귀여운", "경쾌한", "즐거운"]),
        ((30, 70), Category::HardStatic, vec!["격조있는", "클래식한"]),
        ((30, 30), Category::HardDynamic, vec!["화려한", "다이나믹한"]),
        ((50, 50), Category::HardDynamic, vec!["화려한", "다이나믹한"]),
    ];
    for ((soft, staticness), category, keywords) in cases {
        assert_eq!(resolve_category(soft, staticness), category);
        assert_eq!(
            keywords_for_mood(MoodVector::new(soft, staticness), Some(&kb)),
            keywords
        );
    }
    Ok(())
}

#[test]
fn missing_file_degrades_to_defaults() {
    let dir = TempDir::new().unwrap();
    let kb = KnowledgeBase::load_or_default(&dir.path().join("absent.json"));
    assert_eq!(kb, KnowledgeBase::default());
    assert_eq!(lookup_keywords(Category::SoftStatic, Some(&kb)), DEFAULT_KEYWORDS);
}

#[test]
fn malformed_file_degrades_to_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_kb(&dir, "{ this is not json")?;

    let err = KnowledgeBase::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid knowledge base"));

    let kb = KnowledgeBase::load_or_default(&path);
    assert_eq!(lookup_keywords(Category::HardStatic, Some(&kb)), DEFAULT_KEYWORDS);
    Ok(())
}

#[test]
fn absent_knowledge_base_uses_default_pair() {
    assert_eq!(lookup_keywords(Category::HardDynamic, None), DEFAULT_KEYWORDS);
}
