//! The fortune generator.
//!
//! Produces a full reading payload from `(language, optional birth date)`.
//! The generator never inspects the uploaded image; scores and narratives
//! are drawn from the injected randomness source, while the feature and
//! advice lists are a deterministic slice of the language's fixed tables.

use chrono::Datelike;
use rand::Rng;

use crate::language::Language;
use crate::templates::{base_templates, birth_date_placeholder, fortune_templates};
use crate::zodiac::zodiac_symbol;

/// Love score range (half-open), language-independent.
pub const LOVE_SCORE_RANGE: std::ops::Range<i32> = 70..100;
/// Money score range (half-open), language-independent.
pub const MONEY_SCORE_RANGE: std::ops::Range<i32> = 60..100;
/// Health score range (half-open), language-independent.
pub const HEALTH_SCORE_RANGE: std::ops::Range<i32> = 75..100;

/// Number of entries taken from the head of the feature/advice lists.
const LIST_SLICE_LEN: usize = 3;

/// A generated reading, minus the identifier and timestamp that storage
/// assigns on persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingContent {
    pub love_score: i32,
    pub money_score: i32,
    pub health_score: i32,
    pub love_reading: String,
    pub money_reading: String,
    pub health_reading: String,
    pub features: Vec<String>,
    pub advice: Vec<String>,
    pub today_fortune: String,
    pub new_year_fortune: String,
    pub mbti_prediction: String,
}

/// Generate a reading for the given language and optional birth date.
///
/// The narrative strings are chosen uniformly from the language's base
/// table; `features` and `advice` are always the first three entries of
/// their lists (NOT random). The three derived fortune fields use the
/// zodiac fortune subtable when a birth year can be extracted, and the
/// fixed placeholder message otherwise.
pub fn generate_reading<R: Rng + ?Sized>(
    rng: &mut R,
    language: Language,
    birth_date: Option<&str>,
) -> ReadingContent {
    let templates = base_templates(language);

    let love_score = rng.random_range(LOVE_SCORE_RANGE);
    let money_score = rng.random_range(MONEY_SCORE_RANGE);
    let health_score = rng.random_range(HEALTH_SCORE_RANGE);

    let love_reading = pick(rng, &templates.love).to_string();
    let money_reading = pick(rng, &templates.money).to_string();
    let health_reading = pick(rng, &templates.health).to_string();

    let features = templates.features[..LIST_SLICE_LEN]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let advice = templates.advice[..LIST_SLICE_LEN]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let (today_fortune, new_year_fortune, mbti_prediction) =
        match birth_date.and_then(extract_birth_year) {
            Some(year) => birth_date_fortunes(rng, language, year),
            None => {
                let placeholder = birth_date_placeholder(language).to_string();
                (placeholder.clone(), placeholder.clone(), placeholder)
            }
        };

    ReadingContent {
        love_score,
        money_score,
        health_score,
        love_reading,
        money_reading,
        health_reading,
        features,
        advice,
        today_fortune,
        new_year_fortune,
        mbti_prediction,
    }
}

/// Build the three zodiac-derived fortune strings for a birth year.
fn birth_date_fortunes<R: Rng + ?Sized>(
    rng: &mut R,
    language: Language,
    birth_year: i32,
) -> (String, String, String) {
    let fortunes = fortune_templates(language);
    let zodiac = zodiac_symbol(birth_year);
    let current_year = chrono::Utc::now().year().to_string();

    let interpolate = |template: &str| {
        template
            .replace("{zodiac}", zodiac)
            .replace("{year}", &current_year)
    };

    let today = interpolate(pick(rng, &fortunes.today));
    let new_year = interpolate(pick(rng, &fortunes.new_year));
    let personality = pick(rng, &fortunes.personality).to_string();

    (today, new_year, personality)
}

/// Extract the birth year from a free-form date string.
///
/// Takes the leading run of ASCII digits (ISO dates put the year first);
/// anything unparseable behaves as if no birth date was supplied.
fn extract_birth_year(birth_date: &str) -> Option<i32> {
    let digits: String = birth_date
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.len() != 4 {
        return None;
    }
    digits.parse().ok()
}

/// Uniformly pick one entry from a fixed-size template list.
fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &'a [&'static str; 3]) -> &'a str {
    items[rng.random_range(0..items.len())]
}
