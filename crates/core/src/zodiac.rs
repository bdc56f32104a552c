//! The twelve-animal zodiac cycle used by the birth-date fortunes.

/// The fixed 12-symbol cycle, anchored so that 1900 maps to index 0.
pub const ZODIAC_SYMBOLS: [&str; 12] = [
    "🐭", "🐮", "🐯", "🐰", "🐲", "🐍", "🐴", "🐑", "🐵", "🐔", "🐶", "🐷",
];

/// Zodiac index for a birth year: `(year - 1900) mod 12`.
///
/// Uses euclidean remainder so years before 1900 still index the cycle.
pub fn zodiac_index(birth_year: i32) -> usize {
    (birth_year - 1900).rem_euclid(12) as usize
}

/// The zodiac symbol for a birth year.
pub fn zodiac_symbol(birth_year: i32) -> &'static str {
    ZODIAC_SYMBOLS[zodiac_index(birth_year)]
}
