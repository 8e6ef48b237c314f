//  ____  ____                 __  __       _
// |  _ \|  _ \ __ _ ___ ___  |  \/  | __ _| |_ ___
// | |_) | |_) / _` / __/ __| | |\/| |/ _` | __/ _ \
// |  _ <|  __/ (_| \__ \__ \ | |  | | (_| | ||  __/
// |_| \_\_|   \__,_|___/___/ |_|  |_|\__,_|\__\___|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-11
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength checker

use std::fmt;

/// Known-weak passwords rejected outright, compared case-insensitively.
pub static BLACKLIST: &[&str] = &[
    "password",
    "123456",
    "admin",
    "welcome",
    "iloveyou",
    "password123",
];

/// Symbol set counted as special characters: space plus ASCII punctuation
/// without the double quote. Shared with the generator alphabet.
pub const SYMBOLS: &str = " !#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthRating {
    Strong,
    Medium,
    Weak,
}

impl StrengthRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            5 => StrengthRating::Strong,
            3..=4 => StrengthRating::Medium,
            _ => StrengthRating::Weak,
        }
    }
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthRating::Strong => write!(f, "STRONG ✅"),
            StrengthRating::Medium => write!(f, "MEDIUM ⚠️"),
            StrengthRating::Weak => write!(f, "WEAK ❌"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u8,
    pub rating: StrengthRating,
    pub feedback: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrengthOutcome {
    /// The password matches the blacklist; no score is computed.
    Blacklisted,
    Scored(StrengthReport),
}

pub fn has_uppercase(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lowercase(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

pub fn has_symbol(s: &str) -> bool {
    s.chars().any(|c| SYMBOLS.contains(c))
}

/// Scores a password against the five hygiene rules.
///
/// Blacklisted passwords short-circuit; otherwise each rule contributes one
/// point and a fixed suggestion on failure, in evaluation order.
pub fn check_password_strength(password: &str) -> StrengthOutcome {
    if BLACKLIST.contains(&password.to_lowercase().as_str()) {
        return StrengthOutcome::Blacklisted;
    }

    let mut score = 0u8;
    let mut feedback = Vec::new();

    if password.chars().count() >= 8 {
        score += 1;
    } else {
        feedback.push("Password is too short (needs 8+ characters).");
    }

    if has_uppercase(password) {
        score += 1;
    } else {
        feedback.push("Add an uppercase letter.");
    }

    if has_lowercase(password) {
        score += 1;
    } else {
        feedback.push("Add a lowercase letter.");
    }

    if has_digit(password) {
        score += 1;
    } else {
        feedback.push("Add a number.");
    }

    if has_symbol(password) {
        score += 1;
    } else {
        feedback.push("Add a special character (e.g. !, @, #).");
    }

    StrengthOutcome::Scored(StrengthReport {
        score,
        rating: StrengthRating::from_score(score),
        feedback,
    })
}
