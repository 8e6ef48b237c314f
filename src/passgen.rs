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
// Password generator

use anyhow::{Result, bail};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;

use crate::checker::{SYMBOLS, has_digit, has_lowercase, has_symbol, has_uppercase};

pub const DEFAULT_LENGTH: usize = 12;

/// Shorter passwords cannot contain one character of every class.
pub const MIN_LENGTH: usize = 4;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";

/// Generates a random password containing at least one uppercase letter,
/// one lowercase letter, one digit and one special character.
///
/// Characters are drawn uniformly from the 94-character union alphabet;
/// draws missing a class are rejected and retried.
pub fn generate_password(length: usize) -> Result<String> {
    if length < MIN_LENGTH {
        bail!(
            "Password length must be at least {} to include all character classes",
            MIN_LENGTH
        );
    }

    let pool: Vec<char> = [UPPERCASE, LOWERCASE, NUMBERS, SYMBOLS]
        .concat()
        .chars()
        .collect();
    let mut rng = OsRng::default();

    loop {
        let candidate: String = (0..length)
            .map(|_| *pool.choose(&mut rng).unwrap())
            .collect();
        if satisfies_all_classes(&candidate) {
            return Ok(candidate);
        }
    }
}

/// True when the candidate holds at least one character of every class the
/// strength checker scores.
pub fn satisfies_all_classes(candidate: &str) -> bool {
    has_uppercase(candidate)
        && has_lowercase(candidate)
        && has_digit(candidate)
        && has_symbol(candidate)
}
