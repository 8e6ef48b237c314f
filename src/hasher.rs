//  ____  ____                 __  __       _
// |  _ \|  _ \ __ _ ___ ___  |  \/  | __ _| |_ ___
// | |_) | |_) / _` / __/ __| | |\/| |/ _` | __/ _ \
// |  _ <|  __/ (_| \__ \__ \ | |  | | (_| | ||  __/
// |_| \_\_|   \__,_|___/___/ |_|  |_|\__,_|\__\___|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Salted hash storage simulation

use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

pub const SALT_LEN: usize = 16;

/// Hex-encoded salt and digest pair, as a credential store would keep them.
/// There is no verification path; this is display-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword {
    pub salt: String,
    pub digest: String,
}

/// SHA-256 over the salt bytes followed by the UTF-8 password bytes.
pub fn hash_with_salt(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hashes a password under a fresh 16-byte salt from the OS random source.
pub fn hash_password(password: &str) -> HashedPassword {
    let mut salt = [0u8; SALT_LEN];
    let mut rng = OsRng;
    rng.fill_bytes(&mut salt);

    HashedPassword {
        salt: hex::encode(salt),
        digest: hash_with_salt(&salt, password),
    }
}
