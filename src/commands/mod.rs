pub mod check;
pub mod init;
pub mod password_gen;

use crate::hasher;

/// Prints the simulated storage record for a password.
pub fn show_stored_form(password: &str) {
    let hashed = hasher::hash_password(password);
    println!("\nSimulated storage record:");
    println!("  salt   : {}", hashed.salt);
    println!("  sha256 : {}", hashed.digest);
}
