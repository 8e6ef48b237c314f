use anyhow::Result;

use crate::checker::{StrengthOutcome, check_password_strength};
use crate::commands::show_stored_form;
use crate::configtool::read_password_from_stdin;

pub fn check_password(password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => read_password_from_stdin("Enter a password to test: ")?,
    };

    match check_password_strength(&password) {
        StrengthOutcome::Blacklisted => {
            println!("❌ CRITICAL: This is a commonly hacked password. Change immediately!");
        }
        StrengthOutcome::Scored(report) => {
            println!("\nPassword score: {}/5", report.score);
            println!("Strength: {}", report.rating);
            if !report.feedback.is_empty() {
                println!("Suggestions to improve:");
                for item in &report.feedback {
                    println!("• {}", item);
                }
            }
            show_stored_form(&password);
        }
    }

    Ok(())
}
