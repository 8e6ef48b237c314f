use anyhow::Result;

use crate::commands::show_stored_form;
use crate::configtool;
use crate::passgen;

pub fn generate_random(length: Option<usize>) -> Result<()> {
    let length = match length {
        Some(len) => len,
        None => configtool::load_or_default()?.default_length,
    };

    let password = passgen::generate_password(length)?;
    println!("Generated password: {}", password);
    show_stored_form(&password);

    Ok(())
}
