//! Prints an argon2 PHC string for `ADMIN_PASSWORD_HASH`.
//!
//! Usage: `hash_admin_password <password>` or pipe the password on stdin.

use std::io::{self, BufRead};

use anyhow::Context;
use homestead_backend::utils::password::hash_password;

fn main() -> anyhow::Result<()> {
    let password = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("Failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        anyhow::bail!("Password must not be empty");
    }

    let hash = hash_password(&password)?;
    println!("ADMIN_PASSWORD_HASH={}", hash);
    Ok(())
}
