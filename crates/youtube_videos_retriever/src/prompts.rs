use std::io::{self, Write};

use anyhow::{Context, Result};

pub fn prompt_input(message: &str, default: Option<&str>) -> Result<String> {
    print_prompt(message, default)?;
    let mut buffer = String::new();
    io::stdin()
        .read_line(&mut buffer)
        .context("failed to read input")?;
    let input = buffer.trim().to_string();
    if input.is_empty() {
        if let Some(default) = default {
            Ok(default.to_string())
        } else {
            Ok(String::new())
        }
    } else {
        Ok(input)
    }
}

pub fn prompt_yes_no(message: &str) -> Result<bool> {
    let input = prompt_input(message, None)?;
    Ok(matches!(input.to_lowercase().as_str(), "y" | "yes"))
}

fn print_prompt(message: &str, default: Option<&str>) -> Result<()> {
    let mut stdout = io::stdout();
    match default {
        Some(value) if !value.is_empty() => {
            write!(stdout, "{} [{}]: ", message, value)?;
        }
        _ => {
            write!(stdout, "{}: ", message)?;
        }
    }
    stdout.flush().context("failed to flush prompt")?;
    Ok(())
}
