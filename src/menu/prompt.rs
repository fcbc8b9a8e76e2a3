//! Console prompt helpers
//!
//! Blocking line-oriented prompts with local re-prompt loops for invalid
//! input. End of input is surfaced as an I/O error rather than looping, so
//! piped or scripted sessions always terminate.

use std::io::{self, Write};

use crate::error::{TellerError, TellerResult};
use crate::models::client::FIELD_DELIMITER;

/// Prompt for a string input
pub fn prompt_string(prompt: &str) -> TellerResult<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| TellerError::Io(e.to_string()))?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| TellerError::Io(e.to_string()))?;

    if bytes == 0 {
        return Err(TellerError::Io("unexpected end of input".into()));
    }

    Ok(input.trim().to_string())
}

/// Prompt for a record field value, re-prompting until it is storable
pub fn prompt_field(prompt: &str) -> TellerResult<String> {
    loop {
        let input = prompt_string(prompt)?;
        match validate_field(&input) {
            Ok(()) => return Ok(input),
            Err(message) => println!("{}", message),
        }
    }
}

/// Prompt for a strictly positive amount, re-prompting on invalid input
pub fn prompt_amount(prompt: &str) -> TellerResult<f64> {
    loop {
        let input = prompt_string(prompt)?;
        match parse_amount(&input) {
            Ok(amount) => return Ok(amount),
            Err(message) => println!("{}", message),
        }
    }
}

/// Prompt for a non-negative balance, re-prompting on invalid input
pub fn prompt_balance(prompt: &str) -> TellerResult<f64> {
    loop {
        let input = prompt_string(prompt)?;
        match parse_balance(&input) {
            Ok(balance) => return Ok(balance),
            Err(message) => println!("{}", message),
        }
    }
}

/// Ask a yes/no question; only `y` or `Y` answers yes
pub fn confirm(prompt: &str) -> TellerResult<bool> {
    let input = prompt_string(prompt)?;
    Ok(input == "y" || input == "Y")
}

fn validate_field(input: &str) -> Result<(), String> {
    if input.is_empty() {
        return Err("A value is required, please try again.".into());
    }
    if input.contains(FIELD_DELIMITER) {
        return Err(format!(
            "The value may not contain '{}', please try again.",
            FIELD_DELIMITER
        ));
    }
    Ok(())
}

fn parse_amount(input: &str) -> Result<f64, String> {
    match input.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err("Please enter a positive amount.".into()),
    }
}

fn parse_balance(input: &str) -> Result<f64, String> {
    match input.parse::<f64>() {
        Ok(balance) if balance.is_finite() && balance >= 0.0 => Ok(balance),
        _ => Err("Please enter a non-negative amount.".into()),
    }
}
