// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Environment variable interpolation for configuration files.
//!
//! Configuration text may reference the process environment with
//! POSIX-style syntax:
//! - `${VAR_NAME}` - required variable
//! - `${VAR_NAME:-default}` - variable with a fallback used when it is unset or empty
//!
//! ```
//! use gabinete_api::config::env_interpolation::interpolate;
//! use std::env;
//!
//! env::set_var("DOC_SUPABASE_URL", "https://abc.supabase.co");
//!
//! let input = r#"
//! url: ${DOC_SUPABASE_URL}
//! timeout_secs: ${DOC_STORE_TIMEOUT:-30}
//! "#;
//!
//! let result = interpolate(input).unwrap();
//! assert!(result.contains("url: https://abc.supabase.co"));
//! assert!(result.contains("timeout_secs: 30"));
//! ```

use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};
use std::env;

/// Upper bound on the interpolated output, in bytes.
const MAX_INTERPOLATED_LENGTH: usize = 1_000_000;

lazy_static! {
    /// `${NAME}` or `${NAME:-default}`; names follow POSIX rules.
    static ref ENV_VAR_PATTERN: Regex =
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(:-([^}]*))?\}").expect("Invalid regex pattern");
}

/// Errors that can occur during environment variable interpolation.
#[derive(Debug, thiserror::Error)]
pub enum InterpolationError {
    #[error("Environment variable '{name}' is not set and has no default value")]
    MissingVariable { name: String },

    #[error("Environment variable '{name}' does not contain valid Unicode")]
    InvalidUnicode { name: String },

    #[error("Interpolated result exceeds maximum allowed length of {MAX_INTERPOLATED_LENGTH} bytes")]
    ResultTooLarge,
}

/// Replace every `${...}` reference in `input` with its environment value.
///
/// Values are inserted verbatim and never re-scanned, so a value containing
/// `${...}` is not expanded a second time.
pub fn interpolate(input: &str) -> Result<String, InterpolationError> {
    let mut output = String::with_capacity(input.len());
    let mut cursor = 0;
    let mut resolved = Vec::new();

    for caps in ENV_VAR_PATTERN.captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        output.push_str(&input[cursor..whole.start()]);

        let (name, value) = resolve(&caps)?;
        output.push_str(&value);
        resolved.push(name);
        cursor = whole.end();

        if output.len() > MAX_INTERPOLATED_LENGTH {
            return Err(InterpolationError::ResultTooLarge);
        }
    }
    output.push_str(&input[cursor..]);

    // Names only; values may be secrets.
    if !resolved.is_empty() {
        debug!("Interpolated environment variables: {}", resolved.join(", "));
    }

    Ok(output)
}

fn resolve<'a>(caps: &Captures<'a>) -> Result<(&'a str, String), InterpolationError> {
    let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    let fallback = caps.get(3).map(|m| m.as_str());

    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok((name, value)),
        Ok(_) | Err(env::VarError::NotPresent) => match fallback {
            Some(default) => Ok((name, default.to_string())),
            None => Err(InterpolationError::MissingVariable {
                name: name.to_string(),
            }),
        },
        Err(env::VarError::NotUnicode(_)) => Err(InterpolationError::InvalidUnicode {
            name: name.to_string(),
        }),
    }
}
