//! Reads the INI-style `.git/config` file.
//!
//! Only what the repository needs is supported: `[section]` and
//! `[section "subsection"]` headers, `key = value` lines, bare boolean keys,
//! and `#` / `;` comments. Section and key names are case-insensitive.

use std::collections::HashMap;

use thiserror::Error;

/// An error found while parsing a config file.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("line {line}: {reason}")]
pub struct ParseConfigError {
    pub line: usize,
    pub reason: &'static str,
}

/// Parsed configuration values, keyed by section and name.
#[derive(Clone, Debug, Default)]
pub struct Config {
    values: HashMap<String, String>,
}

impl Config {
    pub fn parse(text: &str) -> Result<Config, ParseConfigError> {
        // Some editors save a UTF-8 byte order mark; git ignores it.
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut values = HashMap::new();
        let mut section: Option<String> = None;

        for (n, line) in text.lines().enumerate() {
            let line = line.trim();
            let err = |reason| ParseConfigError { line: n + 1, reason };

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') {
                if !line.ends_with(']') || line.len() < 3 {
                    return Err(err("malformed section header"));
                }
                section = Some(section_name(&line[1..line.len() - 1]));
                continue;
            }

            let section = section
                .as_ref()
                .ok_or_else(|| err("value appears before any section"))?;

            let (key, value) = match line.find('=') {
                Some(n) => (line[..n].trim(), unquote(line[n + 1..].trim())),
                None => (line, "true"),
            };

            if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(err("invalid key"));
            }

            values.insert(full_key(section, key), value.to_owned());
        }

        Ok(Config { values })
    }

    /// Returns the last value set for `key` in `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.values
            .get(&full_key(&section.to_ascii_lowercase(), key))
            .map(String::as_str)
    }
}

fn section_name(header: &str) -> String {
    match header.find('"') {
        Some(n) => {
            let name = header[..n].trim().to_ascii_lowercase();
            let sub = header[n..].trim_matches('"');
            format!("{}.{}", name, sub)
        }
        None => header.trim().to_ascii_lowercase(),
    }
}

fn full_key(section: &str, key: &str) -> String {
    format!("{}.{}", section, key.to_ascii_lowercase())
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
