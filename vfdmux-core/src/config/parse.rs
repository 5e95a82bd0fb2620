//! Parser for the embedded display configuration
//!
//! Handles the small TOML subset `display.toml` uses:
//! - `[section]` headers
//! - `key = value` pairs (string, integer, boolean)
//! - Comments (`# ...`), including after a value
//!
//! Arrays, tables-in-tables and multi-line strings are not supported.

use heapless::String;

use super::types::{ContentMode, DisplayConfig};
use crate::scheduler::RefreshRate;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Line is not `key = value`
    InvalidLine,
    /// Key not valid in its section
    UnknownKey,
    /// Value has the wrong type
    InvalidValue,
    /// Refresh rate of zero or out of range
    InvalidRate,
    /// Text longer than the display
    TextTooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Spi,
    Content,
}

/// Parse `display.toml` into a [`DisplayConfig`]
///
/// Keys that are absent keep their default value.
pub fn parse_config(input: &str) -> Result<DisplayConfig, ParseError> {
    let mut config = DisplayConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply(&mut config, section, key, value)?;
    }

    Ok(config)
}

fn apply(
    config: &mut DisplayConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Display, "refresh_hz") => {
            config.refresh = RefreshRate::new(parse_int(value)?).ok_or(ParseError::InvalidRate)?;
        }
        (Section::Display, "blank_inverted") => config.blank_inverted = parse_bool(value)?,
        (Section::Spi, "frequency") => config.spi_hz = parse_int(value)?,
        (Section::Content, "mode") => {
            config.content =
                ContentMode::from_name(parse_string(value)?).ok_or(ParseError::InvalidValue)?;
        }
        (Section::Content, "text") => {
            config.text = String::try_from(parse_string(value)?)
                .map_err(|_| ParseError::TextTooLong)?;
        }
        (Section::Content, "update_ms") => config.update_ms = parse_int(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "display" => Ok(Section::Display),
        "spi" => Ok(Section::Spi),
        "content" => Ok(Section::Content),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Split `key = value`, dropping a trailing comment
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    let value = match value.find('#') {
        // A '#' inside quotes is part of the string
        Some(hash_pos) if value[..hash_pos].matches('"').count() % 2 == 0 => {
            value[..hash_pos].trim()
        }
        _ => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Strip surrounding quotes
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ParseError::InvalidValue)
    }
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    // TOML allows '_' as a digit separator
    let mut digits: String<16> = String::new();
    for c in value.chars().filter(|&c| c != '_') {
        digits.push(c).map_err(|_| ParseError::InvalidValue)?;
    }
    digits.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}
