//! Build script for vfdmux-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Flicker threshold: 9 grids at 50 Hz each
const MIN_FLICKER_FREE_HZ: i64 = 450;

/// Fastest clock the MAX6921 accepts
const MAX_SPI_HZ: i64 = 10_000_000;

/// Characters in the display buffer
const DISPLAY_WIDTH: usize = 10;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds display.toml at build time.                 ║\n\
            ║  Please create one in the vfdmux-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in display.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    if let Some(root) = config.as_table() {
        for key in root.keys() {
            if !["display", "spi", "content"].contains(&key.as_str()) {
                errors.push(format!("unknown section or key '{}'", key));
            }
        }
    }
    validate_display(&config, &mut errors);
    validate_spi(&config, &mut errors);
    validate_content(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid display configuration                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=display.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn table<'a>(config: &'a toml::Value, name: &str, errors: &mut Vec<String>) -> Option<&'a toml::Table> {
    match config.get(name) {
        Some(toml::Value::Table(t)) => Some(t),
        Some(_) => {
            errors.push(format!("[{}] must be a table", name));
            None
        }
        None => None,
    }
}

fn check_keys(section: &str, t: &toml::Table, known: &[&str], errors: &mut Vec<String>) {
    for key in t.keys() {
        if !known.contains(&key.as_str()) {
            errors.push(format!("[{}] unknown key '{}'", section, key));
        }
    }
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(display) = table(config, "display", errors) else {
        return;
    };
    check_keys("display", display, &["refresh_hz", "blank_inverted"], errors);

    match display.get("refresh_hz") {
        Some(toml::Value::Integer(hz)) if *hz <= 0 || *hz > 1_000_000 => {
            errors.push("[display] refresh_hz must be 1-1000000".to_string());
        }
        Some(toml::Value::Integer(hz)) if *hz < MIN_FLICKER_FREE_HZ => {
            println!(
                "cargo:warning=refresh_hz = {} is below {} Hz, the tube will flicker",
                hz, MIN_FLICKER_FREE_HZ
            );
        }
        Some(toml::Value::Integer(_)) | None => {}
        Some(_) => errors.push("[display] refresh_hz must be an integer".to_string()),
    }

    if let Some(v) = display.get("blank_inverted") {
        if !v.is_bool() {
            errors.push("[display] blank_inverted must be true or false".to_string());
        }
    }
}

fn validate_spi(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(spi) = table(config, "spi", errors) else {
        return;
    };
    check_keys("spi", spi, &["frequency"], errors);

    let refresh_hz = config
        .get("display")
        .and_then(|d| d.get("refresh_hz"))
        .and_then(|v| v.as_integer())
        .unwrap_or(500);

    match spi.get("frequency") {
        Some(toml::Value::Integer(hz)) if *hz > MAX_SPI_HZ => {
            errors.push(format!("[spi] frequency above {} Hz", MAX_SPI_HZ));
        }
        Some(toml::Value::Integer(hz)) if *hz < 24 * refresh_hz => {
            errors.push("[spi] frequency too slow for one frame per tick".to_string());
        }
        Some(toml::Value::Integer(_)) | None => {}
        Some(_) => errors.push("[spi] frequency must be an integer".to_string()),
    }
}

fn validate_content(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(content) = table(config, "content", errors) else {
        return;
    };
    check_keys("content", content, &["mode", "text", "update_ms"], errors);

    if let Some(mode) = content.get("mode") {
        match mode.as_str() {
            Some("static" | "uptime" | "counter") => {}
            _ => errors.push("[content] mode must be 'static', 'uptime' or 'counter'".to_string()),
        }
    }

    if let Some(text) = content.get("text") {
        match text.as_str() {
            Some(s) if s.len() > DISPLAY_WIDTH => {
                errors.push(format!("[content] text longer than {} characters", DISPLAY_WIDTH));
            }
            Some(_) => {}
            None => errors.push("[content] text must be a string".to_string()),
        }
    }

    match content.get("update_ms") {
        Some(toml::Value::Integer(ms)) if *ms <= 0 => {
            errors.push("[content] update_ms must be positive".to_string());
        }
        Some(toml::Value::Integer(_)) | None => {}
        Some(_) => errors.push("[content] update_ms must be an integer".to_string()),
    }
}
