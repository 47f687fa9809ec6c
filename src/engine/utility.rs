//! Data-generation and text helpers that run immediately instead of being
//! recorded, because callers consume their result before the draw phase.

use std::f64::consts::PI;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::ansi::{crossterm_color, write_reset};
use super::color::{to_ratatui, PlotColor};
use super::error::PlotError;
use crossterm::style::{Attribute, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::Command;

static ANSI_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("valid ANSI escape pattern"));

/// Sampled sine wave. `phase` is in multiples of π; `decay` damps it exponentially.
pub fn sin(periods: f64, length: usize, amplitude: f64, phase: f64, decay: f64) -> Vec<f64> {
    let step = if length > 1 {
        2.0 * PI * periods / (length - 1) as f64
    } else {
        0.0
    };
    let damping = if length > 0 { decay / length as f64 } else { 0.0 };
    (0..length)
        .map(|i| {
            let x = i as f64;
            amplitude * (step * x + PI * phase).sin() * (-damping * x).exp()
        })
        .collect()
}

/// Sampled square wave alternating between `amplitude` and `-amplitude`.
pub fn square(periods: f64, length: usize, amplitude: f64) -> Vec<f64> {
    if length == 0 || periods <= 0.0 {
        return vec![amplitude; length];
    }
    let half = length as f64 / (2.0 * periods);
    (0..length)
        .map(|i| {
            if ((i as f64 / half).floor() as u64) % 2 == 0 {
                amplitude
            } else {
                -amplitude
            }
        })
        .collect()
}

fn style_attribute(word: &str) -> Option<Attribute> {
    match word {
        "bold" => Some(Attribute::Bold),
        "dim" => Some(Attribute::Dim),
        "italic" => Some(Attribute::Italic),
        "underline" => Some(Attribute::Underlined),
        "inverted" | "reverse" => Some(Attribute::Reverse),
        "strike" => Some(Attribute::CrossedOut),
        _ => None,
    }
}

/// Wrap `text` in ANSI sequences for the given colours and style words.
pub fn colorize(
    text: &str,
    fg: Option<&PlotColor>,
    style: Option<&str>,
    bg: Option<&PlotColor>,
) -> Result<String, PlotError> {
    let mut out = String::new();
    let mut styled = false;
    if let Some(fg) = fg.filter(|c| !c.is_default()) {
        let _ = SetForegroundColor(crossterm_color(to_ratatui(fg)?)).write_ansi(&mut out);
        styled = true;
    }
    if let Some(bg) = bg.filter(|c| !c.is_default()) {
        let _ = SetBackgroundColor(crossterm_color(to_ratatui(bg)?)).write_ansi(&mut out);
        styled = true;
    }
    for word in style.unwrap_or_default().split_whitespace() {
        if word == "default" {
            continue;
        }
        let attribute = style_attribute(word)
            .ok_or_else(|| PlotError::bad("colorize", format!("unknown style `{word}`")))?;
        let _ = SetAttribute(attribute).write_ansi(&mut out);
        styled = true;
    }
    out.push_str(text);
    if styled {
        write_reset(&mut out);
    }
    Ok(out)
}

/// Strip every ANSI escape sequence from `text`.
pub fn uncolorize(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Swap rows and columns; ragged rows are truncated to the shortest row.
pub fn transpose(rows: &[Vec<Value>]) -> Vec<Vec<Value>> {
    let width = rows.iter().map(Vec::len).min().unwrap_or(0);
    (0..width)
        .map(|c| rows.iter().map(|row| row[c].clone()).collect())
        .collect()
}
