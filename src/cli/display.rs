// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the quire CLI.
//!
//! Answers go to stdout exactly as they appear in the corpus, one per line, so
//! the output pipes cleanly. Everything else (prompt, ranked files, scores,
//! errors) goes to stderr and is colored when stderr is a TTY. OneDark for
//! dark terminals, One Light for light ones. Respects `NO_COLOR`.
//!
//! # Theme detection order
//!
//! 1. `QUIRE_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::io::{self, BufRead, Write};
use std::sync::OnceLock;

use quire::{Answer, Ranked};

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("QUIRE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background colors 7+ (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if stderr should be colored
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

/// Apply color if stderr is a TTY, otherwise return plain text
pub fn color(c: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", c, text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// Print `Query: ` and read one line from stdin.
pub fn prompt_query() -> io::Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{}", color(&format!("{}{}", BOLD, CYAN()), "Query: "))?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn format_ranked(label: &str, ranked: &[Ranked]) -> String {
    let mut out = color(BOLD, label);
    out.push('\n');
    if ranked.is_empty() {
        out.push_str(&format!("  {}\n", color(&GRAY(), "(none scored above zero)")));
    }
    for (rank, r) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "  {} {} {}\n",
            color(&GRAY(), &format!("{:>2}.", rank + 1)),
            r.id,
            color(&GREEN(), &format!("{:.4}", r.score))
        ));
    }
    out
}

/// Ranked files and sentences with scores, for `--verbose`.
pub fn print_ranking(answer: &Answer) {
    eprint!("{}", format_ranked("Files", &answer.files));
    eprint!("{}", format_ranked("Sentences", &answer.sentences));
}

/// Print the chosen sentences to stdout, one per line.
pub fn print_answer(answer: &Answer) {
    if answer.sentences.is_empty() {
        eprintln!("{}", color(&GRAY(), "No sentence in the corpus matches that query."));
        return;
    }
    for sentence in &answer.sentences {
        println!("{}", sentence.id);
    }
}

/// Print the whole answer as pretty JSON to stdout.
pub fn print_json(answer: &Answer) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(answer)?);
    Ok(())
}

/// Print a top-level error to stderr.
pub fn print_error(error: &anyhow::Error) {
    eprintln!("{} {:#}", color(&RED(), "error:"), error);
}
