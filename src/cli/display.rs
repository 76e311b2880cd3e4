// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal summary for a finished run.
//!
//! OneDark on dark terminals, One Light on light ones. Detection tries
//! `KEYCLIQUE_THEME` first, then `COLORFGBG`, then defaults to dark. Colors are
//! dropped entirely under `NO_COLOR` or when stdout is not a terminal, so the
//! summary pipes cleanly.
//!
//! ```text
//! ┌─ Comparison ─────────────────────────────────────┐
//! │  documents   4                                    │
//! │  compared    5    similar   3                     │
//! ├─ Largest similar group (3) ─────────────────────────┤
//! │  doc1.txt                                         │
//! │  ...                                              │
//! └───────────────────────────────────────────────────┘
//! ```

use std::fmt::Write as _;
use std::sync::OnceLock;

use keyclique::build::RunReport;
use keyclique::config::FinderConfig;

/// Width between the two vertical borders.
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("KEYCLIQUE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
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

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a terminal, and never under `NO_COLOR`.
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Wraps text in a palette color plus modifiers.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn detect() -> Self {
        Self {
            enabled: use_colors(),
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn paint(&self, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
        if self.enabled {
            format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
        } else {
            text.to_string()
        }
    }

    fn border(&self, text: &str) -> String {
        self.paint(GRAY, &[], text)
    }
}

/// Length as seen on screen, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Keep the tail of a long path: `...rest/of/it.txt`.
pub fn truncate_path(path: &str, max_len: usize) -> String {
    let count = path.chars().count();
    if count <= max_len {
        return path.to_string();
    }
    let tail: String = path.chars().skip(count + 3 - max_len).collect();
    format!("...{}", tail)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

struct BoxWriter<'a> {
    out: String,
    painter: &'a Painter,
}

impl BoxWriter<'_> {
    fn line(&mut self, text: String) {
        let _ = writeln!(self.out, "{}", text);
    }

    /// │ content          │
    fn row(&mut self, content: &str) {
        let pad = BOX_WIDTH.saturating_sub(visible_len(content));
        let bar = self.painter.border("│");
        self.line(format!("{}{}{}{}", bar, content, " ".repeat(pad), bar));
    }

    /// ┌─ LABEL ─────┐ or ├─ LABEL ─────┤
    fn section(&mut self, left: &str, label: &str, right: &str) {
        let label = format!("─ {} ", self.painter.paint(CYAN, &[BOLD], label));
        let remaining = BOX_WIDTH.saturating_sub(visible_len(&label));
        let tail = self.painter.border(&format!("{}{}", "─".repeat(remaining), right));
        self.line(format!("{}{}{}", self.painter.border(left), label, tail));
    }

    /// └─────────────┘
    fn bottom(&mut self) {
        let border = format!("└{}┘", "─".repeat(BOX_WIDTH));
        self.line(self.painter.border(&border));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SUMMARY
// ═══════════════════════════════════════════════════════════════════════════

/// Render the run summary as a boxed block.
pub fn render_summary(config: &FinderConfig, report: &RunReport, painter: &Painter) -> String {
    let mut w = BoxWriter {
        out: String::new(),
        painter,
    };
    let label = |text: &str| format!("  {:<12}", text);
    let number = |n: usize| painter.paint(YELLOW, &[BOLD], &n.to_string());

    w.section("┌", "Comparison", "┐");
    w.row(&format!("{}{}", label("documents"), number(report.stats.documents)));
    w.row(&format!(
        "{}{:<8}{}{}",
        label("compared"),
        number(report.stats.comparisons),
        label("similar"),
        number(report.stats.matches)
    ));
    w.row(&format!(
        "{}{:<8}{}{}",
        label("vertices"),
        number(report.vertices),
        label("edges"),
        number(report.edges)
    ));

    let heading = format!("Largest similar group ({})", report.clique.len());
    w.section("├", &heading, "┤");
    if report.clique.is_empty() {
        w.row(&format!("  {}", painter.paint(GRAY, &[], "(no documents)")));
    }
    for member in &report.clique.members {
        let shown = truncate_path(member, BOX_WIDTH - 4);
        w.row(&format!("  {}", painter.paint(GREEN, &[], &shown)));
    }

    let output = config.output.display().to_string();
    w.section("├", "Written to", "┤");
    w.row(&format!("  {}", truncate_path(&output, BOX_WIDTH - 4)));
    w.bottom();

    w.out
}

pub fn print_summary(config: &FinderConfig, report: &RunReport) {
    print!("{}", render_summary(config, report, &Painter::detect()));
}
