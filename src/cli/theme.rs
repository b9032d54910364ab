use std::fmt::Display;
use std::io::IsTerminal;
use std::sync::OnceLock;

use crossterm::style::{style, Color, StyledContent, Stylize};

pub const STATUS_OK: Color = Color::Rgb {
    r: 0x22,
    g: 0xc5,
    b: 0x5e,
};
pub const STATUS_ERROR: Color = Color::Rgb {
    r: 0xef,
    g: 0x44,
    b: 0x44,
};
pub const STATUS_WARN: Color = Color::Rgb {
    r: 0xea,
    g: 0xb3,
    b: 0x08,
};
pub const MUTED: Color = Color::Rgb {
    r: 0x6b,
    g: 0x72,
    b: 0x80,
};
pub const ACCENT: Color = Color::Rgb {
    r: 0xda,
    g: 0x77,
    b: 0x56,
};

pub fn ok<D: Display>(text: D) -> StyledContent<D> {
    paint(text, STATUS_OK)
}

pub fn error<D: Display>(text: D) -> StyledContent<D> {
    paint(text, STATUS_ERROR)
}

pub fn warn<D: Display>(text: D) -> StyledContent<D> {
    paint(text, STATUS_WARN)
}

pub fn muted<D: Display>(text: D) -> StyledContent<D> {
    paint(text, MUTED)
}

pub fn accent<D: Display>(text: D) -> StyledContent<D> {
    paint(text, ACCENT)
}

pub fn heading<D: Display>(text: D) -> StyledContent<D> {
    if colors_enabled() {
        style(text).bold()
    } else {
        style(text)
    }
}

fn paint<D: Display>(text: D, color: Color) -> StyledContent<D> {
    if colors_enabled() {
        style(text).with(color)
    } else {
        style(text)
    }
}

/// Plain output when stdout is not a terminal or `NO_COLOR` is set.
fn colors_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
    })
}
