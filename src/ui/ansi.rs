//! Convert ANSI-styled text into ratatui [`Text`].
//!
//! Only SGR sequences (`ESC [ ... m`) carry meaning here; every other
//! escape sequence is dropped.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

pub fn text_from_ansi(input: &str) -> Text<'static> {
    let mut style = Style::default();
    let mut lines = Vec::new();
    for raw in input.split('\n') {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut chars = raw.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '\x1b' {
                run.push(c);
                continue;
            }
            if chars.peek() != Some(&'[') {
                continue;
            }
            chars.next();
            let mut params = String::new();
            let mut last = None;
            for n in chars.by_ref() {
                if ('@'..='~').contains(&n) {
                    last = Some(n);
                    break;
                }
                params.push(n);
            }
            if last == Some('m') {
                if !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), style));
                }
                style = apply_sgr(style, &params);
            }
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, style));
        }
        lines.push(Line::from(spans));
    }
    Text::from(lines)
}

const BASE_COLORS: [Color; 8] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Gray,
];

const BRIGHT_COLORS: [Color; 8] = [
    Color::DarkGray,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
    Color::White,
];

/// Parse the colour that follows a `38`/`48` code.
fn extended_color<'a>(codes: &mut impl Iterator<Item = &'a u16>) -> Option<Color> {
    match codes.next()? {
        5 => Some(Color::Indexed(u8::try_from(*codes.next()?).ok()?)),
        2 => {
            let r = u8::try_from(*codes.next()?).ok()?;
            let g = u8::try_from(*codes.next()?).ok()?;
            let b = u8::try_from(*codes.next()?).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

fn apply_sgr(mut style: Style, params: &str) -> Style {
    let codes: Vec<u16> = if params.is_empty() {
        vec![0]
    } else {
        params.split(';').map(|p| p.parse().unwrap_or(0)).collect()
    };
    let mut codes = codes.iter();
    while let Some(&code) = codes.next() {
        style = match code {
            0 => Style::default(),
            1 => style.add_modifier(Modifier::BOLD),
            2 => style.add_modifier(Modifier::DIM),
            3 => style.add_modifier(Modifier::ITALIC),
            4 => style.add_modifier(Modifier::UNDERLINED),
            5 => style.add_modifier(Modifier::SLOW_BLINK),
            6 => style.add_modifier(Modifier::RAPID_BLINK),
            7 => style.add_modifier(Modifier::REVERSED),
            8 => style.add_modifier(Modifier::HIDDEN),
            9 => style.add_modifier(Modifier::CROSSED_OUT),
            21 | 22 => style.remove_modifier(Modifier::BOLD | Modifier::DIM),
            23 => style.remove_modifier(Modifier::ITALIC),
            24 => style.remove_modifier(Modifier::UNDERLINED),
            25 => style.remove_modifier(Modifier::SLOW_BLINK | Modifier::RAPID_BLINK),
            27 => style.remove_modifier(Modifier::REVERSED),
            28 => style.remove_modifier(Modifier::HIDDEN),
            29 => style.remove_modifier(Modifier::CROSSED_OUT),
            30..=37 => style.fg(BASE_COLORS[usize::from(code - 30)]),
            38 => match extended_color(&mut codes) {
                Some(color) => style.fg(color),
                None => style,
            },
            39 => style.fg(Color::Reset),
            40..=47 => style.bg(BASE_COLORS[usize::from(code - 40)]),
            48 => match extended_color(&mut codes) {
                Some(color) => style.bg(color),
                None => style,
            },
            49 => style.bg(Color::Reset),
            90..=97 => style.fg(BRIGHT_COLORS[usize::from(code - 90)]),
            100..=107 => style.bg(BRIGHT_COLORS[usize::from(code - 100)]),
            _ => style,
        };
    }
    style
}
