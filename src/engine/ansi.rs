//! Encode a rendered buffer as ANSI-styled text.

use crossterm::style::{
    Attribute, Color as CColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::Command;
use ratatui::buffer::Buffer;
use ratatui::style::{Color, Modifier};
use ratatui::text::Span;

/// Terminal colour for a ratatui colour, matching what ratatui's crossterm backend draws.
pub(crate) fn crossterm_color(color: Color) -> CColor {
    match color {
        Color::Reset => CColor::Reset,
        Color::Black => CColor::Black,
        Color::Red => CColor::DarkRed,
        Color::Green => CColor::DarkGreen,
        Color::Yellow => CColor::DarkYellow,
        Color::Blue => CColor::DarkBlue,
        Color::Magenta => CColor::DarkMagenta,
        Color::Cyan => CColor::DarkCyan,
        Color::Gray => CColor::Grey,
        Color::DarkGray => CColor::DarkGrey,
        Color::LightRed => CColor::Red,
        Color::LightGreen => CColor::Green,
        Color::LightYellow => CColor::Yellow,
        Color::LightBlue => CColor::Blue,
        Color::LightMagenta => CColor::Magenta,
        Color::LightCyan => CColor::Cyan,
        Color::White => CColor::White,
        Color::Rgb(r, g, b) => CColor::Rgb { r, g, b },
        Color::Indexed(i) => CColor::AnsiValue(i),
    }
}

const ATTRIBUTES: [(Modifier, Attribute); 6] = [
    (Modifier::BOLD, Attribute::Bold),
    (Modifier::DIM, Attribute::Dim),
    (Modifier::ITALIC, Attribute::Italic),
    (Modifier::UNDERLINED, Attribute::Underlined),
    (Modifier::REVERSED, Attribute::Reverse),
    (Modifier::CROSSED_OUT, Attribute::CrossedOut),
];

// Writing into a `String` cannot fail.
fn emit(out: &mut String, command: impl Command) {
    let _ = command.write_ansi(out);
}

/// Write the SGR sequences that switch to the given colours and modifiers.
pub(crate) fn write_style(out: &mut String, fg: Color, bg: Color, modifier: Modifier) {
    emit(out, SetAttribute(Attribute::Reset));
    if fg != Color::Reset {
        emit(out, SetForegroundColor(crossterm_color(fg)));
    }
    if bg != Color::Reset {
        emit(out, SetBackgroundColor(crossterm_color(bg)));
    }
    for (flag, attribute) in ATTRIBUTES {
        if modifier.contains(flag) {
            emit(out, SetAttribute(attribute));
        }
    }
}

pub(crate) fn write_reset(out: &mut String) {
    emit(out, SetAttribute(Attribute::Reset));
}

/// Serialise every row of `buf` as one line of ANSI text.
pub(crate) fn encode(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut current: Option<(Color, Color, Modifier)> = None;
        // Cells still covered by the previous wide grapheme.
        let mut covered = 0usize;
        for x in area.left()..area.right() {
            let Some(cell) = buf.cell((x, y)) else {
                continue;
            };
            if covered > 0 {
                covered -= 1;
                continue;
            }
            if cell.skip {
                continue;
            }
            covered = Span::raw(cell.symbol()).width().saturating_sub(1);
            let style = (cell.fg, cell.bg, cell.modifier);
            if current != Some(style) {
                write_style(&mut out, style.0, style.1, style.2);
                current = Some(style);
            }
            out.push_str(cell.symbol());
        }
        if current.is_some() {
            write_reset(&mut out);
        }
        if y + 1 < area.bottom() {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    #[test]
    fn one_line_per_row() {
        let buf = Buffer::empty(Rect::new(0, 0, 4, 3));
        let text = encode(&buf);
        assert_eq!(text.lines().count(), 3);
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn style_changes_emit_sgr() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 2, 1));
        buf.set_string(0, 0, "a", Style::default().fg(Color::Rgb(1, 2, 3)));
        let text = encode(&buf);
        assert!(text.contains("\u{1b}[38;2;1;2;3m"), "{text:?}");
        assert!(text.ends_with("\u{1b}[0m"));
    }

    #[test]
    fn wide_glyphs_keep_the_row_width() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        buf.set_string(2, 0, "日本", Style::default());
        let plain = crate::engine::utility::uncolorize(&encode(&buf));
        assert_eq!(plain, "  日本    ");
    }
}
