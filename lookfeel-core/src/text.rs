// SPDX-License-Identifier: LGPL-3.0-only

//! Text measurement, wrapping and eliding.
//!
//! Shaping lives outside the engine. Everything here works through the
//! [FontMetrics] trait so that a caller can plug in real font data (see the
//! `parley` feature) while tests use [FixedFontMetrics].

use std::fmt;

use crate::geometry::{aligned_rect, Alignment, Direction, Point, Rect, Size};

/// The ellipsis appended to elided text.
pub const ELLIPSIS: char = '\u{2026}';

/// Unicode line separator, used between elided lines.
pub const LINE_SEPARATOR: char = '\u{2028}';

/// Measurements of one font.
pub trait FontMetrics: Send + Sync + fmt::Debug {
    /// Ascent above the baseline.
    fn ascent(&self) -> i32;

    /// Descent below the baseline.
    fn descent(&self) -> i32;

    /// Line height without leading.
    fn height(&self) -> i32 {
        self.ascent() + self.descent()
    }

    /// Extra space between lines.
    fn leading(&self) -> i32 {
        0
    }

    /// Distance between consecutive baselines.
    fn line_spacing(&self) -> i32 {
        self.height() + self.leading()
    }

    /// Horizontal advance of a single-line string.
    fn advance(&self, text: &str) -> i32;
}

/// Metrics where every printable character has the same advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFontMetrics {
    char_width: i32,
    ascent: i32,
    descent: i32,
}

impl FixedFontMetrics {
    /// Create metrics with the given character width, ascent and descent.
    pub const fn new(char_width: i32, ascent: i32, descent: i32) -> Self {
        Self {
            char_width,
            ascent,
            descent,
        }
    }
}

impl Default for FixedFontMetrics {
    fn default() -> Self {
        Self::new(7, 12, 4)
    }
}

impl FontMetrics for FixedFontMetrics {
    fn ascent(&self) -> i32 {
        self.ascent
    }

    fn descent(&self) -> i32 {
        self.descent
    }

    fn advance(&self, text: &str) -> i32 {
        text.chars().filter(|c| !c.is_control() && *c != LINE_SEPARATOR).count() as i32 * self.char_width
    }
}

/// Where the ellipsis goes when text is too wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElideMode {
    /// Keep the end of the text.
    Left,
    /// Keep the start of the text.
    #[default]
    Right,
    /// Keep both ends.
    Middle,
    /// Never elide.
    None,
}

/// Remove `&` mnemonic markers. Returns the plain text and the char index
/// of the underlined character, if any. `&&` stands for a literal `&`.
pub fn strip_mnemonic(text: &str) -> (String, Option<usize>) {
    let mut out = String::with_capacity(text.len());
    let mut underline = None;
    let mut chars = text.chars();
    let mut index = 0;
    while let Some(c) = chars.next() {
        if c == '&' {
            match chars.next() {
                Some('&') => out.push('&'),
                Some(next) => {
                    if underline.is_none() {
                        underline = Some(index);
                    }
                    out.push(next);
                },
                None => break,
            }
        } else {
            out.push(c);
        }
        index += 1;
    }
    (out, underline)
}

/// Size of a possibly multi-line string, one line per `\n`.
pub fn text_size(font: &dyn FontMetrics, text: &str) -> Size {
    if text.is_empty() {
        return Size::default();
    }
    let mut width = 0;
    let mut lines = 0;
    for line in text.split(['\n', LINE_SEPARATOR]) {
        width = width.max(font.advance(line));
        lines += 1;
    }
    Size::new(width, lines * font.height())
}

/// Bounding rect of `text` aligned inside `rect`, mnemonics removed.
pub fn item_text_rect(font: &dyn FontMetrics, rect: Rect, alignment: Alignment, direction: Direction, text: &str) -> Rect {
    let (plain, _) = strip_mnemonic(text);
    aligned_rect(direction, alignment, text_size(font, &plain), rect)
}

/// Shorten `text` to fit `width`, inserting an ellipsis per `mode`.
///
/// Text that already fits comes back unchanged, so eliding is idempotent.
/// If not even the ellipsis fits, the result is empty.
pub fn elided_text(font: &dyn FontMetrics, text: &str, mode: ElideMode, width: i32) -> String {
    if mode == ElideMode::None || font.advance(text) <= width {
        return text.to_string();
    }
    let ellipsis = ELLIPSIS.to_string();
    let ellipsis_width = font.advance(&ellipsis);
    if ellipsis_width > width {
        return String::new();
    }
    let budget = width - ellipsis_width;
    let chars: Vec<char> = text.chars().collect();
    let width_of = |s: &[char]| font.advance(&s.iter().collect::<String>());

    match mode {
        ElideMode::Right => {
            let mut end = 0;
            while end < chars.len() && width_of(&chars[..=end]) <= budget {
                end += 1;
            }
            let mut out: String = chars[..end].iter().collect();
            out.push(ELLIPSIS);
            out
        },
        ElideMode::Left => {
            let mut start = chars.len();
            while start > 0 && width_of(&chars[start - 1..]) <= budget {
                start -= 1;
            }
            let mut out = ellipsis;
            out.extend(&chars[start..]);
            out
        },
        ElideMode::Middle => {
            let (mut head, mut tail) = (0usize, chars.len());
            loop {
                let grow_head = head < tail && width_of(&chars[..head + 1]) + width_of(&chars[tail..]) <= budget;
                let grow_tail = tail > head + 1 && width_of(&chars[..head]) + width_of(&chars[tail - 1..]) <= budget;
                // Grow the shorter side first so both ends stay balanced.
                if grow_head && (head <= chars.len() - tail || !grow_tail) {
                    head += 1;
                } else if grow_tail {
                    tail -= 1;
                } else {
                    break;
                }
                if head >= tail {
                    break;
                }
            }
            let mut out: String = chars[..head].iter().collect();
            out.push(ELLIPSIS);
            out.extend(&chars[tail..]);
            out
        },
        ElideMode::None => text.to_string(),
    }
}

/// One line produced by [layout_lines].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    /// The text of the line, without its trailing break.
    pub text: String,
    /// Natural width of the line.
    pub natural_width: i32,
    /// True if the line ended at an explicit separator.
    pub hard_break: bool,
}

/// Break `text` into lines no wider than `line_width` where possible.
///
/// Explicit breaks (`\n` and U+2028) always start a new line. With `wrap`,
/// lines also break between words; a single word wider than the line keeps
/// its own overlong line.
pub fn layout_lines(font: &dyn FontMetrics, text: &str, line_width: i32, wrap: bool) -> Vec<TextLine> {
    let mut lines = Vec::new();
    let paragraphs: Vec<&str> = text.split(['\n', LINE_SEPARATOR]).collect();
    let count = paragraphs.len();
    for (i, paragraph) in paragraphs.into_iter().enumerate() {
        let hard_break = i + 1 < count;
        if !wrap || font.advance(paragraph) <= line_width {
            lines.push(TextLine {
                text: paragraph.to_string(),
                natural_width: font.advance(paragraph),
                hard_break,
            });
            continue;
        }
        let mut current = String::new();
        for word in paragraph.split_inclusive(' ') {
            let candidate = format!("{current}{word}");
            if !current.is_empty() && font.advance(candidate.trim_end()) > line_width {
                let natural_width = font.advance(current.trim_end());
                lines.push(TextLine {
                    text: std::mem::take(&mut current),
                    natural_width,
                    hard_break: false,
                });
                current.push_str(word);
            } else {
                current = candidate;
            }
        }
        let natural_width = font.advance(current.trim_end());
        lines.push(TextLine {
            text: current,
            natural_width,
            hard_break,
        });
    }
    lines
}

/// Result of [view_item_text_layout].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLayout {
    /// The laid out lines.
    pub lines: Vec<TextLine>,
    /// Widest natural line width.
    pub width: i32,
    /// Total height of the laid out lines.
    pub height: i32,
    /// Last line that fits the height limit, if a limit cut the layout short.
    pub last_visible_line: Option<usize>,
}

/// Lay out item-view text against a width and an optional height limit.
///
/// With a limit, layout stops at the first line after which another line
/// would no longer fit. That line is reported as the last visible one when
/// more text follows.
pub fn view_item_text_layout(
    font: &dyn FontMetrics,
    text: &str,
    line_width: i32,
    max_height: Option<i32>,
    wrap: bool,
) -> TextLayout {
    let all = layout_lines(font, text, line_width, wrap);
    let line_height = font.height();
    let mut lines = Vec::with_capacity(all.len());
    let mut height = 0;
    let mut width = 0;
    let mut last_visible_line = None;
    let total = all.len();
    for (i, line) in all.into_iter().enumerate() {
        height += line_height;
        width = width.max(line.natural_width);
        lines.push(line);
        if let Some(max) = max_height {
            if max > 0 && height + line_height > max {
                if i + 1 < total {
                    last_visible_line = Some(i);
                }
                break;
            }
        }
    }
    TextLayout {
        lines,
        width,
        height,
        last_visible_line,
    }
}

/// Wrap, clip and elide `text` for display inside `text_rect`.
///
/// Returns the text to draw, lines joined by U+2028, and the top-left point
/// where painting should start. Lines above the visible area are skipped.
/// The last visible line is elided instead of being clipped half way.
#[allow(clippy::too_many_arguments)]
pub fn calculate_elided_text(
    font: &dyn FontMetrics,
    text: &str,
    text_rect: Rect,
    valign: Alignment,
    mode: ElideMode,
    wrap: bool,
    last_visible_line_should_be_elided: bool,
    track_paint_start: bool,
) -> (String, Option<Point>) {
    // When vertically centered, prefer the start of the text over a window
    // into its middle.
    let v_center_optimization = track_paint_start && valign.contains(Alignment::VCENTER);
    let layout = view_item_text_layout(
        font,
        text,
        text_rect.width,
        if v_center_optimization { Some(text_rect.height) } else { None },
        wrap,
    );
    let layout_rect = aligned_rect(
        Direction::LeftToRight,
        valign & Alignment::VERTICAL_MASK,
        Size::new(layout.width, layout.height),
        text_rect,
    );
    let mut paint_start = track_paint_start.then(|| Point::new(text_rect.x, layout_rect.y));

    let line_height = font.height();
    let line_count = layout.lines.len();
    let mut ret = String::new();
    let mut height = 0;
    for (i, line) in layout.lines.iter().enumerate() {
        height += line_height;

        if height + layout_rect.y <= text_rect.y {
            if let Some(p) = paint_start.as_mut() {
                p.y += line_height;
            }
            continue;
        }

        let draw_elided = line.natural_width > text_rect.width;
        let mut elide_last_visible = layout.last_visible_line == Some(i);
        if !draw_elided && i + 1 < line_count && last_visible_line_should_be_elided {
            let next_height = height + line_height / 2;
            if next_height + layout_rect.y > text_rect.height + text_rect.y {
                elide_last_visible = true;
            }
        }

        if draw_elided || elide_last_visible {
            let mut line_text = line.text.clone();
            if elide_last_visible {
                if line_text.ends_with(LINE_SEPARATOR) {
                    line_text.pop();
                }
                line_text.push(ELLIPSIS);
            }
            ret.push_str(&elided_text(font, &line_text, mode, text_rect.width));
            if i + 1 < line_count && !ret.ends_with(LINE_SEPARATOR) {
                ret.push(LINE_SEPARATOR);
            }
        } else {
            ret.push_str(&line.text);
            if line.hard_break && i + 1 < line_count {
                ret.push(LINE_SEPARATOR);
            }
        }

        if height + layout_rect.y >= text_rect.bottom() || layout.last_visible_line == Some(i) {
            break;
        }
    }
    (ret, paint_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> FixedFontMetrics {
        FixedFontMetrics::new(10, 8, 2)
    }

    #[test]
    fn test_strip_mnemonic() {
        assert_eq!(strip_mnemonic("&Open"), ("Open".to_string(), Some(0)));
        assert_eq!(strip_mnemonic("Save &As"), ("Save As".to_string(), Some(5)));
        assert_eq!(strip_mnemonic("Fish && Chips"), ("Fish & Chips".to_string(), None));
    }

    #[test]
    fn test_elide_fitting_text_unchanged() {
        let f = font();
        assert_eq!(elided_text(&f, "hello", ElideMode::Right, 50), "hello");
        assert_eq!(elided_text(&f, "hello", ElideMode::Middle, 100), "hello");
    }

    #[test]
    fn test_elide_is_idempotent() {
        let f = font();
        for mode in [ElideMode::Left, ElideMode::Right, ElideMode::Middle] {
            let once = elided_text(&f, "a rather long label", mode, 80);
            assert!(once.contains(ELLIPSIS));
            assert!(f.advance(&once) <= 80);
            assert_eq!(elided_text(&f, &once, mode, 80), once);
        }
    }

    #[test]
    fn test_elide_modes_keep_the_right_end() {
        let f = font();
        assert_eq!(elided_text(&f, "abcdefgh", ElideMode::Right, 50), "abcd\u{2026}");
        assert_eq!(elided_text(&f, "abcdefgh", ElideMode::Left, 50), "\u{2026}efgh");
        assert_eq!(elided_text(&f, "abcdefgh", ElideMode::Middle, 50), "ab\u{2026}gh");
        assert_eq!(elided_text(&f, "abcdefgh", ElideMode::Right, 5), "");
    }

    #[test]
    fn test_wrap_breaks_between_words() {
        let f = font();
        let lines = layout_lines(&f, "one two three", 80, true);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.trim_end()).collect();
        assert_eq!(texts, vec!["one two", "three"]);
    }

    #[test]
    fn test_view_item_layout_reports_last_visible_line() {
        let f = font();
        let layout = view_item_text_layout(&f, "aa bb cc dd", 20, Some(25), true);
        assert_eq!(layout.lines.len(), 2);
        assert_eq!(layout.last_visible_line, Some(1));
        assert_eq!(layout.height, 20);
    }

    #[test]
    fn test_calculate_elided_text_elides_last_visible_line() {
        let f = font();
        let (text, start) = calculate_elided_text(
            &f,
            "aa bb cc dd",
            Rect::new(0, 0, 30, 25),
            Alignment::VCENTER,
            ElideMode::Right,
            true,
            true,
            true,
        );
        // Soft-wrapped lines are joined back and re-wrapped at paint time.
        assert_eq!(text, "aa bb\u{2026}");
        assert_eq!(start, Some(Point::new(0, 2)));
    }

    #[test]
    fn test_calculate_elided_text_keeps_fitting_text() {
        let f = font();
        let (text, start) = calculate_elided_text(
            &f,
            "short",
            Rect::new(0, 0, 200, 20),
            Alignment::TOP,
            ElideMode::Middle,
            false,
            false,
            false,
        );
        assert_eq!(text, "short");
        assert_eq!(start, None);
    }
}
