use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
///
/// CJK characters and most emoji take two columns, combining marks zero.
///
/// ```
/// use shopnav::util::display_width;
///
/// assert_eq!(display_width("Books"), 5);
/// assert_eq!(display_width("本"), 2);
/// ```
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Truncates a string to at most `max_width` terminal columns.
///
/// Appends `...` when text is cut. Widths of three columns or fewer cannot fit
/// a character plus the ellipsis, so the prefix that fits is returned bare.
/// Returns `Cow::Borrowed` whenever the input already fits.
///
/// ```
/// use shopnav::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Books", 10), "Books");
/// assert_eq!(truncate_to_width("Home Appliances", 8), "Home ...");
/// assert_eq!(truncate_to_width("Books", 2), "Bo");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width <= ELLIPSIS_WIDTH {
        return Cow::Owned(take_columns(s, max_width).to_string());
    }
    let prefix = take_columns(s, max_width - ELLIPSIS_WIDTH);
    Cow::Owned(format!("{}{}", prefix, ELLIPSIS))
}

/// Longest prefix of `s` whose display width does not exceed `columns`.
fn take_columns(s: &str, columns: usize) -> &str {
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > columns {
            return &s[..idx];
        }
        used += w;
    }
    s
}

/// Makes server-provided text safe to draw as a single-line label.
///
/// Category names arrive from the network and end up painted directly into
/// the terminal, so:
///
/// - ANSI CSI sequences (`ESC [ ... final`) are dropped whole
/// - OSC sequences (`ESC ] ... BEL` or `ESC ] ... ESC \`) are dropped whole
/// - a bare ESC, DEL and C0/C1 control characters are dropped
/// - tab, newline and carriage return become a single space
///
/// Returns `Cow::Borrowed` for clean input.
pub fn sanitize_label(s: &str) -> Cow<'_, str> {
    if !s.chars().any(char::is_control) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\x1b' => match chars.peek() {
                Some('[') => {
                    chars.next();
                    for c in chars.by_ref() {
                        if ('\x40'..='\x7e').contains(&c) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    while let Some(c) = chars.next() {
                        if c == '\x07' {
                            break;
                        }
                        if c == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            },
            '\t' | '\n' | '\r' => {
                if !out.ends_with(' ') {
                    out.push(' ');
                }
            }
            c if c.is_control() => {}
            c => out.push(c),
        }
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_truncation() {
        assert_eq!(truncate_to_width("Hello World", 8), "Hello...");
        assert_eq!(truncate_to_width("Short", 10), "Short");
    }

    #[test]
    fn test_exact_fit_is_borrowed() {
        let result = truncate_to_width("12345", 5);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "12345");
    }

    #[test]
    fn test_cjk_truncation() {
        // 8 columns into 7: room for 4 columns of text plus the ellipsis
        assert_eq!(truncate_to_width("你好世界", 7), "你好...");
        // A wide char never gets split
        assert_eq!(truncate_to_width("你好世界", 6), "你...");
    }

    #[test]
    fn test_narrow_widths() {
        assert_eq!(truncate_to_width("Test", 0), "");
        assert_eq!(truncate_to_width("Testing", 1), "T");
        assert_eq!(truncate_to_width("Testing", 3), "Tes");
        assert_eq!(truncate_to_width("你好", 1), "");
        assert_eq!(truncate_to_width("Testing", 4), "T...");
    }

    #[test]
    fn test_sanitize_clean_label_borrowed() {
        let result = sanitize_label("Home & Kitchen");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "Home & Kitchen");
    }

    #[test]
    fn test_sanitize_strips_csi() {
        assert_eq!(sanitize_label("\x1b[1;31mSale\x1b[0m"), "Sale");
        assert_eq!(sanitize_label("up\x1b[2Adown"), "updown");
    }

    #[test]
    fn test_sanitize_strips_osc() {
        assert_eq!(sanitize_label("\x1b]0;pwned\x07Books"), "Books");
        assert_eq!(sanitize_label("\x1b]0;pwned\x1b\\Books"), "Books");
    }

    #[test]
    fn test_sanitize_flattens_whitespace_controls() {
        assert_eq!(sanitize_label("Toys\n\tGames"), "Toys Games");
    }

    #[test]
    fn test_sanitize_drops_other_controls() {
        assert_eq!(sanitize_label("a\x00b\x07c\x7fd\u{9b}e"), "abcde");
        assert_eq!(sanitize_label("bare\x1bescape"), "bareescape");
    }

    #[test]
    fn test_sanitize_keeps_unicode() {
        assert_eq!(sanitize_label("家電 \x1b[32m製品\x1b[0m"), "家電 製品");
    }
}
