use ratatui::style::Color;

/// What: Strip trailing `// ...` and `# ...` comments from a config value.
///
/// Details:
/// - Markers only count at the start or after whitespace, so URLs keep their `://`.
/// - A leading `#` is kept so hex colors such as `#1e1e2e` survive.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let mut prev_ws = true;
    for (i, ch) in s.char_indices() {
        let rest = &s[i..];
        if prev_ws && (rest.starts_with("//") || (i > 0 && ch == '#')) {
            return s[..i].trim();
        }
        prev_ws = ch.is_whitespace();
    }
    s.trim()
}

/// What: Split a config line into a normalized key and its value.
///
/// Output:
/// - `None` for blank lines, comments, and lines without `=`.
/// - Keys are lowercased with `.`, `-` and spaces mapped to `_`.
pub(crate) fn split_key_value(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val.trim())))
}

/// Interpret `true/1/yes/on` (case-insensitive) as `true`, everything else as `false`.
pub(crate) fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

/// What: Parse a color value.
///
/// Inputs:
/// - `s`: `#RRGGBB`, `RRGGBB`, or a decimal `R,G,B` triplet (0-255 each).
///
/// Output:
/// - `Some(Color::Rgb)` on success; `None` otherwise.
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = strip_inline_comment(s.trim());
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').collect();
    if let [r, g, b] = parts.as_slice() {
        let r = r.trim().parse::<u8>().ok()?;
        let g = g.trim().parse::<u8>().ok()?;
        let b = b.trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    None
}
