use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::state::CountryRecord;
use crate::theme::theme;
use crate::ui::modals::common::render_overlay_box;

/// Title of the detail overlay.
pub const DETAIL_TITLE: &str = "Country Details";
/// Body shown when the overlay has no record.
pub const NO_DATA_TEXT: &str = "No data available";

/// What: Build the overlay body for `detail`.
///
/// Output:
/// - Label/value lines for flag, name, native name, IDD, CCA2, CCA3 and alternate names,
///   or a single "No data available" line.
pub fn detail_lines(detail: Option<&CountryRecord>) -> Vec<Line<'static>> {
    let th = theme();
    let Some(rec) = detail else {
        return vec![Line::from(Span::styled(
            NO_DATA_TEXT,
            Style::default().fg(th.subtext0),
        ))];
    };
    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(
                format!("{label:<19}"),
                Style::default().fg(th.overlay1).add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, Style::default().fg(th.text)),
        ])
    };
    vec![
        Line::from(Span::styled(
            rec.name.clone(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Flag", rec.flag_url.clone()),
        field("Name", rec.name.clone()),
        field("Native Name", rec.native_name.clone()),
        field("IDD", rec.calling_code.clone()),
        field("CCA2", rec.cca2.clone()),
        field("CCA3", rec.cca3.clone()),
        field("Alternative Names", rec.alternate_names_label()),
    ]
}

/// What: Render the detail overlay.
///
/// Output:
/// - `(box_rect, close_rect)` for mouse hit-testing.
pub fn render_detail(f: &mut Frame, area: Rect, detail: Option<&CountryRecord>) -> (Rect, Rect) {
    render_overlay_box(f, area, DETAIL_TITLE, detail_lines(detail), (84, 14))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    /// What: Without a record only "No data available" is shown.
    fn no_record_shows_placeholder() {
        assert_eq!(plain(&detail_lines(None)), vec![NO_DATA_TEXT.to_string()]);
    }

    #[test]
    /// What: Every field is listed; empty alternate names read "None".
    fn record_fields_are_listed() {
        let rec = CountryRecord {
            id: 1,
            name: "French Republic".into(),
            native_name: "République française".into(),
            cca2: "FR".into(),
            cca3: "FRA".into(),
            calling_code: "+3".into(),
            flag_url: "https://flagcdn.com/w320/fr.png".into(),
            alternate_names: Vec::new(),
        };
        let text = plain(&detail_lines(Some(&rec))).join("\n");
        assert!(text.contains("Native Name        République française"));
        assert!(text.contains("Alternative Names  None"));
        assert!(text.contains("IDD                +3"));
        assert!(text.contains("https://flagcdn.com/w320/fr.png"));
    }
}
