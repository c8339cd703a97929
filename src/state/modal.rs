//! Modal dialog state for the UI.

/// Overlay currently drawn above the main screen.
///
/// The selected record itself lives in `AppState::detail`; this enum only
/// records which overlay is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Country detail overlay for `AppState::detail`.
    CountryDetail,
    /// Key binding reference.
    Help,
}

impl Modal {
    /// Whether any overlay is open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::None)
    }
}
