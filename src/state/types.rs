//! Core value types used by the country directory state.

/// One mapped country shown in the table and in the detail overlay.
///
/// Every scalar field is a plain string; absent upstream values are stored as
/// empty strings by the mapping step, never as `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountryRecord {
    /// Position in the fetched list. Only unique within one snapshot.
    pub id: usize,
    /// Official name (`name.official`); primary sort and search key.
    pub name: String,
    /// Common name (`name.common`).
    pub native_name: String,
    /// ISO 3166-1 alpha-2 code.
    pub cca2: String,
    /// ISO 3166-1 alpha-3 code.
    pub cca3: String,
    /// International dialing prefix root (`idd.root`), possibly empty.
    pub calling_code: String,
    /// URL of the PNG flag image.
    pub flag_url: String,
    /// Alternate spellings in upstream order.
    pub alternate_names: Vec<String>,
}

impl CountryRecord {
    /// What: Return the stable identity of this record across fetches.
    ///
    /// Output:
    /// - The alpha-3 code; positional `id` values are reassigned on refresh and must not be
    ///   used to track a row between snapshots.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.cca3
    }

    /// What: Format the alternate names for display.
    ///
    /// Output:
    /// - Names joined with `", "`, or `"None"` when the list is empty.
    #[must_use]
    pub fn alternate_names_label(&self) -> String {
        if self.alternate_names.is_empty() {
            "None".to_string()
        } else {
            self.alternate_names.join(", ")
        }
    }
}

/// Table column a user can sort by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortColumn {
    /// Flag image URL.
    Flag,
    /// Official name.
    Name,
    /// Alpha-2 code.
    Cca2,
    /// Alpha-3 code.
    Cca3,
    /// Common name.
    NativeName,
    /// Alternate spellings.
    AlternateNames,
    /// Dialing prefix.
    CallingCode,
}

impl SortColumn {
    /// Every sortable column in on-screen order.
    pub const ALL: [Self; 7] = [
        Self::Flag,
        Self::Name,
        Self::Cca2,
        Self::Cca3,
        Self::NativeName,
        Self::AlternateNames,
        Self::CallingCode,
    ];

    /// Header label shown in the table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flag => "Flag",
            Self::Name => "Name",
            Self::Cca2 => "CCA2",
            Self::Cca3 => "CCA3",
            Self::NativeName => "Native Name",
            Self::AlternateNames => "Alternative Name",
            Self::CallingCode => "IDD",
        }
    }

    /// Return the string key used in settings files for this column.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::Name => "name",
            Self::Cca2 => "cca2",
            Self::Cca3 => "cca3",
            Self::NativeName => "native_name",
            Self::AlternateNames => "alternate_names",
            Self::CallingCode => "idd",
        }
    }

    /// Parse a column from its settings key or common aliases.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(SortColumn)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "flag" | "flags" => Some(Self::Flag),
            "name" | "official" => Some(Self::Name),
            "cca2" => Some(Self::Cca2),
            "cca3" => Some(Self::Cca3),
            "native_name" | "native" | "common" => Some(Self::NativeName),
            "alternate_names" | "alt" | "alt_spellings" => Some(Self::AlternateNames),
            "idd" | "calling_code" => Some(Self::CallingCode),
            _ => None,
        }
    }

    /// What: Map a digit key (`1`..`7`) to the column at that on-screen position.
    #[must_use]
    pub fn from_digit(ch: char) -> Option<Self> {
        let idx = ch.to_digit(10)? as usize;
        idx.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Direction applied to the active sort column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// Short arrow used next to the active header label.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }

    /// Parse `asc`/`desc` style values from settings.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }
}

/// Which pane currently receives keyboard input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    /// Search field receives text input.
    #[default]
    Search,
    /// Table receives navigation keys.
    Table,
}

/// Static screens reachable from the header navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Route {
    /// Country table and detail overlay.
    #[default]
    Home,
    /// Placeholder about screen.
    About,
}

/// Request for the full country list, sent from the UI to the fetch worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonic token used to discard stale answers.
    pub id: u64,
}

/// Answer from the fetch worker, tagged with the token of its request.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Token of the request this answers.
    pub id: u64,
    /// Mapped records, or the error text to log.
    pub result: Result<Vec<CountryRecord>, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: `SortColumn` config key mapping roundtrip and alias handling
    ///
    /// - Input: Every column key; a few aliases; an unknown key
    /// - Output: Roundtrip maps back to the same variant; None for unknown
    fn sort_column_config_roundtrip_and_aliases() {
        for col in SortColumn::ALL {
            assert_eq!(SortColumn::from_config_key(col.as_config_key()), Some(col));
        }
        assert_eq!(
            SortColumn::from_config_key("Common"),
            Some(SortColumn::NativeName)
        );
        assert_eq!(
            SortColumn::from_config_key("calling_code"),
            Some(SortColumn::CallingCode)
        );
        assert_eq!(SortColumn::from_config_key("view"), None);
    }

    #[test]
    /// What: Digit keys select the column at the matching on-screen position.
    fn sort_column_from_digit() {
        assert_eq!(SortColumn::from_digit('1'), Some(SortColumn::Flag));
        assert_eq!(SortColumn::from_digit('2'), Some(SortColumn::Name));
        assert_eq!(SortColumn::from_digit('7'), Some(SortColumn::CallingCode));
        assert_eq!(SortColumn::from_digit('0'), None);
        assert_eq!(SortColumn::from_digit('8'), None);
        assert_eq!(SortColumn::from_digit('x'), None);
    }

    #[test]
    /// What: Alternate names render joined or as "None".
    fn alternate_names_label_joins_or_none() {
        let mut rec = CountryRecord {
            alternate_names: vec!["TH".into(), "Siam".into()],
            ..Default::default()
        };
        assert_eq!(rec.alternate_names_label(), "TH, Siam");
        rec.alternate_names.clear();
        assert_eq!(rec.alternate_names_label(), "None");
    }
}
