// src/export/layout.rs
// =============================================================================
// Where things go on the sheet.
//
// Coordinates are zero-based (row, column) pairs as rust_xlsxwriter expects
// them. Row 0 is the header, data rows are 1..=data_rows.
// =============================================================================

pub const HEADERS: [&str; 9] = [
    "Name",
    "Description",
    "Language",
    "Stars",
    "Forks",
    "Created At",
    "Last Updated",
    "URL",
    "Days Since Update",
];

/// The derived column always comes last.
pub const DAYS_SINCE_UPDATE_COL: u16 = HEADERS.len() as u16 - 1;

/// Excel refuses sheet names longer than this.
const MAX_SHEET_NAME: usize = 31;
const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Rows between the last table row and the first image.
const IMAGE_OFFSET: u32 = 4;
/// Rows reserved for each embedded image.
const IMAGE_SPACING: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub data_rows: u32,
}

impl SheetLayout {
    pub fn new(data_rows: usize) -> Self {
        Self {
            data_rows: u32::try_from(data_rows).unwrap_or(u32::MAX),
        }
    }

    pub fn last_row(&self) -> u32 {
        self.data_rows
    }

    pub fn last_col(&self) -> u16 {
        DAYS_SINCE_UPDATE_COL
    }

    /// Header row to last data row, every column: the autofilter range.
    pub fn table_range(&self) -> (u32, u16, u32, u16) {
        (0, 0, self.last_row(), self.last_col())
    }

    /// Data cells of the days-since-update column.
    pub fn highlight_range(&self) -> (u32, u16, u32, u16) {
        (1, DAYS_SINCE_UPDATE_COL, self.last_row(), DAYS_SINCE_UPDATE_COL)
    }

    /// First row, leaving one empty column after the table.
    pub fn timestamp_cell(&self) -> (u32, u16) {
        (0, self.last_col() + 2)
    }

    /// Row the `index`-th embedded image is anchored at (column A).
    pub fn image_row(&self, index: u32) -> u32 {
        self.last_row() + IMAGE_OFFSET + IMAGE_SPACING * index
    }
}

// Builds "<username> Repositories", made acceptable to Excel
//
// Forbidden characters become '_' and the name is cut to 31 characters.
pub fn sheet_name(username: &str) -> String {
    format!("{} Repositories", username)
        .chars()
        .map(|c| if FORBIDDEN_SHEET_CHARS.contains(&c) { '_' } else { c })
        .take(MAX_SHEET_NAME)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_name() {
        assert_eq!(sheet_name("octocat"), "octocat Repositories");
        assert_eq!(sheet_name("a/b:c"), "a_b_c Repositories");
    }

    #[test]
    fn test_sheet_name_is_truncated() {
        let name = sheet_name("a-very-long-github-username-indeed");
        assert_eq!(name.chars().count(), 31);
        assert!(name.starts_with("a-very-long-github-username"));
    }

    #[test]
    fn test_days_since_update_is_last_column() {
        assert_eq!(HEADERS[DAYS_SINCE_UPDATE_COL as usize], "Days Since Update");
    }

    #[test]
    fn test_layout_for_one_row() {
        let layout = SheetLayout::new(1);
        assert_eq!(layout.table_range(), (0, 0, 1, 8));
        assert_eq!(layout.highlight_range(), (1, 8, 1, 8));
        assert_eq!(layout.timestamp_cell(), (0, 10));
    }

    #[test]
    fn test_image_rows_are_spaced() {
        let layout = SheetLayout::new(12);
        assert_eq!(layout.image_row(0), 16);
        assert_eq!(layout.image_row(1), 46);
        assert_eq!(layout.image_row(2), 76);
    }
}
