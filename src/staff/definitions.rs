// src/staff/definitions.rs

/// Column headers the views branch on. The sheet schema is not enforced
/// anywhere; every lookup has to tolerate an absent column.
pub const COL_NAME: &str = "氏名";
pub const COL_FURIGANA: &str = "フリガナ";
pub const COL_STAFF_ID: &str = "職員ＩＤ";
pub const COL_ROLE: &str = "役職";
pub const COL_OCCUPATION: &str = "職種";

/// Columns eligible for the staff-list search, when present.
pub const SEARCH_CANDIDATE_COLUMNS: [&str; 3] = [COL_NAME, COL_FURIGANA, COL_STAFF_ID];

/// A column holds a document link when its header contains one of these.
/// The match is case-sensitive ("pdf" does not qualify).
pub const DOCUMENT_COLUMN_MARKERS: [&str; 2] = ["PDF", "URL"];

/// One snapshot of the roster worksheet: headers from the first row, every
/// later row padded or truncated to the header width. Replaced wholesale on
/// refresh, never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaffTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl StaffTable {
    /// Builds a table from raw worksheet rows. The first row is the header;
    /// a worksheet without a header (or with an empty one) yields an empty
    /// table.
    pub fn from_values(mut values: Vec<Vec<String>>) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let columns = values.remove(0);
        if columns.is_empty() {
            return Self::default();
        }
        let width = columns.len();
        let rows = values
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Empty means no data rows; a header alone does not count as data.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Number of distinct values in a column, or None when the column is
    /// absent. Blank cells count as a value of their own, matching the
    /// spreadsheet's notion of "what is in this column".
    pub fn distinct_count(&self, column: &str) -> Option<usize> {
        self.column_index(column)?;
        Some(self.value_counts(column).len())
    }

    /// Per-value frequency of a column, in first-occurrence order. Empty
    /// when the column is absent.
    pub fn value_counts(&self, column: &str) -> Vec<(String, usize)> {
        let Some(idx) = self.column_index(column) else {
            return Vec::new();
        };
        let mut counts: Vec<(String, usize)> = Vec::new();
        for row in &self.rows {
            let Some(value) = row.get(idx) else { continue };
            if let Some(entry) = counts.iter_mut().find(|(v, _)| v == value) {
                entry.1 += 1;
            } else {
                counts.push((value.clone(), 1));
            }
        }
        counts
    }

    /// Indices of rows matching the search query, in original order.
    ///
    /// An empty query matches everything. Otherwise a row matches when any
    /// of the present candidate columns contains the query as a
    /// case-sensitive substring. If none of the candidate columns exist the
    /// search silently becomes a no-op and the full table is returned.
    pub fn search_matches(&self, query: &str) -> Vec<usize> {
        if query.is_empty() {
            return (0..self.rows.len()).collect();
        }
        let candidates: Vec<usize> = SEARCH_CANDIDATE_COLUMNS
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect();
        if candidates.is_empty() {
            return (0..self.rows.len()).collect();
        }
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                candidates
                    .iter()
                    .any(|&c| row.get(c).is_some_and(|cell| cell.contains(query)))
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Distinct non-blank values of a column in first-occurrence order.
    /// Used for the employee dropdown.
    pub fn distinct_values(&self, column: &str) -> Vec<String> {
        let Some(idx) = self.column_index(column) else {
            return Vec::new();
        };
        let mut seen: Vec<String> = Vec::new();
        for row in &self.rows {
            let Some(value) = row.get(idx) else { continue };
            if value.is_empty() || seen.iter().any(|v| v == value) {
                continue;
            }
            seen.push(value.clone());
        }
        seen
    }

    /// First row whose cell in `column` equals `value`. Names are not
    /// unique; ties resolve to the earliest row.
    pub fn find_first(&self, column: &str, value: &str) -> Option<&[String]> {
        let idx = self.column_index(column)?;
        self.rows
            .iter()
            .find(|row| row.get(idx).map(String::as_str) == Some(value))
            .map(|row| row.as_slice())
    }

    /// Indices of columns whose header marks them as document links.
    pub fn document_columns(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, name)| DOCUMENT_COLUMN_MARKERS.iter().any(|m| name.contains(m)))
            .map(|(idx, _)| idx)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn roster() -> StaffTable {
        StaffTable::from_values(owned(&[
            &["氏名", "フリガナ", "職員ＩＤ", "役職", "職種", "資格証PDF"],
            &["佐藤太郎", "サトウタロウ", "S-001", "主任", "看護師", "https://drive.example/a"],
            &["鈴木一郎", "スズキイチロウ", "S-002", "一般", "介護士", ""],
            &["佐藤花子", "サトウハナコ", "S-003", "一般", "看護師", "未提出"],
        ]))
    }

    #[test]
    fn header_row_becomes_columns() {
        let table = roster();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.columns()[0], "氏名");
        assert!(!table.is_empty());
    }

    #[test]
    fn ragged_rows_are_padded_and_truncated() {
        let table = StaffTable::from_values(owned(&[
            &["氏名", "職種"],
            &["佐藤太郎"],
            &["鈴木一郎", "介護士", "余分"],
        ]));
        assert_eq!(table.rows()[0], vec!["佐藤太郎".to_string(), String::new()]);
        assert_eq!(table.rows()[1], vec!["鈴木一郎".to_string(), "介護士".to_string()]);
    }

    #[test]
    fn header_only_or_nothing_is_empty() {
        assert!(StaffTable::from_values(Vec::new()).is_empty());
        assert!(StaffTable::from_values(owned(&[&["氏名"]])).is_empty());
        assert_eq!(StaffTable::from_values(owned(&[&["氏名"]])).row_count(), 0);
    }

    #[test]
    fn empty_query_returns_full_table_in_order() {
        let table = roster();
        assert_eq!(table.search_matches(""), vec![0, 1, 2]);
    }

    #[test]
    fn search_is_a_case_sensitive_substring_over_candidate_columns() {
        let table = roster();
        // Name column.
        assert_eq!(table.search_matches("佐藤"), vec![0, 2]);
        // Furigana column.
        assert_eq!(table.search_matches("イチロウ"), vec![1]);
        // Staff ID column.
        assert_eq!(table.search_matches("S-003"), vec![2]);
        // Occupation is not a candidate column.
        assert!(table.search_matches("看護師").is_empty());
        // No fuzzy or case-insensitive matching.
        assert!(table.search_matches("s-003").is_empty());
    }

    #[test]
    fn search_output_is_sound_and_complete() {
        let table = roster();
        let query = "佐藤";
        let matches = table.search_matches(query);
        let candidates: Vec<usize> = SEARCH_CANDIDATE_COLUMNS
            .iter()
            .filter_map(|c| table.column_index(c))
            .collect();
        for (idx, row) in table.rows().iter().enumerate() {
            let should_match = candidates.iter().any(|&c| row[c].contains(query));
            assert_eq!(matches.contains(&idx), should_match);
        }
    }

    #[test]
    fn search_without_candidate_columns_is_a_no_op() {
        let table = StaffTable::from_values(owned(&[
            &["部署", "内線"],
            &["総務", "101"],
            &["経理", "102"],
        ]));
        assert_eq!(table.search_matches("総務"), vec![0, 1]);
        assert_eq!(table.search_matches("存在しない"), vec![0, 1]);
    }

    #[test]
    fn distinct_count_follows_column_presence() {
        let table = roster();
        assert_eq!(table.distinct_count(COL_ROLE), Some(2));
        assert_eq!(table.distinct_count("存在しない列"), None);
    }

    #[test]
    fn value_counts_keep_first_occurrence_order() {
        let table = roster();
        assert_eq!(
            table.value_counts(COL_OCCUPATION),
            vec![("看護師".to_string(), 2), ("介護士".to_string(), 1)]
        );
        assert!(table.value_counts("存在しない列").is_empty());
    }

    #[test]
    fn distinct_values_drop_blanks_and_duplicates() {
        let table = StaffTable::from_values(owned(&[
            &["氏名"],
            &["佐藤太郎"],
            &[""],
            &["鈴木一郎"],
            &["佐藤太郎"],
        ]));
        assert_eq!(
            table.distinct_values(COL_NAME),
            vec!["佐藤太郎".to_string(), "鈴木一郎".to_string()]
        );
    }

    #[test]
    fn find_first_takes_the_earliest_of_duplicate_names() {
        let table = StaffTable::from_values(owned(&[
            &["氏名", "職員ＩＤ"],
            &["佐藤太郎", "S-001"],
            &["佐藤太郎", "S-009"],
        ]));
        let record = table.find_first(COL_NAME, "佐藤太郎").unwrap();
        assert_eq!(record[1], "S-001");
        assert!(table.find_first(COL_NAME, "山田").is_none());
    }

    #[test]
    fn document_columns_match_markers_case_sensitively() {
        let table = StaffTable::from_values(owned(&[
            &["氏名", "資格証PDF", "健康診断URL", "pdfメモ"],
            &["佐藤太郎", "", "", ""],
        ]));
        assert_eq!(table.document_columns(), vec![1, 2]);
    }
}
