/// One HTML `<table>` as plain strings, before any typing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTable {
    /// Column names, from the first all-`<th>` row.
    pub headers: Vec<String>,
    /// Each data row, one cleaned string per header column.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Position of the column named `name`, ignoring case.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
    }

    pub fn has_columns(&self, names: &[&str]) -> bool {
        names.iter().all(|n| self.column(n).is_some())
    }
}
