/// One located spreadsheet row, decomposed into aligned header/value columns.
///
/// `headers.len() == values.len()` always holds; `new` pads short rows with
/// empty strings and drops cells past the last header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRow {
    headers: Vec<String>,
    values: Vec<String>,
}

impl RemoteRow {
    pub fn new(headers: Vec<String>, mut values: Vec<String>) -> Self {
        values.resize(headers.len(), String::new());
        Self { headers, values }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Value of the first column whose trimmed header equals `header`.
    pub fn value_for(&self, header: &str) -> Option<&str> {
        let header = header.trim();
        self.headers
            .iter()
            .position(|candidate| candidate.trim() == header)
            .and_then(|idx| self.values.get(idx))
            .map(String::as_str)
    }
}
