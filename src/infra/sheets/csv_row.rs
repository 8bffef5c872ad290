use csv::ReaderBuilder;

use crate::domain::entities::remote_row::RemoteRow;
use crate::error::SheetError;

/// Trims a cell and strips one pair of wrapping quotes left behind by
/// exports that pad quoted fields with whitespace.
pub fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Tokenizes a whole export. Quoted commas and quoted newlines stay inside
/// their field; rows may have differing lengths.
pub fn parse_records(body: &str) -> Result<Vec<Vec<String>>, SheetError> {
    let body = body.trim_start_matches('\u{feff}');
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        records.push(record.iter().map(clean_field).collect());
    }
    Ok(records)
}

/// Finds the first data row whose first cell equals `user_key`.
pub fn locate_row(body: &str, user_key: &str) -> Result<RemoteRow, SheetError> {
    if body.trim().is_empty() {
        return Err(SheetError::EmptyBody);
    }

    let records = parse_records(body)?;
    if records.len() < 2 {
        return Err(SheetError::ShortDocument);
    }

    // Only sheet cells get their quotes stripped; the requested key is
    // compared as typed, apart from surrounding whitespace.
    let user_key = user_key.trim();
    let mut records = records.into_iter();
    let headers = records.next().unwrap_or_default();
    records
        .find(|record| record.first().is_some_and(|first| first == user_key))
        .map(|values| RemoteRow::new(headers, values))
        .ok_or_else(|| SheetError::RowNotFound(user_key.to_string()))
}
