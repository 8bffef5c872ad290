use crate::error::SheetError;

/// Anything that can hand back the raw CSV export of the flags sheet.
#[allow(async_fn_in_trait)]
pub trait SheetSource {
    async fn fetch_csv(&self) -> Result<String, SheetError>;
}
