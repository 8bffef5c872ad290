use tracing::{info, warn};

use crate::domain::entities::remote_row::RemoteRow;
use crate::error::SheetError;
use crate::infra::sheets::csv_row::locate_row;
use crate::usecase::ports::sheet::SheetSource;

/// Fetches one user's flag row. Every failure comes back as `None`.
pub struct RowService<S> {
    source: S,
}

impl<S: SheetSource> RowService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn load_row(&self, user_key: &str) -> Option<RemoteRow> {
        let user_key = user_key.trim();
        if user_key.is_empty() {
            return None;
        }

        match self.try_load_row(user_key).await {
            Ok(row) => {
                info!(user_key, columns = row.headers().len(), "located sheet row");
                Some(row)
            }
            Err(SheetError::RowNotFound(_)) => {
                info!(user_key, "no sheet row for user key");
                None
            }
            Err(error) => {
                warn!(user_key, %error, "sheet row unavailable");
                None
            }
        }
    }

    async fn try_load_row(&self, user_key: &str) -> Result<RemoteRow, SheetError> {
        let body = self.source.fetch_csv().await?;
        locate_row(&body, user_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FixedSource {
        body: Result<&'static str, u16>,
        calls: Cell<usize>,
    }

    impl FixedSource {
        fn ok(body: &'static str) -> Self {
            Self {
                body: Ok(body),
                calls: Cell::new(0),
            }
        }

        fn status(code: u16) -> Self {
            Self {
                body: Err(code),
                calls: Cell::new(0),
            }
        }
    }

    impl SheetSource for &FixedSource {
        async fn fetch_csv(&self) -> Result<String, SheetError> {
            self.calls.set(self.calls.get() + 1);
            self.body
                .map(str::to_string)
                .map_err(SheetError::Status)
        }
    }

    const SHEET: &str = "id,InfoCard_health_44,InfoCard_health_45\nu1,FALSE,yes\n";

    #[tokio::test]
    async fn found_row_is_returned() {
        let source = FixedSource::ok(SHEET);
        let service = RowService::new(&source);

        let row = service.load_row("u1").await.expect("row should load");

        assert_eq!(row.value_for("InfoCard_health_45"), Some("yes"));
        assert_eq!(source.calls.get(), 1);
    }

    #[tokio::test]
    async fn every_failure_collapses_to_none() {
        for source in [
            FixedSource::status(500),
            FixedSource::ok(""),
            FixedSource::ok("id,InfoCard_health_44\n"),
            FixedSource::ok(SHEET),
        ] {
            let service = RowService::new(&source);
            assert!(service.load_row("u3").await.is_none());
        }
    }

    #[tokio::test]
    async fn blank_key_skips_the_fetch() {
        let source = FixedSource::ok(SHEET);
        let service = RowService::new(&source);

        assert!(service.load_row("   ").await.is_none());
        assert_eq!(source.calls.get(), 0);
    }

    #[tokio::test]
    async fn each_call_fetches_again() {
        let source = FixedSource::ok(SHEET);
        let service = RowService::new(&source);

        service.load_row("u1").await;
        service.load_row("u1").await;

        assert_eq!(source.calls.get(), 2);
    }
}
