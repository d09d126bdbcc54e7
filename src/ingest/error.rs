use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Feed download failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Feed download failed: HTTP {0}")]
    FetchStatus(reqwest::StatusCode),
    #[error("Feed is not a valid ZIP archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed CSV in {file}: {source}")]
    Csv {
        file: &'static str,
        source: csv::Error,
    },
    #[error("Schema application failed: {0}")]
    Schema(#[source] sqlx::Error),
    #[error("Database load failed: {0}")]
    Load(#[source] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_fetch_status() {
        let err = IngestError::FetchStatus(reqwest::StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "Feed download failed: HTTP 502 Bad Gateway");
    }

    #[test]
    fn error_display_schema() {
        let err = IngestError::Schema(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Schema application failed"));
    }

    #[test]
    fn error_from_zip_error() {
        let zip_err = zip::result::ZipError::InvalidArchive("not a zip".into());
        let err: IngestError = zip_err.into();
        assert!(matches!(err, IngestError::Archive(_)));
        assert!(err.to_string().contains("not a valid ZIP archive"));
    }

    #[test]
    fn error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let err: IngestError = io_err.into();
        assert!(matches!(err, IngestError::Io(_)));
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn error_display_csv() {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(b"a,b\nc\n" as &[u8]);
        let csv_err = rdr
            .records()
            .map(|r| r.err())
            .find(|e| e.is_some())
            .flatten()
            .expect("unbalanced record should error");
        let err = IngestError::Csv {
            file: "stops.txt",
            source: csv_err,
        };
        assert!(err.to_string().contains("stops.txt"));
    }
}
