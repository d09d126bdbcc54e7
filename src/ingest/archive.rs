use std::io::{Cursor, Read};

use bytes::Bytes;
use zip::result::ZipError;
use zip::ZipArchive;

use super::error::IngestError;

/// The downloaded feed, opened in memory as a ZIP archive.
pub struct FeedArchive {
    zip: ZipArchive<Cursor<Bytes>>,
}

impl FeedArchive {
    /// Open the downloaded body; fails when it is not a valid ZIP.
    pub fn open(body: Bytes) -> Result<Self, IngestError> {
        let zip = ZipArchive::new(Cursor::new(body))?;
        Ok(Self { zip })
    }

    /// Names of all member files in the archive.
    pub fn member_names(&self) -> Vec<String> {
        self.zip.file_names().map(|s| s.to_string()).collect()
    }

    /// Decompress a member by name. `None` when the archive does not
    /// contain it; callers decide whether that is fatal.
    pub fn member_bytes(&mut self, name: &str) -> Result<Option<Vec<u8>>, IngestError> {
        match self.zip.by_name(name) {
            Ok(mut file) => {
                let mut buf = Vec::new();
                file.read_to_end(&mut buf)?;
                Ok(Some(buf))
            }
            Err(ZipError::FileNotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn zip_bytes(files: &[(&str, &str)]) -> Bytes {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in files {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        Bytes::from(writer.finish().unwrap().into_inner())
    }

    #[test]
    fn lists_member_names() {
        let body = zip_bytes(&[("agency.txt", "agency_id\n"), ("stops.txt", "stop_id\n")]);
        let archive = FeedArchive::open(body).unwrap();
        let mut names = archive.member_names();
        names.sort();
        assert_eq!(names, ["agency.txt", "stops.txt"]);
    }

    #[test]
    fn reads_member_content() {
        let body = zip_bytes(&[("agency.txt", "agency_id\nktmb\n")]);
        let mut archive = FeedArchive::open(body).unwrap();
        let bytes = archive.member_bytes("agency.txt").unwrap().unwrap();
        assert_eq!(bytes, b"agency_id\nktmb\n");
    }

    #[test]
    fn absent_member_is_none_not_error() {
        let body = zip_bytes(&[("agency.txt", "agency_id\n")]);
        let mut archive = FeedArchive::open(body).unwrap();
        assert!(archive.member_bytes("calendar.txt").unwrap().is_none());
    }

    #[test]
    fn invalid_archive_is_an_error() {
        let err = FeedArchive::open(Bytes::from_static(b"definitely not a zip")).unwrap_err();
        assert!(matches!(err, IngestError::Archive(_)));
    }
}
