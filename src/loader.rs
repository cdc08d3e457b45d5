//! Source file loading
//!
//! Parses the delimited source into a complete [`Snapshot`]. Loading is
//! all-or-nothing: any read or parse failure propagates and no partially
//! built snapshot escapes.

use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::models::Record;
use crate::store::Snapshot;

/// Read and normalize the source file into a fresh snapshot.
///
/// The first row is the header. Record lengths are flexible: short rows
/// leave their trailing fields absent, values beyond the header count are
/// ignored. The loader never touches the active store.
pub fn load(path: &Path) -> Result<Snapshot> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let pairs: Vec<(&str, &str)> = headers.iter().zip(row.iter()).collect();
        records.push(Record::from_row(&pairs));
    }

    Ok(Snapshot::new(records))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::PartdexError;
    use crate::models::FieldValue;

    fn write_source(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_basic_source() {
        let source = write_source(
            "serial,name,price,qty\nABC-1,Widget,10.5,3\nXYZ-2,Gadget,4,10\n",
        );
        let snapshot = load(source.path()).unwrap();

        assert_eq!(snapshot.len(), 2);
        let widget = snapshot.get("abc-1").unwrap();
        assert_eq!(widget.name(), Some("Widget"));
        assert_eq!(widget.price(), Some(&FieldValue::Number(10.5)));
        assert_eq!(widget.qty(), Some(&FieldValue::Number(3.0)));
    }

    #[test]
    fn test_load_estonian_headers() {
        let source = write_source("Seriaalinumber,Nimi,hind\nEE-9,Vidin,2.50\n");
        let snapshot = load(source.path()).unwrap();

        let record = snapshot.get("ee-9").unwrap();
        assert_eq!(record.serial(), Some("EE-9"));
        assert_eq!(record.name(), Some("Vidin"));
        assert_eq!(record.price(), Some(&FieldValue::Number(2.5)));
    }

    #[test]
    fn test_load_trims_cells() {
        let source = write_source("serial , name\n  A1 ,  Widget \n");
        let snapshot = load(source.path()).unwrap();
        let record = snapshot.get("a1").unwrap();
        assert_eq!(record.serial(), Some("A1"));
        assert_eq!(record.name(), Some("Widget"));
    }

    #[test]
    fn test_load_flexible_row_lengths() {
        let source = write_source("serial,name,price\nA1,Widget\nB2,Gadget,7,EXTRA\n");
        let snapshot = load(source.path()).unwrap();

        let short = snapshot.get("a1").unwrap();
        assert_eq!(short.name(), Some("Widget"));
        assert_eq!(short.price(), None);

        let long = snapshot.get("b2").unwrap();
        assert_eq!(long.price(), Some(&FieldValue::Number(7.0)));
    }

    #[test]
    fn test_load_headers_only() {
        let source = write_source("serial,name\n");
        let snapshot = load(source.path()).unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load(Path::new("/nonexistent/LE.txt")).unwrap_err();
        assert!(matches!(err, PartdexError::Io(_)));
        assert!(err.is_load_failure());
    }

    #[test]
    fn test_invalid_utf8_is_csv_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"serial,name\n\xff\xfe,broken\n").unwrap();
        file.flush().unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, PartdexError::Csv(_)));
        assert!(err.is_load_failure());
    }
}
