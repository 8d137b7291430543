use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("an empty filename was specified")]
    EmptyFilename,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Open the specified file and return the query text. It's the caller's
/// responsibility to verify the file contains a valid GraphQL query.
pub fn load_query<P: AsRef<Path>>(filename: P) -> Result<String, QueryError> {
    let path = filename.as_ref();
    if path.as_os_str().is_empty() {
        return Err(QueryError::EmptyFilename);
    }

    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_a_query_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ shop {{ name }} }}").unwrap();

        let q = load_query(file.path()).unwrap();
        assert_eq!(q, "{ shop { name } }");
    }

    #[test]
    fn empty_filename_is_rejected() {
        let err = load_query("").unwrap_err();
        assert!(matches!(err, QueryError::EmptyFilename));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_query("nonexistent-file.graphql").unwrap_err();
        assert!(matches!(err, QueryError::Io(_)));
    }
}
