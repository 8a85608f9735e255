//! Sources for the static introspection document

use crate::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Token that routes a query to the introspection document
pub const INTROSPECTION_MARKER: &str = "__schema";

/// Produces the introspection document served for `__schema` queries
pub trait IntrospectionSource: Send + Sync {
    /// Load the document
    fn load(&self) -> Result<Value>;
}

/// Document read from a JSON file on every request
///
/// Edits to the file are picked up without a restart.
#[derive(Debug, Clone)]
pub struct FileIntrospection {
    path: PathBuf,
}

impl FileIntrospection {
    /// Source backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IntrospectionSource for FileIntrospection {
    fn load(&self) -> Result<Value> {
        let raw = std::fs::read(&self.path)?;
        let document = serde_json::from_slice(&raw)?;
        tracing::debug!(path = %self.path.display(), "loaded introspection document");
        Ok(document)
    }
}

/// Document held in memory
#[derive(Debug, Clone)]
pub struct StaticIntrospection(Value);

impl StaticIntrospection {
    /// Source that always returns `document`
    pub fn new(document: Value) -> Self {
        Self(document)
    }
}

impl IntrospectionSource for StaticIntrospection {
    fn load(&self) -> Result<Value> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_file_source_reads_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"__schema": {{"queryType": {{"name": "Query"}}}}}}"#).unwrap();

        let source = FileIntrospection::new(file.path());
        assert_eq!(
            source.load().unwrap(),
            json!({"__schema": {"queryType": {"name": "Query"}}})
        );
    }

    #[test]
    fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileIntrospection::new(dir.path().join("introspection.json"));
        assert!(matches!(source.load(), Err(Error::Io(_))));
    }

    #[test]
    fn test_file_source_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let source = FileIntrospection::new(file.path());
        assert!(matches!(source.load(), Err(Error::Json(_))));
    }

    #[test]
    fn test_static_source() {
        let source = StaticIntrospection::new(json!({"types": []}));
        assert_eq!(source.load().unwrap(), json!({"types": []}));
    }
}
