use serde::Deserialize;

/// Invocation payload naming the object version to stage.
///
/// The source bucket is not part of the payload; it comes from process
/// configuration and the destination key is the source key unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct CopyRequest {
    /// Key of the object within the source bucket
    pub source_object: String,
    /// Version identifier of the immutable version to copy
    pub source_version: String,
}

impl CopyRequest {
    /// Fully qualified copy source for the S3 `CopyObject` call, in the
    /// format `{bucket}/{key}?versionId={version}`.
    pub fn copy_source(&self, source_bucket: &str) -> String {
        format!(
            "{}/{}?versionId={}",
            source_bucket, self.source_object, self.source_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_compose_the_copy_source() {
        let request = CopyRequest {
            source_object: "a/b.txt".to_string(),
            source_version: "v123".to_string(),
        };

        assert_eq!(request.copy_source("src"), "src/a/b.txt?versionId=v123");
    }

    #[test]
    fn it_should_not_encode_the_key() {
        let request = CopyRequest {
            source_object: "uploads/report 2024.csv".to_string(),
            source_version: "3/L4kqtJlcpXroDTDmJ+rmSpXd3dIbrHY".to_string(),
        };

        assert_eq!(
            request.copy_source("my-source"),
            "my-source/uploads/report 2024.csv?versionId=3/L4kqtJlcpXroDTDmJ+rmSpXd3dIbrHY"
        );
    }

    #[test]
    fn it_should_deserialize_the_invocation_payload() {
        let request: CopyRequest = serde_json::from_str(
            r#"{"source_object": "a/b.txt", "source_version": "v123"}"#,
        )
        .unwrap();

        assert_eq!(request.source_object, "a/b.txt");
        assert_eq!(request.source_version, "v123");
    }
}
