mod copy;

use anyhow::Result;
use aws_sdk_s3 as s3;
use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Inner S3 client
    inner: s3::Client,
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub fn new(inner: s3::Client) -> Self {
        Self { inner }
    }

    /// Copies one object version into the destination bucket at the
    /// provided key. The copy source must already carry the `versionId`
    /// query parameter.
    #[tracing::instrument(skip(self))]
    pub async fn copy_object_version(
        &self,
        copy_source: &str,
        destination_bucket: &str,
        destination_key: &str,
    ) -> Result<()> {
        copy::copy_object_version(&self.inner, copy_source, destination_bucket, destination_key)
            .await
    }
}
