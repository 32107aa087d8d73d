use tracing::instrument;

#[instrument(skip(client))]
pub async fn copy_object_version(
    client: &aws_sdk_s3::Client,
    copy_source: &str,
    destination_bucket: &str,
    destination_key: &str,
) -> anyhow::Result<()> {
    client
        .copy_object()
        .copy_source(copy_source)
        .bucket(destination_bucket)
        .key(destination_key)
        .send()
        .await?;

    Ok(())
}
