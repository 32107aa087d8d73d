use crate::{model::CopyRequest, service};
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};
use std::sync::Arc;

/// The fixed acknowledgment returned to the invoker. It is returned for
/// every invocation, whether or not the copy itself succeeds; the copy
/// outcome is only observable in the logs.
pub const COMPLETION_SIGNAL: &str = "DONE";

/// Handles one copy request: dispatches the staging copy as a background
/// task and acknowledges the caller immediately.
#[tracing::instrument(skip(s3_client))]
pub async fn handler(
    s3_client: Arc<service::s3::S3>,
    source_bucket: String,
    stage_bucket: String,
    event: LambdaEvent<CopyRequest>,
) -> Result<&'static str, Error> {
    tracing::trace!("processing copy request");

    let request = event.payload;
    let copy_source = request.copy_source(&source_bucket);

    // The invoker is not awaiting the copy; its result never reaches the
    // response channel.
    tokio::spawn(stage_object(
        s3_client,
        copy_source,
        stage_bucket,
        request.source_object,
    ));

    Ok(COMPLETION_SIGNAL)
}

/// Performs the actual copy and routes the outcome to the log stream.
/// Errors are absorbed here; nothing propagates past this point.
pub(crate) async fn stage_object(
    s3_client: Arc<service::s3::S3>,
    copy_source: String,
    stage_bucket: String,
    destination_key: String,
) {
    match s3_client
        .copy_object_version(&copy_source, &stage_bucket, &destination_key)
        .await
    {
        Ok(()) => {
            tracing::info!(copy_source, destination_key, "[SUCCESS]");
        }
        Err(e) => {
            tracing::error!(error=?e, copy_source, destination_key, "[ERROR]: {e:#}");
        }
    }
}
