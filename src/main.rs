mod config;
mod entrypoint;
mod handler;
mod model;
mod service;

use anyhow::Context;
use config::Config;
use entrypoint::Entrypoint;
use handler::handler;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use model::CopyRequest;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    Entrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;

    let s3_client = service::s3::S3::new(aws_sdk_s3::Client::new(
        &aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .load()
            .await,
    ));
    tracing::trace!("initialized s3 client");

    let shared_s3_client = Arc::new(s3_client);

    let func = service_fn(move |event: LambdaEvent<CopyRequest>| {
        let s3_client = shared_s3_client.clone();
        let source_bucket = config.source_bucket.clone();
        let stage_bucket = config.stage_bucket.clone();

        async move { handler(s3_client, source_bucket, stage_bucket, event).await }
    });

    run(func).await
}
