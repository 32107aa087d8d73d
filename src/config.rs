use anyhow::Context;

pub use crate::entrypoint::Environment;

#[derive(Debug, Clone)]
pub struct Config {
    /// The region the S3 client should talk to.
    pub region: String,

    /// The bucket holding the original uploaded objects.
    pub source_bucket: String,

    /// The bucket staged copies are written to.
    pub stage_bucket: String,

    /// The environment we are in
    #[allow(dead_code)]
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let region = std::env::var("REGION").context("REGION must be provided")?;

        let source_bucket =
            std::env::var("SOURCE_BUCKET").context("SOURCE_BUCKET must be provided")?;

        let stage_bucket = std::env::var("STAGE_BUCKET").context("STAGE_BUCKET must be provided")?;

        let environment = Environment::new_or_prod();

        Ok(Config {
            region,
            source_bucket,
            stage_bucket,
            environment,
        })
    }
}
