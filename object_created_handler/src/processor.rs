use async_trait::async_trait;
use lambda_runtime::tracing;

/// One object referenced by a notification record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub bucket: String,
    pub key: String,
}

/// The seam where per-object processing plugs in.
///
/// The handler owns iteration and error propagation; implementations of this
/// trait own what actually happens to each object (reading it back from the
/// bucket, transforming it, and so on).
#[async_trait]
pub trait ObjectProcessor: Send + Sync {
    async fn process(&self, object: &ObjectRef) -> anyhow::Result<()>;
}

/// Processor used while no real processing exists. Always succeeds.
pub struct NoopProcessor;

#[async_trait]
impl ObjectProcessor for NoopProcessor {
    async fn process(&self, object: &ObjectRef) -> anyhow::Result<()> {
        tracing::trace!(key = %object.key, "no processing configured for object");
        Ok(())
    }
}
