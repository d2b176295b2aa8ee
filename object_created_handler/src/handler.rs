use std::sync::Arc;

use anyhow::Context;
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};
use serde_json::Value;

use crate::{
    model::{HandlerResponse, S3Notification},
    processor::{ObjectProcessor, ObjectRef},
};

/// Processes the s3 event
///
/// Any failure is logged once and then handed back to the runtime unchanged,
/// so the platform observes a failed invocation and applies its own retry
/// policy.
#[tracing::instrument(skip(processor, event))]
pub async fn handler(
    processor: Arc<dyn ObjectProcessor>,
    event: LambdaEvent<Value>,
) -> Result<HandlerResponse, Error> {
    match process_event(processor, event.payload).await {
        Ok(response) => Ok(response),
        Err(err) => {
            tracing::error!(error=?err, "failed to process s3 event");
            Err(err.into())
        }
    }
}

/// Walks the records of the notification in input order and hands each
/// referenced object to the processor.
#[tracing::instrument(skip_all)]
async fn process_event(
    processor: Arc<dyn ObjectProcessor>,
    payload: Value,
) -> anyhow::Result<HandlerResponse> {
    // The payload is deserialized here rather than by the runtime so a
    // malformed event surfaces as a handler error, not a runtime one.
    let notification: S3Notification =
        serde_json::from_value(payload).context("payload is not an s3 event notification")?;

    tracing::info!(
        "processing s3 records record_count={}",
        notification.records.len()
    );

    for record in notification.records {
        let bucket = record
            .s3
            .bucket
            .name
            .context("record is missing the bucket name")?;
        let key = record
            .s3
            .object
            .key
            .context("record is missing the object key")?;

        tracing::info!(bucket = %bucket, key = %key, "new object detected");

        processor
            .process(&ObjectRef { bucket, key })
            .await
            .context("could not process object")?;
    }

    Ok(HandlerResponse::success())
}
