mod handler;
mod model;
mod processor;

use std::sync::Arc;

use handler::handler;
use lambda_entrypoint::Entrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};

use crate::processor::{NoopProcessor, ObjectProcessor};

#[tokio::main]
async fn main() -> Result<(), Error> {
    Entrypoint::default().init();

    tracing::trace!("initiating lambda");

    // Business logic is supplied here once it exists. Until then every
    // notified object goes through the no-op processor.
    let processor: Arc<dyn ObjectProcessor> = Arc::new(NoopProcessor);

    tracing::trace!("initialized processor");

    let func = service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let processor = processor.clone();

        async move { handler(processor, event).await }
    });

    run(func).await
}
