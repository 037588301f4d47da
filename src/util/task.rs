use futures::FutureExt;
use std::panic::AssertUnwindSafe;

/// Runs a future to completion, converting a panic into `Err(message)`.
///
/// Tokio already isolates panics in spawned tasks, but the task then vanishes
/// without a trace. Wrapping the body lets the task report the failure back
/// over its channel instead.
///
/// ```ignore
/// tokio::spawn(async move {
///     match catch_task_panic(client.fetch_categories(window)).await {
///         Ok(result) => send(result),
///         Err(panic_msg) => send(Err(FetchError::Panicked(panic_msg))),
///     }
/// });
/// ```
pub async fn catch_task_panic<F, T>(future: F) -> Result<T, String>
where
    F: std::future::Future<Output = T>,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(|panic| {
            if let Some(s) = panic.downcast_ref::<&'static str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic payload".to_string()
            }
        })
}
