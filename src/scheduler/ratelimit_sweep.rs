use std::time::Instant;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::ratelimit::RatelimitService, shutdown::Shutdown};

/// Runs the ratelimit sweep until shutdown
///
/// Every minute, drops the ratelimit buckets whose window has ended so users who stopped
/// issuing commands do not stay in memory.
///
/// # Arguments
/// - `ratelimit`: Ratelimit state shared with the ratelimit precondition
/// - `shutdown`: Stops the scheduler when triggered
pub async fn start_scheduler(
    ratelimit: RatelimitService,
    shutdown: Shutdown,
) -> Result<(), AppError> {
    let mut scheduler = JobScheduler::new().await?;

    let job_ratelimit = ratelimit.clone();

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let ratelimit = job_ratelimit.clone();

        Box::pin(async move {
            let purged = ratelimit.purge_expired(Instant::now()).await;
            if purged > 0 {
                tracing::debug!(
                    "Purged {} expired ratelimit buckets, {} still tracked",
                    purged,
                    ratelimit.tracked_users().await
                );
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Ratelimit sweep scheduler started");

    shutdown.cancelled().await;
    scheduler.shutdown().await?;

    tracing::info!("Ratelimit sweep scheduler stopped");

    Ok(())
}
