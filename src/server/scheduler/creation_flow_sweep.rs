use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::creation_flow::CreationFlowService};

/// Starts the creation flow sweep.
///
/// Runs at minute 0 of every hour and marks every in-progress flow past its expiry
/// as abandoned. A failed run is logged and the next run proceeds as usual.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = sweep_expired_flows(&db).await {
                tracing::error!("Error abandoning expired creation flows: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Creation flow sweep scheduler started");

    Ok(())
}

async fn sweep_expired_flows(db: &DatabaseConnection) -> Result<(), AppError> {
    let abandoned = CreationFlowService::new(db).abandon_expired().await?;

    if abandoned > 0 {
        tracing::info!("Abandoned {} expired creation flows", abandoned);
    }

    Ok(())
}
