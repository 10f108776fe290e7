use serenity::async_trait;
use std::time::{Duration, Instant};

use crate::{
    command::{
        context::InvocationContext,
        precondition::{Precondition, PreconditionResult},
    },
    error::AppError,
    service::ratelimit::RatelimitService,
};

/// Denies invokers who exceeded their command budget for the current window.
pub struct Ratelimit {
    service: RatelimitService,
}

impl Ratelimit {
    pub fn new(service: RatelimitService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Precondition for Ratelimit {
    fn name(&self) -> &'static str {
        "ratelimit"
    }

    async fn check(&self, ctx: &InvocationContext) -> Result<PreconditionResult, AppError> {
        match self.service.hit(ctx.author_id, Instant::now()).await {
            None => Ok(PreconditionResult::Allowed),
            Some(retry_after) => Ok(PreconditionResult::denied(format!(
                "Slow down! Try again in {}s.",
                whole_seconds(retry_after)
            ))),
        }
    }
}

/// Rounds up to whole seconds, never reporting zero.
fn whole_seconds(duration: Duration) -> u64 {
    let seconds = duration.as_secs() + u64::from(duration.subsec_nanos() > 0);
    seconds.max(1)
}
