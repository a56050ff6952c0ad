//! Fixed-interval emission loop.

use anyhow::Context;
use phony_core::Registry;
use phony_template::Render;
use rand::RngCore;
use std::future::Future;
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::time::{self, Instant, MissedTickBehavior};

/// When to render and when to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// Interval between renders; the first render happens one tick after start
    pub tick: Duration,
    /// Stop after this many successful renders (`None` = unbounded)
    pub max: Option<u64>,
}

impl Schedule {
    pub fn new(tick: Duration, max: Option<u64>) -> Self {
        Self { tick, max }
    }

    fn is_done(&self, emitted: u64) -> bool {
        self.max.is_some_and(|max| emitted >= max)
    }
}

/// Render `renderer` once per tick and write each result to `out`.
///
/// Returns the number of renders written. Stops when the schedule's maximum
/// is reached or `shutdown` resolves. A render or write error stops the loop
/// and is returned; nothing from the failed render is written.
pub async fn emit<W, S>(
    renderer: &dyn Render,
    registry: &Registry,
    rng: &mut dyn RngCore,
    schedule: &Schedule,
    out: &mut W,
    shutdown: S,
) -> anyhow::Result<u64>
where
    W: AsyncWrite + Unpin,
    S: Future<Output = ()>,
{
    let mut interval = time::interval_at(Instant::now() + schedule.tick, schedule.tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    let mut emitted = 0u64;
    while !schedule.is_done(emitted) {
        tokio::select! {
            _ = interval.tick() => {}
            _ = &mut shutdown => {
                tracing::debug!(emitted, "Shutdown requested");
                break;
            }
        }

        let rendered = renderer
            .render(registry, rng)
            .with_context(|| format!("Render {} failed", emitted + 1))?;
        out.write_all(rendered.as_bytes())
            .await
            .context("Failed to write rendered output")?;
        out.flush().await.context("Failed to flush output")?;

        emitted += 1;
    }

    Ok(emitted)
}
