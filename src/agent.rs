//! The polling loop: collect, assemble, send, sleep, repeat.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing::{error, info, warn};

use crate::collectors::Probes;
use crate::snapshot::SystemSnapshot;
use crate::transport::Reporter;

pub struct Agent<P, R> {
    probes: P,
    reporter: R,
    interval: Duration,
}

impl<P: Probes, R: Reporter> Agent<P, R> {
    pub fn new(probes: P, reporter: R, interval: Duration) -> Self {
        Self {
            probes,
            reporter,
            interval,
        }
    }

    /// Runs iterations until `shutdown` flips to true (or its sender goes
    /// away). Iterations never overlap: the next one starts only after this
    /// one's send attempt and the inter-iteration sleep have both finished.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        loop {
            self.tick().await;

            tokio::select! {
                _ = time::sleep(self.interval) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("shutdown signal received, stopping");
                        return;
                    }
                }
            }
        }
    }

    /// One full iteration. CPU or memory failure abandons the iteration
    /// before a snapshot exists; temperature failure only substitutes the
    /// sentinel. Send failures are logged and dropped.
    pub async fn tick(&mut self) {
        let cpu_percent = match self.probes.cpu_percent().await {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "CPU collection failed, skipping iteration");
                return;
            }
        };

        let memory = match self.probes.memory().await {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "memory collection failed, skipping iteration");
                return;
            }
        };

        let temperature = match self.probes.temperature().await {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(error = %err, "temperature unavailable, reporting sentinel");
                None
            }
        };

        let snapshot = SystemSnapshot::assemble(cpu_percent, memory, temperature);

        match self.reporter.send(&snapshot).await {
            Ok(()) => info!(
                cpu_percent = snapshot.cpu_percent,
                ram_used_gb = snapshot.ram_used_gb,
                temperature_c = snapshot.temperature_c,
                "snapshot sent"
            ),
            Err(err) => error!(error = %err, "failed to send snapshot"),
        }
    }
}
