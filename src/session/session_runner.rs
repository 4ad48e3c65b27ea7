use crate::rates::RatesProvider;
use crate::session::{EventOutcome, SessionAction, SessionEvent, SessionReport};
use crate::storage::Storage;
use crate::wizard::WizardController;
use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, warn};

/// Replays a scripted wizard session from a CSV file.
///
/// Every event goes through the one controller owned by the runner, in file order.
pub struct SessionRunner<S: Storage> {
    wizard: WizardController<S>,
    rates: Arc<RatesProvider>,
    backpressure: usize
}

impl<S: Storage> SessionRunner<S> {
    pub fn new(wizard: WizardController<S>, rates: Arc<RatesProvider>) -> Self {
        Self {
            wizard,
            rates,
            backpressure: 256
        }
    }

    pub fn wizard(&self) -> &WizardController<S> {
        &self.wizard
    }

    /// Streams the script at `path` through the wizard.
    ///
    /// Malformed rows are logged and skipped.
    ///
    /// # Errors
    /// Fails when the script cannot be opened or the reader task panics.
    pub async fn run(&mut self, path: &str) -> anyhow::Result<SessionReport> {
        let file = File::open(path).with_context(|| format!("Cannot open session script {path}"))?;

        let (sender, receiver) = mpsc::channel::<SessionEvent>(self.backpressure);
        let reader_task = self.spawn_script_reader(file, sender);
        let report = self.process_events(receiver).await;

        reader_task.await.context("Session script reader stopped unexpectedly")?;

        Ok(report)
    }

    /// Applies a single event to the wizard.
    pub fn apply(&mut self, event: &SessionEvent) -> EventOutcome {
        match event.action {
            SessionAction::Set => {
                let Some(field) = event.field else {
                    warn!("Set event without a field was ignored");
                    return EventOutcome::Refused;
                };

                self.wizard.set_field(field, event.value.as_deref().unwrap_or(""));
                EventOutcome::Applied
            },
            SessionAction::Advance => {
                if self.wizard.advance() {
                    return EventOutcome::Applied;
                }

                for field_error in self.wizard.field_errors() {
                    debug!("{field_error}");
                }

                warn!("Advance refused at step [{:?}]", self.wizard.current_step());
                EventOutcome::Refused
            },
            SessionAction::Retreat => {
                self.wizard.retreat();
                EventOutcome::Applied
            },
            SessionAction::Edit => {
                self.wizard.edit();
                EventOutcome::Applied
            },
            SessionAction::Confirm => {
                let snapshot = self.rates.snapshot();

                if let Ok(summary) = self.wizard.review(snapshot.as_ref()) {
                    debug!("Reviewing transfer:\n{summary}");
                }

                match self.wizard.confirm(snapshot.as_ref()) {
                    Ok(transfer) => EventOutcome::Submitted(transfer.transfer_id),
                    Err(error) => {
                        warn!("{error}");
                        EventOutcome::Refused
                    }
                }
            }
        }
    }

    fn spawn_script_reader(&self, file: File, sender: mpsc::Sender<SessionEvent>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let mut script = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            for (row, result) in script.deserialize::<SessionEvent>().enumerate() {
                let event = match result {
                    Ok(event) => event,
                    Err(error) => {
                        error!("Skipping session row {}: {error}", row + 1);
                        continue;
                    }
                };

                //NOTE: The wizard side hung up, nothing left to feed
                if sender.blocking_send(event).is_err() {
                    break;
                }
            }
        })
    }

    async fn process_events(&mut self, mut receiver: mpsc::Receiver<SessionEvent>) -> SessionReport {
        let mut report = SessionReport::default();

        while let Some(event) = receiver.recv().await {
            let outcome = self.apply(&event);
            report.record(outcome);
        }

        report
    }
}
