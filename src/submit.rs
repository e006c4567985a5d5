//! Background worker that performs the network round-trip for a submission.
//!
//! Each submission carries a monotonically increasing id. The shared atomic
//! tracks the latest id issued by the UI; a completion whose id is no longer
//! the latest is dropped here, and the app gates on the id again when it
//! applies a result. Success and failure both produce a `SubmitResult`, so
//! the loading state always has an exit path.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, warn};

use crate::backend::{SuggestService, Suggestions};
use crate::form::JobForm;

#[derive(Debug)]
pub(crate) enum SubmitCommand {
    Submit { id: u64, form: JobForm },
    Shutdown,
}

#[derive(Debug)]
pub(crate) struct SubmitResult {
    pub(crate) id: u64,
    pub(crate) outcome: Result<Suggestions, String>,
}

pub(crate) fn spawn(
    service: Box<dyn SuggestService + Send>,
) -> (Sender<SubmitCommand>, Receiver<SubmitResult>, Arc<AtomicU64>) {
    let (command_tx, command_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let latest_submit_id = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest_submit_id);

    thread::spawn(move || {
        while let Ok(command) = command_rx.recv() {
            match command {
                SubmitCommand::Submit { id, form } => {
                    if !process_submit(service.as_ref(), id, form, &result_tx, &thread_latest) {
                        break;
                    }
                }
                SubmitCommand::Shutdown => break,
            }
        }
    });

    (command_tx, result_rx, latest_submit_id)
}

fn process_submit(
    service: &dyn SuggestService,
    id: u64,
    form: JobForm,
    tx: &Sender<SubmitResult>,
    latest_submit_id: &AtomicU64,
) -> bool {
    debug!(id, title = form.job_title(), "submitting form");

    let outcome = service.suggest(&form).map_err(|err| {
        warn!(id, error = %err, "submission failed");
        err.to_string()
    });

    if superseded(id, latest_submit_id) {
        debug!(id, "discarding superseded submission result");
        return true;
    }

    tx.send(SubmitResult { id, outcome }).is_ok()
}

fn superseded(id: u64, latest_submit_id: &AtomicU64) -> bool {
    latest_submit_id.load(AtomicOrdering::Acquire) != id
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::Ordering as AtomicOrdering;
    use std::time::Duration;

    use crate::backend::BackendError;

    use super::*;

    /// Replays a scripted sequence of outcomes, one per submission.
    struct ScriptedService {
        outcomes: Mutex<VecDeque<Result<Suggestions, BackendError>>>,
    }

    impl ScriptedService {
        fn new(outcomes: Vec<Result<Suggestions, BackendError>>) -> Box<Self> {
            Box::new(Self {
                outcomes: Mutex::new(outcomes.into()),
            })
        }
    }

    impl SuggestService for ScriptedService {
        fn suggest(&self, _form: &JobForm) -> Result<Suggestions, BackendError> {
            self.outcomes
                .lock()
                .expect("lock")
                .pop_front()
                .unwrap_or_else(|| Ok(Suggestions::default()))
        }
    }

    fn sample_suggestions(query: &str) -> Suggestions {
        Suggestions {
            data: vec![query.to_string()],
            additional_job_titles: Vec::new(),
        }
    }

    fn parse_error() -> BackendError {
        BackendError::from(serde_json::from_str::<Suggestions>("nope").expect_err("malformed"))
    }

    #[test]
    fn successful_submission_reports_back_with_its_id() {
        let (tx, rx, latest) = spawn(ScriptedService::new(vec![Ok(sample_suggestions("q1"))]));

        latest.store(1, AtomicOrdering::Release);
        tx.send(SubmitCommand::Submit {
            id: 1,
            form: JobForm::default(),
        })
        .expect("send");

        let result = rx.recv_timeout(Duration::from_secs(2)).expect("result");
        assert_eq!(result.id, 1);
        assert_eq!(result.outcome.expect("outcome"), sample_suggestions("q1"));
    }

    #[test]
    fn failed_submission_still_reports_back() {
        let (tx, rx, latest) = spawn(ScriptedService::new(vec![Err(parse_error())]));

        latest.store(1, AtomicOrdering::Release);
        tx.send(SubmitCommand::Submit {
            id: 1,
            form: JobForm::default(),
        })
        .expect("send");

        let result = rx.recv_timeout(Duration::from_secs(2)).expect("result");
        assert_eq!(result.id, 1);
        assert!(result.outcome.is_err());
    }

    #[test]
    fn superseded_submission_is_dropped() {
        let (tx, rx, latest) = spawn(ScriptedService::new(vec![
            Ok(sample_suggestions("stale")),
            Ok(sample_suggestions("fresh")),
        ]));

        // Issue both submissions before the worker starts; only the second is
        // the latest by the time either completes.
        latest.store(2, AtomicOrdering::Release);
        tx.send(SubmitCommand::Submit {
            id: 1,
            form: JobForm::default(),
        })
        .expect("send");
        tx.send(SubmitCommand::Submit {
            id: 2,
            form: JobForm::default(),
        })
        .expect("send");

        let result = rx.recv_timeout(Duration::from_secs(2)).expect("result");
        assert_eq!(result.id, 2);
        assert_eq!(result.outcome.expect("outcome"), sample_suggestions("fresh"));
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }
}
