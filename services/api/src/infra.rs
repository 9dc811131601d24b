use chrono::NaiveDate;
use hiring_workflow::workflows::hiring::seed::sample_candidates;
use hiring_workflow::workflows::hiring::{
    Candidate, CandidateId, CandidateRepository, CandidateStatus, HiringStage, NotifierError, OfferEmail,
    OfferNotifier, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCandidateRepository {
    records: Arc<Mutex<BTreeMap<CandidateId, Candidate>>>,
}

impl InMemoryCandidateRepository {
    pub(crate) fn seeded() -> Self {
        let records = sample_candidates()
            .into_iter()
            .map(|candidate| (candidate.id, candidate))
            .collect();
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

impl CandidateRepository for InMemoryCandidateRepository {
    fn list(&self) -> Result<Vec<Candidate>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn fetch(&self, id: CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn insert(&self, candidate: Candidate) -> Result<Candidate, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&candidate.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(candidate.id, candidate.clone());
        Ok(candidate)
    }

    fn update_status(
        &self,
        id: CandidateId,
        status: CandidateStatus,
    ) -> Result<Candidate, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let candidate = guard.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        candidate.status = status;
        Ok(candidate.clone())
    }
}

/// Records outgoing offers and logs them instead of talking to a mail relay.
#[derive(Default, Clone)]
pub(crate) struct LoggingOfferNotifier {
    outbox: Arc<Mutex<Vec<OfferEmail>>>,
}

impl OfferNotifier for LoggingOfferNotifier {
    fn send_offer(&self, email: &OfferEmail) -> Result<(), NotifierError> {
        info!(recipient = %email.recipient, subject = %email.subject, "offer e-mail queued");
        let mut guard = self.outbox.lock().expect("outbox mutex poisoned");
        guard.push(email.clone());
        Ok(())
    }
}

impl LoggingOfferNotifier {
    pub(crate) fn outbox(&self) -> Vec<OfferEmail> {
        self.outbox.lock().expect("outbox mutex poisoned").clone()
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_step(raw: &str) -> Result<HiringStage, String> {
    let step: i64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as a step number ({err})"))?;
    HiringStage::try_from(step).map_err(|err| err.to_string())
}
