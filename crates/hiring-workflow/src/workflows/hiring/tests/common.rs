use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::hiring::candidates::{
    Candidate, CandidateId, CandidateRepository, CandidateStatus, PipelineStage, RepositoryError,
};
use crate::workflows::hiring::offer::{NotifierError, OfferEmail, OfferNotifier};
use crate::workflows::hiring::seed::{sample_candidates, sample_job};
use crate::workflows::hiring::{hiring_router, HiringWorkflowService, StepController};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 18).expect("valid date")
}

pub(super) fn walk_in_candidate(id: u32) -> Candidate {
    Candidate {
        id: CandidateId(id),
        name: "Ravi Patel".to_string(),
        title: "Event Coordinator".to_string(),
        score: 97,
        status: CandidateStatus::Applied,
        interview_score: 0.0,
        applied_date: Some(today()),
        stage: PipelineStage::Applied,
        location: Some("Jaipur".to_string()),
        experience: None,
        education: None,
    }
}

pub(super) fn build_service() -> (
    HiringWorkflowService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::seeded());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = HiringWorkflowService::new(
        repository.clone(),
        notifier.clone(),
        sample_job(),
        StepController::new(),
    );
    (service, repository, notifier)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<BTreeMap<CandidateId, Candidate>>>,
}

impl MemoryRepository {
    pub(super) fn seeded() -> Self {
        let records = sample_candidates()
            .into_iter()
            .map(|candidate| (candidate.id, candidate))
            .collect();
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

impl CandidateRepository for MemoryRepository {
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

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    sent: Arc<Mutex<Vec<OfferEmail>>>,
}

impl MemoryNotifier {
    pub(super) fn sent(&self) -> Vec<OfferEmail> {
        self.sent.lock().expect("notifier mutex poisoned").clone()
    }
}

impl OfferNotifier for MemoryNotifier {
    fn send_offer(&self, email: &OfferEmail) -> Result<(), NotifierError> {
        self.sent
            .lock()
            .expect("notifier mutex poisoned")
            .push(email.clone());
        Ok(())
    }
}

pub(super) struct FailingNotifier;

impl OfferNotifier for FailingNotifier {
    fn send_offer(&self, _email: &OfferEmail) -> Result<(), NotifierError> {
        Err(NotifierError::Transport("smtp relay offline".to_string()))
    }
}

pub(super) struct UnavailableRepository;

impl CandidateRepository for UnavailableRepository {
    fn list(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert(&self, _candidate: Candidate) -> Result<Candidate, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_status(
        &self,
        _id: CandidateId,
        _status: CandidateStatus,
    ) -> Result<Candidate, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn hiring_router_with_service(
    service: HiringWorkflowService<MemoryRepository, MemoryNotifier>,
) -> axum::Router {
    hiring_router(Arc::new(service))
}
