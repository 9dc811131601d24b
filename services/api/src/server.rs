use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryCandidateRepository, LoggingOfferNotifier};
use crate::routes::with_hiring_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hiring_workflow::config::AppConfig;
use hiring_workflow::error::AppError;
use hiring_workflow::telemetry;
use hiring_workflow::workflows::hiring::seed::sample_job;
use hiring_workflow::workflows::hiring::{HiringWorkflowService, StepController};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(step) = args.resume_step.take() {
        config.workflow.resume_step = step;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryCandidateRepository::seeded());
    let notifier = Arc::new(LoggingOfferNotifier::default());
    let steps = StepController::resume_at(config.workflow.resume_step);
    let hiring_service = Arc::new(HiringWorkflowService::new(
        repository,
        notifier,
        sample_job(),
        steps,
    ));

    let app = with_hiring_routes(hiring_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        step = config.workflow.resume_step.number(),
        "hiring workflow service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
