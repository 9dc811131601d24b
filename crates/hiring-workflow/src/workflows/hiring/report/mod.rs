mod summary;
pub mod views;

pub use summary::{
    application_stats, job_posting_status, pipeline_metrics, shortlist_data, shortlisting_data,
    top_shortlisted,
};
