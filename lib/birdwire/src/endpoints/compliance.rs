//! Batch compliance jobs. App context only.

use birdwire_core::entities::{ComplianceJob, ComplianceJobKind};
use birdwire_core::{AuthMode, EndpointSpec, Envelope, HttpClient, Method, Params, PathTemplate, Result};

use crate::client::Client;

/// `GET compliance/jobs/{id}`
pub const COMPLIANCE_JOB: EndpointSpec = EndpointSpec::new(
    "compliance_job",
    Method::Get,
    PathTemplate::new("compliance/jobs/{id}"),
    &[],
    AuthMode::AppContext,
);

/// `GET compliance/jobs`
pub const COMPLIANCE_JOBS: EndpointSpec = EndpointSpec::new(
    "compliance_jobs",
    Method::Get,
    PathTemplate::new("compliance/jobs"),
    &["status", "type"],
    AuthMode::AppContext,
);

/// `POST compliance/jobs`
pub const CREATE_COMPLIANCE_JOB: EndpointSpec = EndpointSpec::new(
    "create_compliance_job",
    Method::Post,
    PathTemplate::new("compliance/jobs"),
    &["name", "resumable", "type"],
    AuthMode::AppContext,
);

impl<C: HttpClient> Client<C> {
    /// A compliance job by id.
    pub async fn compliance_job(&self, id: &str) -> Result<Envelope<ComplianceJob>> {
        self.call(&COMPLIANCE_JOB, &[id], &Params::new()).await
    }

    /// Compliance jobs of a kind; `params` may filter on `status`.
    pub async fn compliance_jobs(
        &self,
        kind: ComplianceJobKind,
        params: Params,
    ) -> Result<Envelope<Vec<ComplianceJob>>> {
        self.call(&COMPLIANCE_JOBS, &[], &params.with("type", kind.to_string()))
            .await
    }

    /// Creates a compliance job; upload the ids to the returned `upload_url`.
    pub async fn create_compliance_job(
        &self,
        kind: ComplianceJobKind,
        params: Params,
    ) -> Result<Envelope<ComplianceJob>> {
        self.call(
            &CREATE_COMPLIANCE_JOB,
            &[],
            &params.with("type", kind.to_string()),
        )
        .await
    }
}
