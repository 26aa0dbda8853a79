//! Typed view of the compliance/certification integration example.
//!
//! The document is sample data for partners. Nothing in this service calls
//! the endpoints it describes.

use serde::{Deserialize, Serialize};

/// Raw fixture, embedded at compile time.
pub const INTEGRATION_PROCESS_JSON: &str =
    include_str!("../../fixtures/integration_process.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationDocument {
    pub integration_process: IntegrationProcess,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationProcess {
    pub step_1: IntegrationStep<ComplianceRequest, ComplianceResponse>,
    pub step_2: IntegrationStep<CertificationRequest, CertificationResponse>,
}

/// One documented call: where it goes and an example exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationStep<Req, Resp> {
    pub description: String,
    /// `"METHOD /path"`
    pub endpoint: String,
    pub request: Req,
    pub response: Resp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceRequest {
    pub company_id: String,
    pub ai_model_name: String,
    pub audit_data: AuditData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditData {
    pub bias_analysis: bool,
    pub data_privacy_check: bool,
    pub explainability_test: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceResponse {
    pub status: String,
    pub compliance_score: u32,
    pub audit_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationRequest {
    pub audit_id: String,
    pub company_id: String,
    pub ai_model_name: String,
    pub compliance_score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationResponse {
    pub status: String,
    pub certification_id: String,
    pub blockchain_proof: String,
}

pub fn load_integration_document() -> Result<IntegrationDocument, serde_json::Error> {
    serde_json::from_str(INTEGRATION_PROCESS_JSON)
}
