use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registration record as submitted: email, password and company CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub password: String,
    pub cnpj: String,
}

/// Per-field outcome of validating a submitted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputValidation {
    pub email: bool,
    pub password: bool,
    pub cnpj: bool,
}

impl InputValidation {
    /// True when every field passed validation.
    pub fn all_valid(&self) -> bool {
        self.email && self.password && self.cnpj
    }
}

/// The caller's record after normalization and formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedInput {
    pub normalized_email: String,
    pub domain: Option<String>,
    pub from_company_domain: bool,
    pub masked_cnpj: String,
    pub unmasked_cnpj: String,
    pub cnpj_format_valid: bool,
}

/// One record of a processed batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedRecord {
    pub index: usize,
    pub source: UserRecord,
    pub valid: bool,
    pub normalized_email: String,
    pub masked_cnpj: String,
}

/// Synthetic registration data used to exercise the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestData {
    pub cnpj: String,
    pub email: String,
    pub password: String,
}

/// Outcome of one synthetic API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResult {
    pub success: bool,
    pub message: String,
}

/// Aggregate counts over a processed batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub total_records: usize,
    pub valid_records: usize,
    pub invalid_records: usize,
    pub api_calls: usize,
    pub domain: Option<String>,
    pub from_company_domain: bool,
}

/// Snapshot of the processed batch plus the input it came from.
///
/// The checksum is the byte length of the records' JSON serialization,
/// a tamper indicator rather than a cryptographic digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backup {
    pub created_at: DateTime<Utc>,
    pub records: Vec<ProcessedRecord>,
    pub checksum: usize,
    pub source: UserRecord,
}

/// Result of the pipeline's internal consistency checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrityCheck {
    pub valid: bool,
    pub errors: Vec<String>,
    pub total_checks: usize,
}

/// Counts of records flagged during the audit pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Audit {
    pub performed_at: DateTime<Utc>,
    pub suspicious_emails: usize,
    pub duplicate_cnpjs: usize,
    pub total_operations: usize,
}

/// Serialized copy of the full record set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Export {
    pub format: String,
    pub content: String,
    pub size: usize,
}

/// One-line view of the pipeline outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_processed: usize,
    pub valid_records: usize,
    pub invalid_records: usize,
    pub api_calls: usize,
    pub backup_created: bool,
    pub integrity_valid: bool,
    pub audit_completed: bool,
    pub data_exported: bool,
}

/// Everything the pipeline produced for one submitted record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResult {
    pub completed_at: DateTime<Utc>,
    pub summary: Summary,
    pub processed: ProcessedInput,
    pub test_data: TestData,
    pub batch: Vec<ProcessedRecord>,
    pub report: Report,
    pub backup: Backup,
    pub integrity: IntegrityCheck,
    pub audit: Audit,
    pub export: Export,
}
