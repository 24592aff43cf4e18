//! Registration pipeline: validates a submitted record, exercises the
//! document/email/password validators against it, and assembles the
//! report, backup, integrity, audit and export records.
//!
//! The API layer is synthetic: calls always succeed and nothing leaves the
//! process. What the pipeline produces is the structured [`ServiceResult`];
//! rendering it is the caller's concern.
//!
//! # Example
//!
//! ```rust
//! use cadastro::service;
//!
//! let result = service::run(
//!     "maria@empresa.com",
//!     "Exemplo#2024",
//!     "11.222.333/0001-81",
//! )
//! .unwrap();
//!
//! assert!(result.integrity.valid);
//! assert_eq!(result.report.total_records, 2);
//! ```

mod types;

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::FormatError;
use crate::{cnpj, email, password};

pub use types::{
    ApiResult, Audit, Backup, Export, InputValidation, IntegrityCheck, ProcessedInput,
    ProcessedRecord, Report, ServiceResult, Summary, TestData, UserRecord,
};

/// Domain whose members are flagged as company-internal registrations.
pub const COMPANY_DOMAIN: &str = "empresa.com";

/// Password assigned to the synthetic test record.
const SAMPLE_PASSWORD: &str = "Exemplo#2024";

/// API calls made per pipeline run; integrity fails on any other count.
const EXPECTED_API_CALLS: usize = 4;

/// Consistency checks performed by [`IntegrityCheck`].
const INTEGRITY_CHECKS: usize = 3;

/// Pipeline stages counted by the audit record: validate, process, test
/// data, API calls, batch, report, backup, integrity, audit.
const PIPELINE_OPERATIONS: usize = 9;

/// Errors that can occur while running the registration pipeline.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// One or more of the submitted fields failed validation.
    #[error("invalid registration data (email: {}, password: {}, cnpj: {})", .0.email, .0.password, .0.cnpj)]
    InvalidInput(InputValidation),

    /// A document could not be masked for display.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Serializing the record set for backup or export failed.
    #[error("export serialization failed: {0}")]
    Export(#[from] serde_json::Error),
}

/// Run the full pipeline for one submitted record.
///
/// Validates all three fields up front and refuses to proceed on any
/// failure; the [`ServiceError::InvalidInput`] variant carries the
/// per-field outcome so callers can report exactly what was wrong.
pub fn run(email: &str, password: &str, cnpj: &str) -> Result<ServiceResult, ServiceError> {
    let checks = validate_inputs(email, password, cnpj);
    if !checks.all_valid() {
        return Err(ServiceError::InvalidInput(checks));
    }

    let processed = process_input(email, cnpj)?;
    let test_data = generate_test_data();
    let api_results = make_api_calls(email, password, cnpj, &test_data);

    let batch = vec![
        UserRecord {
            email: email.into(),
            password: password.into(),
            cnpj: cnpj.into(),
        },
        UserRecord {
            email: test_data.email.clone(),
            password: test_data.password.clone(),
            cnpj: test_data.cnpj.clone(),
        },
    ];
    let records = process_batch(&batch)?;

    let report = build_report(&records, &api_results, &processed);
    let backup = build_backup(&records, &batch[0])?;
    let integrity = check_integrity(&processed, &api_results);
    let audit = perform_audit(&records, cnpj);
    let export = export_records(&report, &records, &backup, &integrity, &audit)?;

    let summary = Summary {
        total_processed: records.len(),
        valid_records: report.valid_records,
        invalid_records: report.invalid_records,
        api_calls: api_results.len(),
        backup_created: true,
        integrity_valid: integrity.valid,
        audit_completed: true,
        data_exported: true,
    };

    Ok(ServiceResult {
        completed_at: Utc::now(),
        summary,
        processed,
        test_data,
        batch: records,
        report,
        backup,
        integrity,
        audit,
        export,
    })
}

fn validate_inputs(email_input: &str, password_input: &str, cnpj_input: &str) -> InputValidation {
    InputValidation {
        email: email::validate(email_input),
        password: password::validate(password_input),
        cnpj: cnpj::validate(cnpj_input),
    }
}

fn process_input(email_input: &str, cnpj_input: &str) -> Result<ProcessedInput, ServiceError> {
    let normalized_email = email::normalize(email_input);
    let domain = email::extract_domain(&normalized_email).map(String::from);
    let from_company_domain = email::is_from_domain(&normalized_email, COMPANY_DOMAIN);
    let masked_cnpj = cnpj::mask(cnpj_input)?;
    let unmasked_cnpj = cnpj::unmask(&masked_cnpj);
    let cnpj_format_valid = cnpj::is_valid_format(&masked_cnpj);

    Ok(ProcessedInput {
        normalized_email,
        domain,
        from_company_domain,
        masked_cnpj,
        unmasked_cnpj,
        cnpj_format_valid,
    })
}

fn generate_test_data() -> TestData {
    TestData {
        cnpj: cnpj::generate(),
        email: format!(
            "teste.{}@{COMPANY_DOMAIN}",
            Utc::now().timestamp_millis()
        ),
        password: SAMPLE_PASSWORD.into(),
    }
}

/// Stand-in for the registration backend. Always succeeds.
fn call_api(_endpoint: &str, _payload: &str) -> ApiResult {
    ApiResult {
        success: true,
        message: "api call successful".into(),
    }
}

fn make_api_calls(
    email_input: &str,
    password_input: &str,
    cnpj_input: &str,
    test_data: &TestData,
) -> Vec<ApiResult> {
    vec![
        call_api(email_input, password_input),
        call_api(email_input, cnpj_input),
        call_api(password_input, cnpj_input),
        call_api(&test_data.email, &test_data.password),
    ]
}

fn process_batch(batch: &[UserRecord]) -> Result<Vec<ProcessedRecord>, ServiceError> {
    batch
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let valid = email::validate(&record.email)
                && password::validate(&record.password)
                && cnpj::validate(&record.cnpj);

            Ok(ProcessedRecord {
                index,
                valid,
                normalized_email: email::normalize(&record.email),
                masked_cnpj: cnpj::mask(&record.cnpj)?,
                source: record.clone(),
            })
        })
        .collect()
}

fn build_report(
    records: &[ProcessedRecord],
    api_results: &[ApiResult],
    processed: &ProcessedInput,
) -> Report {
    let valid_records = records.iter().filter(|r| r.valid).count();

    Report {
        generated_at: Utc::now(),
        total_records: records.len(),
        valid_records,
        invalid_records: records.len() - valid_records,
        api_calls: api_results.len(),
        domain: processed.domain.clone(),
        from_company_domain: processed.from_company_domain,
    }
}

fn build_backup(records: &[ProcessedRecord], source: &UserRecord) -> Result<Backup, ServiceError> {
    Ok(Backup {
        created_at: Utc::now(),
        checksum: serde_json::to_string(records)?.len(),
        records: records.to_vec(),
        source: source.clone(),
    })
}

fn check_integrity(processed: &ProcessedInput, api_results: &[ApiResult]) -> IntegrityCheck {
    let mut errors = Vec::new();

    if processed.domain.is_none() {
        errors.push("email domain missing".to_string());
    }
    if !processed.cnpj_format_valid {
        errors.push("masked CNPJ has unexpected format".to_string());
    }
    if api_results.len() != EXPECTED_API_CALLS {
        errors.push(format!(
            "expected {EXPECTED_API_CALLS} api calls, got {}",
            api_results.len()
        ));
    }

    IntegrityCheck {
        valid: errors.is_empty(),
        errors,
        total_checks: INTEGRITY_CHECKS,
    }
}

fn perform_audit(records: &[ProcessedRecord], cnpj_input: &str) -> Audit {
    Audit {
        performed_at: Utc::now(),
        suspicious_emails: records
            .iter()
            .filter(|r| r.source.email.contains("test") || r.source.email.contains("admin"))
            .count(),
        duplicate_cnpjs: records
            .iter()
            .filter(|r| r.source.cnpj == cnpj_input)
            .count(),
        total_operations: PIPELINE_OPERATIONS,
    }
}

#[derive(Serialize)]
struct ExportPayload<'a> {
    report: &'a Report,
    records: &'a [ProcessedRecord],
    backup: &'a Backup,
    integrity: &'a IntegrityCheck,
    audit: &'a Audit,
}

fn export_records(
    report: &Report,
    records: &[ProcessedRecord],
    backup: &Backup,
    integrity: &IntegrityCheck,
    audit: &Audit,
) -> Result<Export, ServiceError> {
    let payload = ExportPayload {
        report,
        records,
        backup,
        integrity,
        audit,
    };
    let content = serde_json::to_string_pretty(&payload)?;
    let size = content.len();

    Ok(Export {
        format: "json".into(),
        content,
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrity_passes_on_consistent_state() {
        let processed = ProcessedInput {
            normalized_email: "maria@empresa.com".into(),
            domain: Some("empresa.com".into()),
            from_company_domain: true,
            masked_cnpj: "11.222.333/0001-81".into(),
            unmasked_cnpj: "11222333000181".into(),
            cnpj_format_valid: true,
        };
        let api_results: Vec<ApiResult> =
            (0..EXPECTED_API_CALLS).map(|_| call_api("a", "b")).collect();

        let integrity = check_integrity(&processed, &api_results);
        assert!(integrity.valid);
        assert!(integrity.errors.is_empty());
        assert_eq!(integrity.total_checks, INTEGRITY_CHECKS);
    }

    #[test]
    fn integrity_collects_every_failure() {
        let processed = ProcessedInput {
            normalized_email: "maria@empresa.com".into(),
            domain: None,
            from_company_domain: false,
            masked_cnpj: "11.222.333/0001-81".into(),
            unmasked_cnpj: "11222333000181".into(),
            cnpj_format_valid: false,
        };

        let integrity = check_integrity(&processed, &[]);
        assert!(!integrity.valid);
        assert_eq!(integrity.errors.len(), 3);
    }

    #[test]
    fn audit_flags_suspicious_emails_and_duplicates() {
        let record = |email: &str, cnpj: &str| ProcessedRecord {
            index: 0,
            source: UserRecord {
                email: email.into(),
                password: SAMPLE_PASSWORD.into(),
                cnpj: cnpj.into(),
            },
            valid: true,
            normalized_email: email.to_lowercase(),
            masked_cnpj: String::new(),
        };

        let records = vec![
            record("maria@empresa.com", "11222333000181"),
            record("teste.1@empresa.com", "11222333000181"),
            record("admin@empresa.com", "99888777000160"),
        ];

        let audit = perform_audit(&records, "11222333000181");
        assert_eq!(audit.suspicious_emails, 2);
        assert_eq!(audit.duplicate_cnpjs, 2);
        assert_eq!(audit.total_operations, PIPELINE_OPERATIONS);
    }
}
