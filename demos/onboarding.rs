use cadastro::service::{self, ServiceError};

fn main() {
    println!("=== Registration Pipeline ===\n");

    match service::run("maria@empresa.com", "S3nha&forte", "11.222.333/0001-81") {
        Ok(result) => {
            let s = &result.summary;
            println!("  processed: {} records ({} valid, {} invalid)",
                s.total_processed, s.valid_records, s.invalid_records);
            println!("  api calls: {}", s.api_calls);
            println!("  integrity: {}", if s.integrity_valid { "ok" } else { "FAILED" });
            println!("  audit: {} suspicious, {} duplicate CNPJs",
                result.audit.suspicious_emails, result.audit.duplicate_cnpjs);
            println!("  backup checksum: {}", result.backup.checksum);
            println!("  export: {} bytes of {}", result.export.size, result.export.format);
            println!("\n{}", result.export.content);
        }
        Err(e) => println!("  pipeline failed: {e}"),
    }

    // Rejection path: the error names each failing field
    println!("\n=== Rejection ===\n");

    match service::run("not-an-email", "fraca", "11.222.333/0001-81") {
        Ok(_) => unreachable!("invalid input must be rejected"),
        Err(ServiceError::InvalidInput(checks)) => {
            println!("  email ok: {}", checks.email);
            println!("  password ok: {}", checks.password);
            println!("  cnpj ok: {}", checks.cnpj);
        }
        Err(e) => println!("  unexpected error: {e}"),
    }
}
