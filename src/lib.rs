//! # cadastro
//!
//! Brazilian registration-data toolkit: CPF and CNPJ check-digit validation,
//! masking and generation, email normalization, and password policy checks.
//!
//! Both document validators are stateless collections of pure functions.
//! Invalid input is reported through `bool` returns; only the masking
//! operations fail, with [`FormatError`], when the input does not carry the
//! exact digit count of the document type.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::{cnpj, cpf};
//!
//! assert!(cpf::validate("529.982.247-25"));
//! assert_eq!(cpf::mask("52998224725").unwrap(), "529.982.247-25");
//!
//! assert!(cnpj::validate("11.222.333/0001-81"));
//! assert_eq!(cnpj::unmask("11.222.333/0001-81"), "11222333000181");
//!
//! let generated = cpf::generate();
//! assert!(cpf::validate(&generated));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cpf` (default) | CPF validation, masking, generation |
//! | `cnpj` (default) | CNPJ validation, masking, generation |
//! | `email` | Email validation, normalization, domain extraction |
//! | `password` | Password policy evaluation |
//! | `service` | Registration pipeline: batch processing, report/backup/audit records |
//! | `all` | Everything |

mod error;

#[cfg(feature = "cpf")]
pub mod cpf;

#[cfg(feature = "cnpj")]
pub mod cnpj;

#[cfg(feature = "email")]
pub mod email;

#[cfg(feature = "password")]
pub mod password;

#[cfg(feature = "service")]
pub mod service;

pub use error::FormatError;
