//! The Loan Engine: loan creation, editing, returns, and item removal.

pub mod items;
pub mod service;

pub use items::LoanItemRequest;
pub use service::{CreateLoanRequest, LoanService, UpdateLoanRequest};
