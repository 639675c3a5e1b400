//! Repository implementations for all PartsHub entities.

pub mod deleted_loan;
pub mod loan;
pub mod spare_part;
pub(crate) mod stock;

pub use deleted_loan::DeletedLoanRepository;
pub use loan::LoanRepository;
pub use spare_part::SparePartRepository;
