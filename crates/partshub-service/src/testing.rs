//! In-memory store fakes for service unit tests.
//!
//! Each fake mirrors the all-or-nothing visibility contract of the real
//! repositories: multi-step stock effects are staged on a copy of the parts
//! list and committed only when every deduction succeeds.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use partshub_core::error::AppError;
use partshub_core::result::AppResult;
use partshub_database::store::{InventoryStore, LoanFilter, LoanStore, RecycleBinStore};
use partshub_entity::deleted_loan::DeletedLoan;
use partshub_entity::loan::Loan;
use partshub_entity::spare_part::{CreateSparePart, SparePart, UpdateSparePart};
use partshub_entity::stock_history::{StockChange, StockMovement};

/// One recorded ledger entry.
#[derive(Debug, Clone)]
pub(crate) struct LedgerEntry {
    pub movement: StockMovement,
    pub part_id: Uuid,
    pub quantity: f64,
    pub note: String,
}

/// In-memory spare-part catalog.
#[derive(Default)]
pub(crate) struct MemoryInventoryStore {
    parts: Mutex<Vec<SparePart>>,
    ledger: Mutex<Vec<LedgerEntry>>,
}

impl MemoryInventoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seeds a part and returns its id.
    pub fn add_part(&self, name: &str, quantity: f64, unit_price: f64) -> Uuid {
        let now = Utc::now();
        let part = SparePart {
            id: Uuid::new_v4(),
            name: name.to_string(),
            code: None,
            category: None,
            quantity,
            min_stock: None,
            unit_price,
            supplier: None,
            location: None,
            created_at: now,
            updated_at: now,
        };
        let id = part.id;
        self.parts.lock().unwrap().push(part);
        id
    }

    pub fn quantity_of(&self, id: Uuid) -> f64 {
        self.parts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.quantity)
            .unwrap_or(f64::NAN)
    }

    pub fn ledger(&self) -> Vec<LedgerEntry> {
        self.ledger.lock().unwrap().clone()
    }

    fn append_ledger(&self, movement: StockMovement, changes: &[StockChange], note: &str) {
        let mut ledger = self.ledger.lock().unwrap();
        for change in changes {
            ledger.push(LedgerEntry {
                movement,
                part_id: change.part_id,
                quantity: change.quantity,
                note: note.to_string(),
            });
        }
    }

    /// Stages restores then deductions on a copy and commits only if every
    /// deduction finds enough stock. Parts that vanished are skipped.
    pub(crate) fn apply_staged(
        &self,
        restores: &[StockChange],
        deductions: &[StockChange],
    ) -> AppResult<()> {
        let mut parts = self.parts.lock().unwrap();
        let mut staged = parts.clone();

        for change in restores {
            if let Some(part) = staged.iter_mut().find(|p| p.id == change.part_id) {
                part.quantity += change.quantity;
            }
        }
        for change in deductions {
            if let Some(part) = staged.iter_mut().find(|p| p.id == change.part_id) {
                if part.quantity < change.quantity {
                    return Err(AppError::insufficient_stock(
                        &part.name,
                        part.quantity,
                        change.quantity,
                    ));
                }
                part.quantity -= change.quantity;
            }
        }

        *parts = staged;
        Ok(())
    }
}

#[async_trait]
impl InventoryStore for MemoryInventoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<SparePart>> {
        Ok(self.parts.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<SparePart>> {
        Ok(self
            .parts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<SparePart>> {
        Ok(self.parts.lock().unwrap().clone())
    }

    async fn create(&self, data: &CreateSparePart) -> AppResult<SparePart> {
        let mut parts = self.parts.lock().unwrap();
        if parts.iter().any(|p| p.name == data.name) {
            return Err(AppError::conflict(
                "A spare part with this name already exists",
            ));
        }
        let now = Utc::now();
        let part = SparePart {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            code: data.code.clone(),
            category: data.category.clone(),
            quantity: data.quantity,
            min_stock: data.min_stock,
            unit_price: data.unit_price,
            supplier: data.supplier.clone(),
            location: data.location.clone(),
            created_at: now,
            updated_at: now,
        };
        parts.push(part.clone());
        Ok(part)
    }

    async fn update(&self, id: Uuid, data: &UpdateSparePart) -> AppResult<SparePart> {
        let mut parts = self.parts.lock().unwrap();
        let part = parts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found("Spare part not found"))?;
        if let Some(name) = &data.name {
            part.name = name.clone();
        }
        if let Some(quantity) = data.quantity {
            part.quantity = quantity;
        }
        if let Some(unit_price) = data.unit_price {
            part.unit_price = unit_price;
        }
        part.updated_at = Utc::now();
        Ok(part.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut parts = self.parts.lock().unwrap();
        let before = parts.len();
        parts.retain(|p| p.id != id);
        Ok(parts.len() < before)
    }

    async fn stock_in(&self, part_id: Uuid, quantity: f64, note: &str) -> AppResult<SparePart> {
        let change = {
            let mut parts = self.parts.lock().unwrap();
            let part = parts
                .iter_mut()
                .find(|p| p.id == part_id)
                .ok_or_else(|| AppError::not_found("Spare part not found"))?;
            part.quantity += quantity;
            part.updated_at = Utc::now();
            StockChange {
                part_id,
                part_name: part.name.clone(),
                quantity,
            }
        };
        self.append_ledger(StockMovement::In, &[change], note);
        self.find_by_id(part_id)
            .await?
            .ok_or_else(|| AppError::not_found("Spare part not found"))
    }

    async fn stock_out(&self, part_id: Uuid, quantity: f64, note: &str) -> AppResult<SparePart> {
        let change = {
            let mut parts = self.parts.lock().unwrap();
            let part = parts
                .iter_mut()
                .find(|p| p.id == part_id)
                .ok_or_else(|| AppError::not_found("Spare part not found"))?;
            if part.quantity < quantity {
                return Err(AppError::insufficient_stock(
                    &part.name,
                    part.quantity,
                    quantity,
                ));
            }
            part.quantity -= quantity;
            part.updated_at = Utc::now();
            StockChange {
                part_id,
                part_name: part.name.clone(),
                quantity,
            }
        };
        self.append_ledger(StockMovement::Out, &[change], note);
        self.find_by_id(part_id)
            .await?
            .ok_or_else(|| AppError::not_found("Spare part not found"))
    }
}

/// In-memory loan store coupled to a [`MemoryInventoryStore`].
pub(crate) struct MemoryLoanStore {
    inventory: Arc<MemoryInventoryStore>,
    loans: Mutex<Vec<Loan>>,
}

impl MemoryLoanStore {
    pub fn new(inventory: Arc<MemoryInventoryStore>) -> Arc<Self> {
        Arc::new(Self {
            inventory,
            loans: Mutex::new(Vec::new()),
        })
    }

    fn store_loan(&self, loan: &Loan) {
        let mut loans = self.loans.lock().unwrap();
        if let Some(existing) = loans.iter_mut().find(|l| l.id == loan.id) {
            *existing = loan.clone();
        } else {
            loans.push(loan.clone());
        }
    }
}

#[async_trait]
impl LoanStore for MemoryLoanStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Loan>> {
        Ok(self.loans.lock().unwrap().iter().find(|l| l.id == id).cloned())
    }

    async fn list(&self, filter: LoanFilter) -> AppResult<Vec<Loan>> {
        Ok(self
            .loans
            .lock()
            .unwrap()
            .iter()
            .filter(|l| match filter {
                LoanFilter::All => true,
                LoanFilter::Active => !l.returned,
                LoanFilter::Returned => l.returned,
            })
            .cloned()
            .collect())
    }

    async fn create_with_stock(&self, loan: &Loan, deductions: &[StockChange]) -> AppResult<Loan> {
        self.inventory.apply_staged(&[], deductions)?;
        self.inventory
            .append_ledger(StockMovement::Loan, deductions, "Loan created");
        self.store_loan(loan);
        Ok(loan.clone())
    }

    async fn update_with_stock(
        &self,
        loan: &Loan,
        restores: &[StockChange],
        deductions: &[StockChange],
    ) -> AppResult<Loan> {
        self.inventory.apply_staged(restores, deductions)?;
        self.inventory
            .append_ledger(StockMovement::Return, restores, "Loan edited");
        self.inventory
            .append_ledger(StockMovement::Loan, deductions, "Loan edited");
        self.store_loan(loan);
        Ok(loan.clone())
    }

    async fn update(&self, loan: &Loan) -> AppResult<Loan> {
        self.store_loan(loan);
        Ok(loan.clone())
    }

    async fn release_stock_and_update(
        &self,
        loan: &Loan,
        restores: &[StockChange],
    ) -> AppResult<Loan> {
        self.inventory.apply_staged(restores, &[])?;
        self.inventory
            .append_ledger(StockMovement::Return, restores, "Loan returned");
        self.store_loan(loan);
        Ok(loan.clone())
    }
}

/// In-memory recycle bin coupled to a [`MemoryLoanStore`].
pub(crate) struct MemoryRecycleBinStore {
    loans: Arc<MemoryLoanStore>,
    entries: Mutex<Vec<DeletedLoan>>,
}

impl MemoryRecycleBinStore {
    pub fn new(loans: Arc<MemoryLoanStore>) -> Arc<Self> {
        Arc::new(Self {
            loans,
            entries: Mutex::new(Vec::new()),
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Backdates an entry's restore deadline, for expiry tests.
    pub fn expire_entry(&self, entry_id: Uuid, restore_until: DateTime<Utc>) {
        let mut entries = self.entries.lock().unwrap();
        if let Some(entry) = entries.iter_mut().find(|e| e.id == entry_id) {
            entry.restore_until = restore_until;
        }
    }
}

#[async_trait]
impl RecycleBinStore for MemoryRecycleBinStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<DeletedLoan>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn list_unrestored(&self) -> AppResult<Vec<DeletedLoan>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| !e.is_restored)
            .cloned()
            .collect())
    }

    async fn move_to_bin(&self, entry: &DeletedLoan) -> AppResult<DeletedLoan> {
        {
            let mut loans = self.loans.loans.lock().unwrap();
            let before = loans.len();
            loans.retain(|l| l.id != entry.original_id);
            if loans.len() == before {
                return Err(AppError::not_found("Loan not found"));
            }
        }
        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry.clone())
    }

    async fn restore(&self, entry_id: Uuid, loan: &Loan) -> AppResult<Loan> {
        {
            let mut entries = self.entries.lock().unwrap();
            let entry = entries
                .iter_mut()
                .find(|e| e.id == entry_id)
                .ok_or_else(|| AppError::not_found("Deleted loan not found"))?;
            if entry.is_restored {
                return Err(AppError::already_restored(
                    "Loan has already been restored",
                ));
            }
            entry.is_restored = true;
        }
        self.loans.store_loan(loan);
        Ok(loan.clone())
    }

    async fn purge(&self, entry_id: Uuid) -> AppResult<bool> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| e.id != entry_id || e.is_restored);
        Ok(entries.len() < before)
    }

    async fn cleanup_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| e.is_restored || e.restore_until >= now);
        Ok((before - entries.len()) as u64)
    }
}
