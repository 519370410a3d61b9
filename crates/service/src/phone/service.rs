use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tracing::{debug, instrument};

use models::phone::{self, PhoneInput};
use crate::errors::ServiceError;

/// Application service for phone records.
///
/// Each operation opens one transaction and commits it only after every step
/// succeeded. Returning early drops the transaction, which rolls it back, so a
/// failed operation never leaves partial writes behind.
#[derive(Clone)]
pub struct PhoneService {
    db: DatabaseConnection,
}

impl PhoneService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Every stored phone; empty when the table is empty.
    #[instrument(skip(self))]
    pub async fn get_all_phones(&self) -> Result<Vec<phone::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        let phones = phone::list_all(&txn).await?;
        txn.commit().await?;
        Ok(phones)
    }

    #[instrument(skip(self))]
    pub async fn get_phone(&self, id: i64) -> Result<phone::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let found = existing(&txn, id).await?;
        txn.commit().await?;
        Ok(found)
    }

    /// Validate and insert; the store assigns the identity.
    #[instrument(skip(self, input))]
    pub async fn add_phone(&self, input: Option<&PhoneInput>) -> Result<phone::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let fields = phone::validate(input)?;
        let created = phone::upsert(&txn, None, fields).await?;
        txn.commit().await?;
        debug!(id = created.id, "phone added");
        Ok(created)
    }

    /// Replace brand, model and price of an existing phone.
    ///
    /// Existence is checked before the payload is validated, and the payload
    /// must not carry its own `id` even though the target comes from `id`.
    #[instrument(skip(self, input))]
    pub async fn update_phone(&self, id: i64, input: Option<&PhoneInput>) -> Result<phone::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let current = existing(&txn, id).await?;
        let fields = phone::validate(input)?;
        let updated = phone::upsert(&txn, Some(current.id), fields).await?;
        txn.commit().await?;
        debug!(id = updated.id, "phone updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_phone(&self, id: i64) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        existing(&txn, id).await?;
        let rows = phone::delete_by_id(&txn, id).await?;
        txn.commit().await?;
        debug!(id, rows, "phone deleted");
        Ok(())
    }
}

async fn existing<C: ConnectionTrait>(db: &C, id: i64) -> Result<phone::Model, ServiceError> {
    phone::get_by_id(db, id).await?.ok_or(ServiceError::NoSuchPhone(id))
}
