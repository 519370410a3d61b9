use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ConnectionTrait, QueryOrder};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::errors::ModelError;

/// Upper bound on `brand` and `model`, counted in UTF-16 code units.
pub const MAX_TEXT_LEN: usize = 256;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "phone")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Phone as it arrives from a client. Every field is optional so the gate,
/// not the deserializer, decides what is acceptable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneInput {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub price: f64,
}

// `"price": null` reads as an unset price.
fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

impl PhoneInput {
    pub fn new(brand: &str, model: &str, price: f64) -> Self {
        Self { id: None, brand: Some(brand.to_string()), model: Some(model.to_string()), price }
    }
}

/// Field values that passed [`validate`]. Carries no identity; the store
/// decides where they land.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PhoneFields {
    brand: String,
    model: String,
    price: f64,
}

impl PhoneFields {
    pub fn brand(&self) -> &str { &self.brand }
    pub fn model(&self) -> &str { &self.model }
    pub fn price(&self) -> f64 { self.price }
}

fn valid_text(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && v.encode_utf16().count() <= MAX_TEXT_LEN)
}

/// Check a candidate before it is written. Rules run in a fixed order and the
/// first violation is reported.
pub fn validate(candidate: Option<&PhoneInput>) -> Result<PhoneFields, ModelError> {
    let Some(phone) = candidate else {
        return Err(ModelError::Validation("candidate cannot be null".into()));
    };
    if phone.id.is_some() {
        return Err(ModelError::Validation("undefined property 'id'".into()));
    }
    let Some(model) = valid_text(phone.model.as_deref()) else {
        return Err(ModelError::Validation("incorrect value for 'model'".into()));
    };
    let Some(brand) = valid_text(phone.brand.as_deref()) else {
        return Err(ModelError::Validation("incorrect value for 'brand'".into()));
    };
    if phone.price.is_nan() || phone.price < 0.0 {
        return Err(ModelError::Validation("incorrect value for 'price'".into()));
    }
    Ok(PhoneFields { brand: brand.to_string(), model: model.to_string(), price: phone.price })
}

/// All rows in ascending identity order.
pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(ModelError::db)
}

pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(ModelError::db)
}

/// Insert when `id` is `None`, otherwise replace the whole row at `id`.
/// Returns the row as the store wrote it.
///
/// Replacing never inserts: a row that is gone by the time of the write fails
/// with [`ModelError::Db`] instead of coming back under its old identity.
pub async fn upsert<C: ConnectionTrait>(db: &C, id: Option<i64>, fields: PhoneFields) -> Result<Model, ModelError> {
    let PhoneFields { brand, model, price } = fields;
    let Some(id) = id else {
        let am = ActiveModel { id: NotSet, brand: Set(brand), model: Set(model), price: Set(price) };
        let created = am.insert(db).await.map_err(ModelError::db)?;
        debug!(id = created.id, "phone inserted");
        return Ok(created);
    };

    let am = ActiveModel { id: Unchanged(id), brand: Set(brand), model: Set(model), price: Set(price) };
    let updated = am.update(db).await.map_err(ModelError::db)?;
    debug!(id, "phone merged");
    Ok(updated)
}

/// Delete the row at `id`; returns rows affected, `0` when nothing matched.
pub async fn delete_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(ModelError::db)?;
    Ok(res.rows_affected)
}
