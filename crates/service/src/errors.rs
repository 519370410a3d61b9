use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    /// Candidate rejected by validation; displays the reason as-is.
    #[error("{0}")]
    IncorrectData(String),
    #[error("there is no phone with id = {0}")]
    NoSuchPhone(i64),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    /// Short stable name used in logs and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::IncorrectData(_) => "incorrect_data",
            ServiceError::NoSuchPhone(_) => "no_such_phone",
            ServiceError::Db(_) => "store_failure",
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(reason) => ServiceError::IncorrectData(reason),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceError::Db(e.to_string())
    }
}
