use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("ReDB error: {0}")]
    ReDB(#[from] redb::Error),

    #[error("Storage open error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid tab name: {0:?}")]
    InvalidTabName(String),
}

pub type Result<T> = std::result::Result<T, UserError>;
