//! PostgreSQL implementation for tablegen-db

mod pool;
mod row;
mod types;

pub use pool::PgPool;
pub use row::PgRow;
