pub mod batch;
pub mod error;
pub mod record;
pub mod schema;
pub mod status;

pub use batch::{ImportBatch, RowError};
pub use error::{ImportError, Result};
pub use record::{Floor, ParsedCustomer, RawRow};
pub use schema::{FieldKind, FieldSpec, FIELDS, REQUIRED_FIELDS};
pub use status::CustomerStatus;
