//! Ingestion collaborators: CSV loading, geography, pathology hierarchy
//!
//! Everything in this module runs before the statistics engine sees any
//! data. The engine itself consumes only the resulting
//! [`RecordCollection`](crate::models::RecordCollection) and never performs
//! I/O of its own.

pub mod geography;
pub mod hierarchy;
pub mod loader;

pub use geography::{DepartmentResolver, FrenchDepartments, UnknownDepartments};
pub use hierarchy::resolve_pathology;
pub use loader::{load_records, load_records_from_path};
