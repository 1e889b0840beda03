pub mod catalog;
pub mod firebase;
pub mod models;

pub use catalog::{CatalogLister, StorageBackend, StorageCatalog};
pub use firebase::FirebaseStorage;
pub use models::*;

/// The catalog the app runs against.
pub type Catalog = StorageCatalog<FirebaseStorage>;
