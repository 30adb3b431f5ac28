//! Service layer holding the inventory mapping and its JSON persistence.
//! - `inventory` owns the item -> quantity map and every stock operation.
//! - `storage` contains the reusable JSON map file used for load/save.
//! - `quantity` is the typed boundary for caller-supplied quantities.

pub mod errors;
pub mod inventory;
pub mod quantity;
pub mod storage;

pub use errors::ServiceError;
pub use inventory::{InventoryStore, LoadOutcome};
pub use quantity::{parse_quantity, Quantity};
