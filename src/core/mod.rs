pub mod codec;
pub mod store;

pub use crate::domain::model::{ItemValue, ShoeRecord};
pub use crate::domain::ports::InventorySource;
pub use crate::utils::error::Result;
