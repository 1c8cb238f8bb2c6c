pub mod use_inventory_status;

pub use use_inventory_status::*;
