// Domain value objects
pub mod access_level;
pub mod equip_slot;
pub mod identifiers;
pub mod resource;

pub use access_level::*;
pub use equip_slot::*;
pub use identifiers::*;
pub use resource::*;
