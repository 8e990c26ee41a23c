pub mod color_commands;
pub mod equip_commands;
pub mod visibility_commands;

pub use color_commands::*;
pub use equip_commands::*;
pub use visibility_commands::*;
