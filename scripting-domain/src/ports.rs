// Port traits (interfaces)
// Define what the engine needs from the network and from the host client

pub mod host;
pub mod remote;

pub use host::*;
pub use remote::*;
