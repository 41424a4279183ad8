pub mod location;
pub mod moniker;
pub mod symbol;

pub use location::*;
pub use moniker::*;
pub use symbol::*;
