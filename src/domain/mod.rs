pub mod call_number;
pub mod order;
pub mod status;
pub mod time_slot;

pub use call_number::*;
pub use order::*;
pub use status::*;
pub use time_slot::*;
