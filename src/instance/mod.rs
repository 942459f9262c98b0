//! Instance subsystem: attribute slots, the validated instance, and the
//! post-seeding validator.

mod slot;
mod types;
pub(crate) mod validator;

pub use slot::{AttributeSlot, SlotValue};
pub use types::Instance;
