mod account;
mod holder;

pub use account::{Account, Branch};
pub use holder::Holder;
