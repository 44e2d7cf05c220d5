//! Account repository port and the in-memory implementation used in tests.

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;

pub use mock::MockAccountRepository;
pub use r#trait::AccountRepository;
