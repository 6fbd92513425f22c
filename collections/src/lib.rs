pub mod error;
pub mod unique_deque;

pub use self::error::{Error, Result};
pub use self::unique_deque::{erase, erase_if, UniqueDeque};
