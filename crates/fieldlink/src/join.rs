mod index;
pub use index::KeyIndex;

mod key;
pub use key::{derive_keys, usable_keys, FieldRef, KeyOptions, KEY_DELIMITER};
