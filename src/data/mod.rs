mod codec;
mod loader;

pub use codec::{deserialize, from_json_slice, serialize, to_json_bytes};
pub use loader::{load_store, load_store_or_default, save_store, DEFAULT_BANK_PATH};
