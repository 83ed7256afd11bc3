#[cfg(all(feature = "local-store", not(target_arch = "wasm32")))]
mod local_store;
mod memory_store;
mod traits;

#[cfg(all(feature = "local-store", not(target_arch = "wasm32")))]
pub use local_store::LocalStore;
pub use memory_store::MemoryStore;
pub use traits::{KeyValueStore, StoreError};
