// Note: wasm-pack test does not run any unit tests that are pub reachable from the root module, I
// think this includes the test module itself

pub mod device;
pub mod error;
pub mod session;
pub mod stores;
pub mod utils;
pub mod version;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub mod prelude {
    pub use crate::device::{get_device_info, DeviceInfo, FixedEnvironment, HostEnvironment};
    pub use crate::error::*;
    pub use crate::session::{
        generate_session_id, get_session_id, SessionId, SESSION_STORAGE_KEY,
    };
    pub use crate::stores::{KeyValueStore, MemoryStore, StoreError};
    pub use crate::version::*;

    #[cfg(all(feature = "local-store", not(target_arch = "wasm32")))]
    pub use crate::stores::LocalStore;
}
