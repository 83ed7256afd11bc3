/// The persistence seam for the session identifier. Modeled on the browser's `localStorage`: a
/// flat, synchronous map from string keys to string values that survives page reloads.
///
/// Implementors must not translate or swallow failures of the backing storage. Callers of
/// [`crate::session::get_session_id`] expect to see exactly what went wrong underneath.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if nothing has been stored there.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing anything previously stored. The value is expected to
    /// be readable through [`KeyValueStore::get_item`] as soon as this call returns.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An error that couldn't be represented by one of the standard error types, representing some
    /// kind of error specific to the underlying implementation.
    #[error("implementation specific error: {0}")]
    Implementation(String),

    /// The key can't be represented by this store. Only raised by stores that map keys onto
    /// something more restrictive than an arbitrary string, such as file names.
    #[error("key is not valid for this store: {0:?}")]
    InvalidKey(String),

    /// Failure of a file backed store, exactly as the OS reported it.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The value `localStorage` threw. Kept as-is so it can be rethrown to JavaScript callers
    /// unchanged (a `QuotaExceededError` stays a `DOMException` named `QuotaExceededError`).
    #[cfg(target_arch = "wasm32")]
    #[error("storage threw: {}", crate::wasm::js_error_text(.0))]
    Js(wasm_bindgen::JsValue),

    /// `localStorage` is disabled or absent in this browsing context.
    #[error("persistent storage isn't available or has been disabled")]
    StorageUnavailable,

    #[error("failed to get browser window object")]
    WindowUnavailable,
}
