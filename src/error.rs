use std::fmt::{self, Display, Formatter};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use crate::device::EnvironmentError;
use crate::session::SessionIdError;
use crate::stores::StoreError;

#[derive(Debug)]
pub struct BiloSessionError(String);

impl From<&'static str> for BiloSessionError {
    fn from(val: &'static str) -> Self {
        Self(val.to_string())
    }
}

impl From<String> for BiloSessionError {
    fn from(val: String) -> Self {
        Self(val)
    }
}

impl Display for BiloSessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for BiloSessionError {}

impl From<StoreError> for BiloSessionError {
    fn from(error: StoreError) -> Self {
        Self(error.to_string())
    }
}

impl From<EnvironmentError> for BiloSessionError {
    fn from(error: EnvironmentError) -> Self {
        Self(error.to_string())
    }
}

impl From<SessionIdError> for BiloSessionError {
    fn from(error: SessionIdError) -> Self {
        Self(error.to_string())
    }
}

// Values thrown by the browser go back out untouched, everything else becomes an `Error`
#[cfg(target_arch = "wasm32")]
impl From<StoreError> for JsValue {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Js(thrown) => thrown,
            other => js_sys::Error::new(&other.to_string()).into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<EnvironmentError> for JsValue {
    fn from(error: EnvironmentError) -> Self {
        match error {
            EnvironmentError::Js(thrown) => thrown,
            other => js_sys::Error::new(&other.to_string()).into(),
        }
    }
}

pub type BiloSessionResult<T> = Result<T, BiloSessionError>;
