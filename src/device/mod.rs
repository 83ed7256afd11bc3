//! Ambient metadata about the device and browser the code is running in, gathered alongside the
//! session identifier for attribution.

mod fixed_environment;

pub use fixed_environment::FixedEnvironment;

/// Read access to the host globals device info is gathered from. In the browser these are
/// `navigator`, `window` and `document`; elsewhere they are supplied by the embedding
/// application.
pub trait HostEnvironment {
    fn user_agent(&self) -> Result<String, EnvironmentError>;

    /// Width of the viewport in CSS pixels (`window.innerWidth`).
    fn inner_width(&self) -> Result<f64, EnvironmentError>;

    /// Height of the viewport in CSS pixels (`window.innerHeight`).
    fn inner_height(&self) -> Result<f64, EnvironmentError>;

    /// The preferred locale as a BCP 47 tag such as `en-US`.
    fn language(&self) -> Result<String, EnvironmentError>;

    /// URL of the page that linked here, empty when there was none.
    fn referrer(&self) -> Result<String, EnvironmentError>;

    fn platform(&self) -> Result<String, EnvironmentError>;
}

#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub user_agent: String,
    pub screen_size: String,
    pub language: String,
    pub referrer: String,
    pub platform: String,
}

/// Reads the five device values from `env`. Nothing is cached and nothing is written.
pub fn get_device_info(env: &impl HostEnvironment) -> Result<DeviceInfo, EnvironmentError> {
    let screen_size = format_screen_size(env.inner_width()?, env.inner_height()?);

    Ok(DeviceInfo {
        user_agent: env.user_agent()?,
        screen_size,
        language: env.language()?,
        referrer: env.referrer()?,
        platform: env.platform()?,
    })
}

/// `"<width>x<height>"`, with each number rendered the way a JavaScript template string renders
/// it: whole numbers carry no fractional part, `-0` prints as `0`, and the infinities print as
/// `Infinity`/`-Infinity`.
pub fn format_screen_size(width: f64, height: f64) -> String {
    format!("{}x{}", js_number(width), js_number(height))
}

// Exponent notation for very large or tiny magnitudes is not reproduced, viewports never get there
fn js_number(value: f64) -> String {
    if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        // Covers -0.0 as well
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvironmentError {
    #[error("failed to get browser document object")]
    DocumentUnavailable,

    /// A host that isn't a browser failed in its own way.
    #[error("implementation specific error: {0}")]
    Implementation(String),

    /// The value a browser API threw, kept as-is so it can be rethrown to JavaScript unchanged.
    #[cfg(target_arch = "wasm32")]
    #[error("browser API threw: {}", crate::wasm::js_error_text(.0))]
    Js(wasm_bindgen::JsValue),

    #[error("viewport {0} was not a number")]
    NonNumericDimension(&'static str),

    #[error("failed to get browser window object")]
    WindowUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::*;

    struct BrokenEnvironment;

    impl HostEnvironment for BrokenEnvironment {
        fn user_agent(&self) -> Result<String, EnvironmentError> {
            Ok("agent".into())
        }

        fn inner_width(&self) -> Result<f64, EnvironmentError> {
            Err(EnvironmentError::NonNumericDimension("width"))
        }

        fn inner_height(&self) -> Result<f64, EnvironmentError> {
            Ok(600.0)
        }

        fn language(&self) -> Result<String, EnvironmentError> {
            Ok("en".into())
        }

        fn referrer(&self) -> Result<String, EnvironmentError> {
            Ok(String::new())
        }

        fn platform(&self) -> Result<String, EnvironmentError> {
            Ok("Linux x86_64".into())
        }
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_screen_size_formatting() {
        assert_eq!(format_screen_size(1920.0, 1080.0), "1920x1080");
        assert_eq!(format_screen_size(0.0, 0.0), "0x0");
        assert_eq!(format_screen_size(1280.5, 720.0), "1280.5x720");
        assert_eq!(format_screen_size(-0.0, 768.0), "0x768");
        assert_eq!(
            format_screen_size(f64::INFINITY, f64::NEG_INFINITY),
            "Infinityx-Infinity"
        );
        assert_eq!(format_screen_size(f64::NAN, 1.0), "NaNx1");
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_device_info_reads_every_field() {
        let env = FixedEnvironment::default()
            .with_user_agent("Mozilla/5.0 (X11; Linux x86_64)")
            .with_viewport(1440.0, 900.0)
            .with_language("de-DE")
            .with_referrer("https://example.com/landing")
            .with_platform("Linux x86_64");

        let info = get_device_info(&env).unwrap();

        assert_eq!(
            info,
            DeviceInfo {
                user_agent: "Mozilla/5.0 (X11; Linux x86_64)".into(),
                screen_size: "1440x900".into(),
                language: "de-DE".into(),
                referrer: "https://example.com/landing".into(),
                platform: "Linux x86_64".into(),
            }
        );
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_serialized_shape_has_exactly_five_fields() {
        let env = FixedEnvironment::default().with_viewport(800.0, 600.0);
        let info = get_device_info(&env).unwrap();

        let value = serde_json::to_value(&info).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["language", "platform", "referrer", "screenSize", "userAgent"]
        );
        assert_eq!(object["screenSize"], "800x600");
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_host_errors_propagate() {
        let err = get_device_info(&BrokenEnvironment).unwrap_err();
        assert!(matches!(err, EnvironmentError::NonNumericDimension("width")));
    }
}
