use crate::device::{EnvironmentError, HostEnvironment};

/// A [`HostEnvironment`] backed by plain values. Native applications use it to describe
/// themselves; tests use it in place of a browser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedEnvironment {
    user_agent: String,
    inner_width: f64,
    inner_height: f64,
    language: String,
    referrer: String,
    platform: String,
}

impl FixedEnvironment {
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.inner_width = width;
        self.inner_height = height;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = referrer.into();
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }
}

impl HostEnvironment for FixedEnvironment {
    fn user_agent(&self) -> Result<String, EnvironmentError> {
        Ok(self.user_agent.clone())
    }

    fn inner_width(&self) -> Result<f64, EnvironmentError> {
        Ok(self.inner_width)
    }

    fn inner_height(&self) -> Result<f64, EnvironmentError> {
        Ok(self.inner_height)
    }

    fn language(&self) -> Result<String, EnvironmentError> {
        Ok(self.language.clone())
    }

    fn referrer(&self) -> Result<String, EnvironmentError> {
        Ok(self.referrer.clone())
    }

    fn platform(&self) -> Result<String, EnvironmentError> {
        Ok(self.platform.clone())
    }
}
