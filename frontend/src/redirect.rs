use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::{APPLICATION_FORM_URL, CONTACT_EMAIL};

/// External places the site hands visitors off to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectTarget {
    Contact,
    Application,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenMode {
    SameTab,
    NewTab,
}

#[derive(Error, Debug, PartialEq)]
pub enum RedirectError {
    #[error("no browser window available")]
    NoWindow,
    /// `window.open` returned no handle, usually a popup blocker.
    #[error("the browser blocked opening a new tab")]
    Blocked,
    #[error("browser error: {0}")]
    Js(String),
}

impl From<JsValue> for RedirectError {
    fn from(value: JsValue) -> Self {
        RedirectError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl RedirectTarget {
    pub fn href(&self) -> String {
        match self {
            RedirectTarget::Contact => format!("mailto:{}", CONTACT_EMAIL),
            RedirectTarget::Application => APPLICATION_FORM_URL.to_string(),
        }
    }

    /// Link text for the manual fallback.
    pub fn display_text(&self) -> &'static str {
        match self {
            RedirectTarget::Contact => CONTACT_EMAIL,
            RedirectTarget::Application => "Open Application Form",
        }
    }
}

/// Hands the visitor off to `target`. Nothing comes back from the other side.
pub fn open(target: RedirectTarget, mode: OpenMode) -> Result<(), RedirectError> {
    let window = web_sys::window().ok_or(RedirectError::NoWindow)?;
    let href = target.href();
    info!("Redirecting to {:?} ({:?})", target, mode);
    match mode {
        OpenMode::SameTab => window.location().set_href(&href)?,
        OpenMode::NewTab => {
            if window.open_with_url_and_target(&href, "_blank")?.is_none() {
                return Err(RedirectError::Blocked);
            }
        }
    }
    Ok(())
}

/// Like [`open`], but a failure only gets logged. The redirect pages always
/// show a manual link as well.
pub fn open_or_log(target: RedirectTarget, mode: OpenMode) {
    if let Err(e) = open(target, mode) {
        warn!("Redirect to {:?} failed: {}", target, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_is_a_mailto_link() {
        assert_eq!(RedirectTarget::Contact.href(), "mailto:info@tntx.org");
        assert_eq!(RedirectTarget::Contact.display_text(), "info@tntx.org");
    }

    #[test]
    fn application_points_at_the_hosted_form() {
        assert_eq!(RedirectTarget::Application.href(), APPLICATION_FORM_URL);
        assert!(RedirectTarget::Application.href().starts_with("https://"));
    }

    #[test]
    fn error_messages() {
        assert_eq!(RedirectError::NoWindow.to_string(), "no browser window available");
        assert_eq!(
            RedirectError::Js("denied".into()).to_string(),
            "browser error: denied"
        );
    }
}
