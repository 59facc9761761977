use color_eyre::Result;
use std::time::Duration;
use url::Url;

use crate::app::{App, AppMode, StatusToast};
use crate::content::SIGNUP_EMPTY_EMAIL;

/// How long the inline signup error stays on screen
pub const SIGNUP_ERROR_TTL: Duration = Duration::from_secs(3);

/// Appends the trimmed email as an `email` query parameter to the join form.
/// Returns `None` when there is no email to send.
pub fn build_signup_url(form_url: &str, email: &str) -> Result<Option<Url>> {
    let email = email.trim();
    if email.is_empty() {
        return Ok(None);
    }
    let mut url = Url::parse(form_url)?;
    url.query_pairs_mut().append_pair("email", email);
    Ok(Some(url))
}

impl App {
    pub fn submit_signup(&mut self) {
        match build_signup_url(&self.config.links.join_form_url, self.email_input.content()) {
            Ok(Some(url)) => {
                self.open_url(url.as_str());
                self.email_input.clear();
                self.signup_error = None;
                self.mode = AppMode::Page;
            }
            Ok(None) => self.show_signup_error(SIGNUP_EMPTY_EMAIL),
            Err(error) => {
                tracing::warn!(%error, form = %self.config.links.join_form_url, "join form link is invalid");
                self.show_status_toast("INVALID FORM LINK");
            }
        }
    }

    /// Shows the inline error; showing it again restarts its timer
    pub fn show_signup_error(&mut self, message: &str) {
        self.signup_error = Some(StatusToast::new(message));
    }

    #[must_use]
    pub fn signup_error_message(&self) -> Option<&str> {
        self.signup_error.as_ref().map(|toast| toast.message.as_str())
    }

    pub fn clear_expired_signup_error(&mut self) {
        if self
            .signup_error
            .as_ref()
            .is_some_and(|toast| toast.is_expired(SIGNUP_ERROR_TTL))
        {
            self.signup_error = None;
        }
    }

    pub fn add_email_char(&mut self, character: char) {
        self.email_input.add_char(character);
    }

    pub fn remove_email_char(&mut self) {
        self.email_input.remove_char();
    }

    pub fn leave_email_input(&mut self) {
        self.mode = AppMode::Page;
    }
}
