//! Sign-in form controller.
//!
//! The controller is deliberately stateless: the embedding container owns
//! the field values and the business effects, and hands the controller a
//! snapshot of [`LoginValues`] plus a [`LoginActions`] sink on every
//! interaction. The controller's job is the protocol, not the state:
//!
//! - the validity predicate over the snapshot,
//! - the submit rule (invalid forms get flagged, valid forms clear any
//!   pending error and hand off),
//! - the keyboard contract (Enter anywhere in the form submits and the
//!   host suppresses the default submission),
//! - forwarding input, focus, and link events to the container.
//!
//! Rendering stays with the host. [`link_layout`] describes the one
//! layout decision that depends on the device class, and the label
//! helpers carry the platform's default wording.

use tracing::debug;

use crate::email::is_valid_email;

/// A form field, for focus tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Container-owned form state, snapshotted for the controller on each
/// interaction. Errors are display strings; empty means no error shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginValues {
    pub email: String,
    pub email_error: String,
    pub password: String,
    pub password_error: String,
    pub email_focused: bool,
    pub password_focused: bool,
    /// Set while the container runs the authentication call.
    pub loading: bool,
}

/// Effects the controller can trigger on the container. One-way: no
/// return values flow back into the controller.
pub trait LoginActions {
    /// The email field changed.
    fn change_email(&mut self, value: &str);
    /// The password field changed.
    fn change_password(&mut self, value: &str);
    /// A field received focus.
    fn focus_field(&mut self, field: LoginField);
    /// A submit was attempted on an invalid form; surface field errors.
    fn mark_invalid(&mut self);
    /// A valid submit is about to run; drop any stale error.
    fn clear_error(&mut self);
    /// The forgot-password link was activated, carrying the current email.
    fn forgot_password(&mut self, email: &str);
    /// The create-account link was activated.
    fn sign_up(&mut self);
    /// Run the sign-in call.
    fn sign_in(&mut self);
}

/// The stateless controller over one snapshot of form values.
#[derive(Debug, Clone, Copy)]
pub struct LoginForm<'a> {
    values: &'a LoginValues,
}

impl<'a> LoginForm<'a> {
    pub fn new(values: &'a LoginValues) -> Self {
        Self { values }
    }

    /// The submit predicate: a non-empty email matching the canonical
    /// pattern and a non-empty password.
    pub fn is_valid(&self) -> bool {
        !self.values.email.is_empty()
            && is_valid_email(&self.values.email)
            && !self.values.password.is_empty()
    }

    /// Whether the submit control renders disabled. Re-evaluated from the
    /// snapshot on every render; independent of the submit protocol, so a
    /// submit that arrives anyway (keyboard, programmatic) still goes
    /// through [`LoginForm::submit`].
    pub fn submit_disabled(&self) -> bool {
        self.values.loading
            || !is_valid_email(&self.values.email)
            || self.values.password.is_empty()
    }

    /// The submit protocol. An invalid form is only flagged; a valid form
    /// clears any pending error before handing off to the container.
    pub fn submit(&self, actions: &mut dyn LoginActions) {
        if !self.is_valid() {
            debug!("sign-in submit rejected by validation");
            actions.mark_invalid();
        } else {
            actions.clear_error();
            actions.sign_in();
        }
    }

    /// The keyboard contract: Enter anywhere in the form submits. Returns
    /// whether the event was consumed; the host must suppress the default
    /// form submission when it was.
    pub fn key_pressed(&self, key: &str, actions: &mut dyn LoginActions) -> bool {
        if key == "Enter" {
            self.submit(actions);
            return true;
        }
        false
    }

    /// Forward an email edit to the container.
    pub fn email_input(&self, value: &str, actions: &mut dyn LoginActions) {
        actions.change_email(value);
    }

    /// Forward a password edit to the container.
    pub fn password_input(&self, value: &str, actions: &mut dyn LoginActions) {
        actions.change_password(value);
    }

    /// Forward a focus change to the container.
    pub fn focus_changed(&self, field: LoginField, actions: &mut dyn LoginActions) {
        actions.focus_field(field);
    }

    /// Forward the forgot-password link, carrying the current email so
    /// the recovery flow can prefill it.
    pub fn forgot_password(&self, actions: &mut dyn LoginActions) {
        actions.forgot_password(&self.values.email);
    }

    /// Forward the create-account link.
    pub fn sign_up(&self, actions: &mut dyn LoginActions) {
        actions.sign_up();
    }
}

/// Placement of the auxiliary links around the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkLayout {
    /// Forgot-password and create-account links render above the submit
    /// control (mobile) instead of below it (desktop).
    pub links_above_submit: bool,
    /// A register prompt renders below the submit control (mobile only).
    pub register_prompt: bool,
}

/// The device-class layout branch. Mobile hosts move the link row above
/// the submit control and add the register prompt below it.
pub fn link_layout(is_mobile: bool) -> LinkLayout {
    LinkLayout {
        links_above_submit: is_mobile,
        register_prompt: is_mobile,
    }
}

/// Submit-control label: the loading indicator wins, then the container's
/// label, then the platform default.
pub fn submit_label(loading: bool, custom: Option<&str>) -> &str {
    if loading {
        return "Loading...";
    }
    match custom {
        Some(label) if !label.is_empty() => label,
        _ => "Entrar",
    }
}

/// Email field label, with the platform default.
pub fn email_label(custom: Option<&str>) -> &str {
    match custom {
        Some(label) if !label.is_empty() => label,
        _ => "Digite seu email",
    }
}

/// Password field label, with the platform default.
pub fn password_label(custom: Option<&str>) -> &str {
    match custom {
        Some(label) if !label.is_empty() => label,
        _ => "Password",
    }
}
