//! Form state for the sign-in / sign-up pane
//!
//! `FormState` is a plain value: every UI transition is a method on it, so the
//! whole pane can be driven and inspected without a renderer.

use super::auth::Credentials;
use super::validation::{ValidationError, validate_form};

/// Which of the two panes is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormMode {
    #[default]
    SignIn,
    SignUp,
}

impl FormMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMode::SignIn => "sign_in",
            FormMode::SignUp => "sign_up",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormMode::SignIn => "Sign In",
            FormMode::SignUp => "Sign Up",
        }
    }

    /// Fields rendered by this form, in tree order
    pub fn fields(&self) -> &'static [Field] {
        match self {
            FormMode::SignIn => &[Field::Email, Field::Password],
            FormMode::SignUp => &[Field::Username, Field::Email, Field::Password],
        }
    }
}

/// A single input inside one of the forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    /// `name` attribute of the input
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }
}

/// Not-yet-submitted values of one form
///
/// The sign-in draft keeps an (unused) username slot so both forms share one shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialDraft {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl CredentialDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}

/// Complete transient state of one mounted pane
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    mode: FormMode,
    sign_in: CredentialDraft,
    sign_up: CredentialDraft,
    sign_in_visible: bool,
    sign_up_visible: bool,
}

impl FormState {
    /// Sign-in mode, empty drafts, both passwords masked
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_active(&self, form: FormMode) -> bool {
        self.mode == form
    }

    pub fn activate_sign_up(&mut self) {
        self.mode = FormMode::SignUp;
    }

    pub fn activate_sign_in(&mut self) {
        self.mode = FormMode::SignIn;
    }

    pub fn draft(&self, form: FormMode) -> &CredentialDraft {
        match form {
            FormMode::SignIn => &self.sign_in,
            FormMode::SignUp => &self.sign_up,
        }
    }

    fn draft_mut(&mut self, form: FormMode) -> &mut CredentialDraft {
        match form {
            FormMode::SignIn => &mut self.sign_in,
            FormMode::SignUp => &mut self.sign_up,
        }
    }

    /// Overwrite one field of one form's draft
    pub fn set_field(&mut self, form: FormMode, field: Field, value: impl Into<String>) {
        *self.draft_mut(form).slot_mut(field) = value.into();
    }

    pub fn set_password(&mut self, form: FormMode, value: impl Into<String>) {
        self.set_field(form, Field::Password, value);
    }

    pub fn set_email(&mut self, form: FormMode, value: impl Into<String>) {
        self.set_field(form, Field::Email, value);
    }

    /// Only the sign-up form has a username input
    pub fn set_username(&mut self, value: impl Into<String>) {
        self.set_field(FormMode::SignUp, Field::Username, value);
    }

    pub fn is_visible(&self, form: FormMode) -> bool {
        match form {
            FormMode::SignIn => self.sign_in_visible,
            FormMode::SignUp => self.sign_up_visible,
        }
    }

    pub fn toggle_visibility(&mut self, form: FormMode) {
        let flag = match form {
            FormMode::SignIn => &mut self.sign_in_visible,
            FormMode::SignUp => &mut self.sign_up_visible,
        };
        *flag = !*flag;
    }

    /// The show/hide control exists only while there is something to reveal
    pub fn toggle_available(&self, form: FormMode) -> bool {
        !self.draft(form).password.is_empty()
    }

    /// `type` attribute of the password input
    pub fn input_type(&self, form: FormMode) -> &'static str {
        if self.is_visible(form) {
            "text"
        } else {
            "password"
        }
    }

    /// Check the form's constraints and, if they hold, capture its credentials
    ///
    /// Returns the first failing field in tree order. State is never modified.
    pub fn submit(&self, form: FormMode) -> Result<Credentials, ValidationError> {
        let draft = self.draft(form);
        validate_form(form, draft).to_result()?;
        Ok(Credentials::from_draft(form, draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = FormState::new();
        assert_eq!(state.mode(), FormMode::SignIn);
        assert_eq!(state.draft(FormMode::SignIn).password, "");
        assert_eq!(state.draft(FormMode::SignUp).password, "");
        assert!(!state.is_visible(FormMode::SignIn));
        assert!(!state.is_visible(FormMode::SignUp));
    }

    #[test]
    fn test_mode_last_write_wins() {
        let mut state = FormState::new();
        state.activate_sign_up();
        state.activate_sign_up();
        assert_eq!(state.mode(), FormMode::SignUp);

        state.activate_sign_in();
        assert_eq!(state.mode(), FormMode::SignIn);

        state.activate_sign_in();
        assert!(state.is_active(FormMode::SignIn));
        assert!(!state.is_active(FormMode::SignUp));
    }

    #[test]
    fn test_mode_switch_keeps_drafts() {
        let mut state = FormState::new();
        state.set_password(FormMode::SignIn, "secret");
        state.activate_sign_up();
        state.activate_sign_in();
        assert_eq!(state.draft(FormMode::SignIn).password, "secret");
    }

    #[test]
    fn test_toggle_visibility_is_isolated() {
        let mut state = FormState::new();
        state.toggle_visibility(FormMode::SignIn);
        assert!(state.is_visible(FormMode::SignIn));
        assert!(!state.is_visible(FormMode::SignUp));

        state.toggle_visibility(FormMode::SignUp);
        state.toggle_visibility(FormMode::SignIn);
        assert!(!state.is_visible(FormMode::SignIn));
        assert!(state.is_visible(FormMode::SignUp));
    }

    #[test]
    fn test_set_password_reads_back() {
        let mut state = FormState::new();
        for value in ["", "a", "Passw0rd!", "with space", "пароль"] {
            state.set_password(FormMode::SignUp, value);
            assert_eq!(state.draft(FormMode::SignUp).password, value);
        }
        assert_eq!(state.draft(FormMode::SignIn).password, "");
    }

    #[test]
    fn test_toggle_available_follows_password() {
        let mut state = FormState::new();
        assert!(!state.toggle_available(FormMode::SignIn));

        state.set_password(FormMode::SignIn, "a");
        assert!(state.toggle_available(FormMode::SignIn));
        assert!(!state.toggle_available(FormMode::SignUp));

        state.set_password(FormMode::SignIn, "");
        assert!(!state.toggle_available(FormMode::SignIn));
    }

    #[test]
    fn test_input_type() {
        let mut state = FormState::new();
        assert_eq!(state.input_type(FormMode::SignUp), "password");
        state.toggle_visibility(FormMode::SignUp);
        assert_eq!(state.input_type(FormMode::SignUp), "text");
        assert_eq!(state.input_type(FormMode::SignIn), "password");
    }

    #[test]
    fn test_fields_are_tracked_uniformly() {
        let mut state = FormState::new();
        state.set_username("ana");
        state.set_email(FormMode::SignUp, "ana@example.com");
        state.set_email(FormMode::SignIn, "other@example.com");

        let draft = state.draft(FormMode::SignUp);
        assert_eq!(draft.get(Field::Username), "ana");
        assert_eq!(draft.get(Field::Email), "ana@example.com");
        assert_eq!(state.draft(FormMode::SignIn).username, "");
    }

    #[test]
    fn test_fields_in_tree_order() {
        assert_eq!(FormMode::SignIn.fields(), &[Field::Email, Field::Password]);
        assert_eq!(
            FormMode::SignUp.fields(),
            &[Field::Username, Field::Email, Field::Password]
        );
    }
}
