// File: src/forms/auth.rs
// Purpose: Login and signup forms, and the modal that switches between them

use innkeep_validation::{form_fields, rules, FieldValue, FormValues, PasswordStrength, RuleSet, Validate};
use serde::{Deserialize, Serialize};

use super::patterns::PHONE;
use super::{Editable, FieldInput, FormKind};
use crate::form_state::FormState;

/// Which form the auth modal shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in",
            AuthMode::Signup => "Create an account",
        }
    }
}

/// Sign-in dialog; each side keeps what was typed while the other is shown
#[derive(Debug, Clone, Default)]
pub struct AuthModal {
    mode: AuthMode,
    login: FormState<LoginForm>,
    signup: FormState<SignupForm>,
}

impl AuthModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggle();
    }

    pub fn login(&self) -> &FormState<LoginForm> {
        &self.login
    }

    pub fn login_mut(&mut self) -> &mut FormState<LoginForm> {
        &mut self.login
    }

    pub fn signup(&self) -> &FormState<SignupForm> {
        &self.signup
    }

    pub fn signup_mut(&mut self) -> &mut FormState<SignupForm> {
        &mut self.signup
    }
}

form_fields! {
    pub enum LoginField {
        Email => "email",
        Password => "password",
        RememberMe => "rememberMe",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl FormValues<LoginField> for LoginForm {
    fn value(&self, field: LoginField) -> FieldValue<'_> {
        match field {
            LoginField::Email => FieldValue::from(&self.email),
            LoginField::Password => FieldValue::from(&self.password),
            LoginField::RememberMe => FieldValue::from(self.remember_me),
        }
    }
}

impl Validate for LoginForm {
    type Field = LoginField;

    fn rules(&self) -> RuleSet<LoginField> {
        RuleSet::new()
            .field(
                LoginField::Email,
                [
                    rules::required("Email is required"),
                    rules::email("Enter a valid email address"),
                ],
            )
            .field(
                LoginField::Password,
                [
                    rules::required("Password is required"),
                    rules::min_length(6, "Password must be at least 6 characters"),
                ],
            )
    }
}

impl Editable for LoginForm {
    fn apply(&mut self, field: LoginField, input: FieldInput) {
        match field {
            LoginField::Email => self.email = input.into_text(),
            LoginField::Password => self.password = input.into_text(),
            LoginField::RememberMe => self.remember_me = input.into_flag(),
        }
    }
}

impl FormKind for LoginForm {
    const KIND: &'static str = "login";
    const LABEL: &'static str = "Login";
}

form_fields! {
    pub enum SignupField {
        FullName => "fullName",
        Email => "email",
        Phone => "phone",
        Password => "password",
        ConfirmPassword => "confirmPassword",
        AcceptTerms => "acceptTerms",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl FormValues<SignupField> for SignupForm {
    fn value(&self, field: SignupField) -> FieldValue<'_> {
        match field {
            SignupField::FullName => FieldValue::from(&self.full_name),
            SignupField::Email => FieldValue::from(&self.email),
            SignupField::Phone => FieldValue::from(&self.phone),
            SignupField::Password => FieldValue::from(&self.password),
            SignupField::ConfirmPassword => FieldValue::from(&self.confirm_password),
            SignupField::AcceptTerms => FieldValue::from(self.accept_terms),
        }
    }
}

impl Validate for SignupForm {
    type Field = SignupField;

    fn rules(&self) -> RuleSet<SignupField> {
        RuleSet::new()
            .field(
                SignupField::FullName,
                [
                    rules::required("Full name is required"),
                    rules::min_length(2, "Name must be at least 2 characters"),
                    rules::max_length(80, "Name must be at most 80 characters"),
                ],
            )
            .field(
                SignupField::Email,
                [
                    rules::required("Email is required"),
                    rules::email("Enter a valid email address"),
                ],
            )
            .field(
                SignupField::Phone,
                [
                    rules::required("Phone number is required"),
                    rules::pattern(&PHONE, "Phone number must be 10 digits"),
                ],
            )
            .field(
                SignupField::Password,
                [
                    rules::required("Password is required"),
                    rules::password(PasswordStrength::Medium),
                ],
            )
            .field(
                SignupField::ConfirmPassword,
                [rules::matches(SignupField::Password, "Passwords do not match")],
            )
            .field(
                SignupField::AcceptTerms,
                [rules::custom("You must accept the terms and conditions", |value| {
                    *value == FieldValue::Flag(true)
                })],
            )
    }
}

impl Editable for SignupForm {
    fn apply(&mut self, field: SignupField, input: FieldInput) {
        match field {
            SignupField::FullName => self.full_name = input.into_text(),
            SignupField::Email => self.email = input.into_text(),
            SignupField::Phone => self.phone = input.into_text(),
            SignupField::Password => self.password = input.into_text(),
            SignupField::ConfirmPassword => self.confirm_password = input.into_text(),
            SignupField::AcceptTerms => self.accept_terms = input.into_flag(),
        }
    }
}

impl FormKind for SignupForm {
    const KIND: &'static str = "signup";
    const LABEL: &'static str = "Account";
}
