//! Innkeep Validation Core
//!
//! Rule-based validation for the innkeep forms. A form declares its fields as
//! an enum (see [`form_fields!`]), exposes field values through
//! [`FormValues`], and builds a [`RuleSet`] of predicate + message pairs.
//! [`validate_form`] reports the first failing message per field.
//!
//! ```rust
//! use innkeep_validation::{form_fields, rules, FieldValue, FormValues, RuleSet, validate_form};
//!
//! form_fields! {
//!     pub enum LoginField {
//!         Email => "email",
//!         Password => "password",
//!     }
//! }
//!
//! struct Login { email: String, password: String }
//!
//! impl FormValues<LoginField> for Login {
//!     fn value(&self, field: LoginField) -> FieldValue<'_> {
//!         match field {
//!             LoginField::Email => FieldValue::from(&self.email),
//!             LoginField::Password => FieldValue::from(&self.password),
//!         }
//!     }
//! }
//!
//! let rules = RuleSet::new()
//!     .field(LoginField::Email, [rules::required("Email is required"), rules::email("Invalid email")])
//!     .field(LoginField::Password, [rules::required("Password is required")]);
//!
//! let login = Login { email: "guest@".into(), password: String::new() };
//! let errors = validate_form(&login, &rules);
//! assert_eq!(errors.get(LoginField::Email), Some("Invalid email"));
//! assert_eq!(errors.get(LoginField::Password), Some("Password is required"));
//! ```

pub mod email;
pub mod errors;
pub mod numeric;
pub mod password;
pub mod rule;
pub mod rules;
pub mod string;
pub mod touched;
pub mod value;

pub use errors::ValidationErrors;
pub use password::PasswordStrength;
pub use rule::{validate_form, Rule, RuleSet};
pub use touched::TouchedState;
pub use value::{FieldId, FieldValue, FormValues};

/// Core validation trait that all forms implement
///
/// The rule set is rebuilt from the current values on every call, so a form
/// can include or drop a field's rules depending on other fields.
pub trait Validate: FormValues<Self::Field> + Sized {
    /// Field identifiers of this form
    type Field: FieldId;

    /// Active rules for the current state of the form
    fn rules(&self) -> RuleSet<Self::Field>;

    /// Run every active rule and collect the first failure per field
    fn errors(&self) -> ValidationErrors<Self::Field> {
        validate_form(self, &self.rules())
    }

    /// Validate the form, returning the errors when any field fails
    fn validate(&self) -> Result<(), ValidationErrors<Self::Field>> {
        self.errors().into_result()
    }
}

/// Declare a form's field enum together with its external field names.
///
/// Generates the enum, its [`FieldId`] impl and a `Display` impl that prints
/// the external name.
#[macro_export]
macro_rules! form_fields {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::FieldId for $name {
            const ALL: &'static [Self] = &[ $( $name::$variant ),+ ];

            fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::FieldId::name(*self))
            }
        }
    };
}
