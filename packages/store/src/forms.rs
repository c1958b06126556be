//! Client-side form validation for the sign-in and registration screens.
//!
//! Validation never talks to the backend; a [`FormError`] is shown to the user
//! as a "Validation Failed" notification and the request is not sent.

use serde::Serialize;

/// A form field failed client-side validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please enter a valid mobile number")]
    InvalidMobile,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please choose one of the listed categories")]
    UnknownCategory,
    #[error("Arrival time cannot be before today")]
    ArrivalInPast,
    #[error("Departure time must be after arrival time!")]
    DepartureBeforeArrival,
    #[error("`{0}` is not a valid date and time")]
    InvalidDateTime(String),
}

pub const MIN_PASSWORD_LEN: usize = 8;

/// Mobile numbers are exactly ten ASCII digits.
pub fn is_valid_mobile(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Trimmed value, or [`FormError::Required`] naming `field`.
pub fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(value.to_string())
}

/// Body of `POST /users/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub mobile_number: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub mobile_number: String,
    pub password: String,
}

impl LoginForm {
    /// Both fields are required. The password is sent as typed.
    pub fn validate(&self) -> Result<Credentials, FormError> {
        let mobile_number = required("Mobile number", &self.mobile_number)?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        Ok(Credentials {
            mobile_number,
            password: self.password.clone(),
        })
    }
}

/// Body of `POST /users/register/resident`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub apartment_number: String,
    pub mobile_number: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub apartment_number: String,
    pub mobile_number: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<Registration, FormError> {
        let apartment_number = required("Apartment number", &self.apartment_number)?;
        let mobile_number = required("Mobile number", &self.mobile_number)?;
        if !is_valid_mobile(&mobile_number) {
            return Err(FormError::InvalidMobile);
        }
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }
        if self.confirm_password.is_empty() {
            return Err(FormError::Required("Password confirmation"));
        }
        if self.confirm_password != self.password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(Registration {
            apartment_number,
            mobile_number,
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegistrationForm {
        RegistrationForm {
            apartment_number: " B-204 ".to_string(),
            mobile_number: "9876543210".to_string(),
            password: "hunter22!".to_string(),
            confirm_password: "hunter22!".to_string(),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let mut form = LoginForm::default();
        assert_eq!(form.validate(), Err(FormError::Required("Mobile number")));
        form.mobile_number = "9876543210".to_string();
        assert_eq!(form.validate(), Err(FormError::Required("Password")));
        form.password = "x".to_string();
        let credentials = form.validate().unwrap();
        assert_eq!(credentials.mobile_number, "9876543210");
    }

    #[test]
    fn test_login_payload_field_names() {
        let credentials = Credentials {
            mobile_number: "9876543210".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&credentials).unwrap();
        assert_eq!(json["mobile_number"], "9876543210");
        assert_eq!(json["password"], "secret");
    }

    #[test]
    fn test_registration_happy_path_trims_apartment() {
        let registration = registration().validate().unwrap();
        assert_eq!(registration.apartment_number, "B-204");
        assert_eq!(registration.password, "hunter22!");
    }

    #[test]
    fn test_registration_rules() {
        let mut form = registration();
        form.mobile_number = "98765".to_string();
        assert_eq!(form.validate(), Err(FormError::InvalidMobile));

        let mut form = registration();
        form.mobile_number = "98765432ab".to_string();
        assert_eq!(form.validate(), Err(FormError::InvalidMobile));

        let mut form = registration();
        form.password = "short".to_string();
        form.confirm_password = "short".to_string();
        assert_eq!(form.validate(), Err(FormError::PasswordTooShort));

        let mut form = registration();
        form.confirm_password = "hunter23!".to_string();
        assert_eq!(form.validate(), Err(FormError::PasswordMismatch));

        let mut form = registration();
        form.apartment_number = "   ".to_string();
        assert_eq!(form.validate(), Err(FormError::Required("Apartment number")));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FormError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(FormError::Required("Title").to_string(), "Title is required");
    }
}
