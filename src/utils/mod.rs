pub mod validate;

pub use validate::{
    FieldCheck, PasswordCheck, PasswordStrength, validate_confirm_password, validate_email,
    validate_nama, validate_nip, validate_password,
};
