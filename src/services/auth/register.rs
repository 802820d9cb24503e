use super::AuthService;
use crate::errors::{PortalError, Result};
use crate::models::auth::requests::RegisterGuruRequest;
use crate::utils::validate::{
    FieldCheck, PasswordStrength, validate_confirm_password, validate_email, validate_nama,
    validate_nip, validate_password,
};

/// 表单字段标识
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Nip,
    NamaLengkap,
    Email,
    Password,
    ConfirmPassword,
}

/// 单个输入框的状态：值、是否触碰过、最近一次校验结果
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
    pub check: FieldCheck,
}

/// 教师注册表单的状态机
///
/// 键入只在字段已触碰后即时重校验，失焦标记触碰并校验，
/// 提交前做一轮全量校验。表单有效性每次现算，不单独缓存。
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub nip: FieldState,
    pub nama_lengkap: FieldState,
    pub email: FieldState,
    pub password: FieldState,
    pub confirm_password: FieldState,
    strength: Option<PasswordStrength>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 键入事件
    pub fn change(&mut self, field: RegistrationField, value: impl Into<String>) {
        self.field_mut(field).value = value.into();
        if self.field(field).touched {
            self.revalidate(field);
        }
        // 密码变化会牵动确认密码的比对结果
        if field == RegistrationField::Password && self.confirm_password.touched {
            self.revalidate(RegistrationField::ConfirmPassword);
        }
    }

    /// 失焦事件：标记触碰并校验
    pub fn blur(&mut self, field: RegistrationField) {
        self.field_mut(field).touched = true;
        self.revalidate(field);
    }

    fn revalidate(&mut self, field: RegistrationField) {
        match field {
            RegistrationField::Nip => {
                self.nip.check = validate_nip(&self.nip.value);
            }
            RegistrationField::NamaLengkap => {
                self.nama_lengkap.check = validate_nama(&self.nama_lengkap.value);
            }
            RegistrationField::Email => {
                self.email.check = validate_email(&self.email.value);
            }
            RegistrationField::Password => {
                let check = validate_password(&self.password.value);
                self.password.check = check.field;
                self.strength = check.strength;
            }
            RegistrationField::ConfirmPassword => {
                self.confirm_password.check =
                    validate_confirm_password(&self.confirm_password.value, &self.password.value);
            }
        }
    }

    pub fn password_strength(&self) -> Option<PasswordStrength> {
        self.strength
    }

    /// 表单有效性 = 五个字段当前有效位的与
    pub fn is_form_valid(&self) -> bool {
        self.nip.check.is_valid
            && self.nama_lengkap.check.is_valid
            && self.email.check.is_valid
            && self.password.check.is_valid
            && self.confirm_password.check.is_valid
    }

    /// 提交前的全量校验：所有字段标记触碰并重新校验
    pub fn validate_all(&mut self) -> bool {
        for field in [
            RegistrationField::Nip,
            RegistrationField::NamaLengkap,
            RegistrationField::Email,
            RegistrationField::Password,
            RegistrationField::ConfirmPassword,
        ] {
            self.field_mut(field).touched = true;
            self.revalidate(field);
        }
        self.is_form_valid()
    }

    pub fn to_request(&self) -> RegisterGuruRequest {
        RegisterGuruRequest {
            nip: self.nip.value.clone(),
            nama_lengkap: self.nama_lengkap.value.clone(),
            email: self.email.value.clone(),
            password: self.password.value.clone(),
            confirm_password: self.confirm_password.value.clone(),
        }
    }

    /// 提交成功后清空
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn field(&self, field: RegistrationField) -> &FieldState {
        match field {
            RegistrationField::Nip => &self.nip,
            RegistrationField::NamaLengkap => &self.nama_lengkap,
            RegistrationField::Email => &self.email,
            RegistrationField::Password => &self.password,
            RegistrationField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn field_mut(&mut self, field: RegistrationField) -> &mut FieldState {
        match field {
            RegistrationField::Nip => &mut self.nip,
            RegistrationField::NamaLengkap => &mut self.nama_lengkap,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Password => &mut self.password,
            RegistrationField::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

pub async fn register_guru(service: &AuthService, form: &mut RegistrationForm) -> Result<()> {
    // 提交前再整体校验一遍，挡住绕过输入事件的脏状态
    if !form.validate_all() {
        return Err(PortalError::validation(
            "Mohon perbaiki semua field yang tidak valid",
        ));
    }

    let request = form.to_request();
    service.backend().register_guru(&request).await?;

    tracing::info!("registrasi guru berhasil");
    form.reset();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::FakeBackend;

    fn fill_valid(form: &mut RegistrationForm) {
        form.change(RegistrationField::Nip, "198309520060402");
        form.change(RegistrationField::NamaLengkap, "Fika Hastarita");
        form.change(RegistrationField::Email, "fika@gmail.com");
        form.change(RegistrationField::Password, "Rahasia1!");
        form.change(RegistrationField::ConfirmPassword, "Rahasia1!");
    }

    #[test]
    fn test_short_nip_invalidates_form() {
        let mut form = RegistrationForm::new();
        form.change(RegistrationField::Nip, "123");
        form.blur(RegistrationField::Nip);

        assert_eq!(form.nip.check.message, "NIP minimal 8 digit");
        assert!(!form.is_form_valid());
    }

    #[test]
    fn test_change_before_blur_does_not_validate() {
        let mut form = RegistrationForm::new();
        form.change(RegistrationField::Email, "salah");
        // 还没触碰过：不显示错误
        assert!(form.email.check.message.is_empty());

        form.blur(RegistrationField::Email);
        assert!(!form.email.check.message.is_empty());
    }

    #[test]
    fn test_password_change_revalidates_confirmation() {
        let mut form = RegistrationForm::new();
        form.change(RegistrationField::Password, "Rahasia1!");
        form.blur(RegistrationField::Password);
        form.change(RegistrationField::ConfirmPassword, "Rahasia1!");
        form.blur(RegistrationField::ConfirmPassword);
        assert!(form.confirm_password.check.is_valid);

        // 改掉密码，确认密码立即失配
        form.change(RegistrationField::Password, "PasswordBaru1!");
        assert!(!form.confirm_password.check.is_valid);
        assert_eq!(form.confirm_password.check.message, "Password tidak cocok");
    }

    #[test]
    fn test_form_valid_only_when_all_five_fields_valid() {
        let mut form = RegistrationForm::new();
        fill_valid(&mut form);
        assert!(form.validate_all());

        form.change(RegistrationField::Email, "fika@kantorku.id");
        assert!(!form.validate_all());
    }

    #[test]
    fn test_strength_follows_latest_password() {
        let mut form = RegistrationForm::new();
        form.blur(RegistrationField::Password);
        assert!(form.password_strength().is_none());

        form.change(RegistrationField::Password, "abcdefG1");
        assert_eq!(form.password_strength(), Some(PasswordStrength::Sedang));
        form.change(RegistrationField::Password, "abcdefG1!");
        assert_eq!(form.password_strength(), Some(PasswordStrength::Kuat));
    }

    #[tokio::test]
    async fn test_register_rejected_when_invalid() {
        let backend = Arc::new(FakeBackend::default());
        let service = AuthService::new(backend.clone());
        let mut form = RegistrationForm::new();
        form.change(RegistrationField::Nip, "123");

        let err = service.register_guru(&mut form).await.unwrap_err();
        assert_eq!(err.message(), "Mohon perbaiki semua field yang tidak valid");
        assert!(backend.registered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_success_resets_form() {
        let backend = Arc::new(FakeBackend::default());
        let service = AuthService::new(backend.clone());
        let mut form = RegistrationForm::new();
        fill_valid(&mut form);

        service.register_guru(&mut form).await.unwrap();

        let registered = backend.registered.lock().unwrap();
        assert_eq!(registered.len(), 1);
        assert_eq!(registered[0].nip, "198309520060402");
        // 成功后表单回到初始状态
        assert!(form.nip.value.is_empty());
        assert!(!form.is_form_valid());
    }
}
