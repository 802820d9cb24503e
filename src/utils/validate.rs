use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("Invalid name regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// 允许的邮箱域名（按首段子串匹配，跟注册页行为一致）
const COMMON_DOMAINS: [&str; 6] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "sekolah.sch.id",
    "education.ac.id",
];

/// 密码特殊字符集合
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// 单字段校验结果
///
/// message 为空有两种情况：输入为空（尚未评估）或校验通过。
/// 空输入一律 is_valid=false，保证表单整体有效性不会被空字段放行。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCheck {
    pub is_valid: bool,
    pub message: String,
}

impl FieldCheck {
    fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }

    /// 空输入：未评估
    fn unevaluated() -> Self {
        Self {
            is_valid: false,
            message: String::new(),
        }
    }
}

/// 密码强度档位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Lemah,
    Sedang,
    Kuat,
}

impl PasswordStrength {
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Lemah => "Lemah",
            PasswordStrength::Sedang => "Sedang",
            PasswordStrength::Kuat => "Kuat",
        }
    }
}

/// 密码校验结果：有效性与强度分开返回
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordCheck {
    pub field: FieldCheck,
    pub strength: Option<PasswordStrength>,
}

/// 校验 NIP：剔除非数字字符后长度须在 8~20 位之间
pub fn validate_nip(nip: &str) -> FieldCheck {
    if nip.is_empty() {
        return FieldCheck::unevaluated();
    }

    let clean_nip: String = nip.chars().filter(|c| c.is_ascii_digit()).collect();

    if clean_nip.chars().count() < 8 {
        return FieldCheck::invalid("NIP minimal 8 digit");
    }
    if clean_nip.chars().count() > 20 {
        return FieldCheck::invalid("NIP maksimal 20 digit");
    }

    FieldCheck::valid()
}

/// 校验姓名：3~100 字符，只允许字母和空格
pub fn validate_nama(nama: &str) -> FieldCheck {
    if nama.is_empty() {
        return FieldCheck::unevaluated();
    }

    let length = nama.chars().count();
    if length < 3 {
        return FieldCheck::invalid("Nama terlalu pendek (minimal 3 karakter)");
    }
    if length > 100 {
        return FieldCheck::invalid("Nama terlalu panjang (maksimal 100 karakter)");
    }
    if !NAME_RE.is_match(nama) {
        return FieldCheck::invalid("Nama hanya boleh berisi huruf dan spasi");
    }

    FieldCheck::valid()
}

/// 校验邮箱：格式 + 常见域名白名单
pub fn validate_email(email: &str) -> FieldCheck {
    if email.is_empty() {
        return FieldCheck::unevaluated();
    }

    if email.chars().count() < 5 {
        return FieldCheck::invalid("Email terlalu pendek (minimal 5 karakter)");
    }
    if !EMAIL_RE.is_match(email) {
        return FieldCheck::invalid("Format email tidak valid (contoh: user@domain.com)");
    }

    // 域名白名单：取白名单项第一段做子串匹配
    let domain = email.split('@').nth(1).unwrap_or_default();
    let allowed = COMMON_DOMAINS.iter().any(|candidate| {
        let prefix = candidate.split('.').next().unwrap_or(candidate);
        domain.contains(prefix)
    });
    if !allowed {
        return FieldCheck::invalid("Gunakan email dari domain yang umum (gmail, yahoo, dll)");
    }

    FieldCheck::valid()
}

/// 校验密码并给出强度
///
/// 长度门槛不足 8 时直接短路为 Lemah，不进入字符类别统计；
/// 过了长度门槛后强度只由命中的字符类别数决定：<=2 Lemah、3 Sedang、4 Kuat。
pub fn validate_password(password: &str) -> PasswordCheck {
    if password.is_empty() {
        return PasswordCheck {
            field: FieldCheck::unevaluated(),
            strength: None,
        };
    }

    if password.chars().count() < 8 {
        return PasswordCheck {
            field: FieldCheck::invalid("Password minimal 8 karakter"),
            strength: Some(PasswordStrength::Lemah),
        };
    }

    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));

    let mut strength = 0;
    let mut missing = Vec::new();

    if has_lowercase {
        strength += 1;
    } else {
        missing.push("huruf kecil");
    }
    if has_uppercase {
        strength += 1;
    } else {
        missing.push("huruf besar");
    }
    if has_digit {
        strength += 1;
    } else {
        missing.push("angka");
    }
    if has_special {
        strength += 1;
    } else {
        missing.push("karakter khusus (!@#$%^&*)");
    }

    let field = if missing.is_empty() {
        FieldCheck::valid()
    } else {
        FieldCheck::invalid(format!("Password harus mengandung: {}", missing.join(", ")))
    };

    let strength = match strength {
        0..=2 => PasswordStrength::Lemah,
        3 => PasswordStrength::Sedang,
        _ => PasswordStrength::Kuat,
    };

    PasswordCheck {
        field,
        strength: Some(strength),
    }
}

/// 校验确认密码：必须与密码一致
pub fn validate_confirm_password(confirm: &str, password: &str) -> FieldCheck {
    if confirm.is_empty() {
        return FieldCheck::unevaluated();
    }
    if confirm != password {
        return FieldCheck::invalid("Password tidak cocok");
    }
    FieldCheck::valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nip_too_short() {
        let check = validate_nip("123");
        assert!(!check.is_valid);
        assert_eq!(check.message, "NIP minimal 8 digit");
    }

    #[test]
    fn test_nip_strips_non_digits() {
        // 分隔符剔除后刚好 8 位
        assert!(validate_nip("1234-5678").is_valid);
        // 剔除后只剩 3 位
        assert!(!validate_nip("abc123xyz").is_valid);
    }

    #[test]
    fn test_nip_too_long() {
        let check = validate_nip("123456789012345678901");
        assert_eq!(check.message, "NIP maksimal 20 digit");
    }

    #[test]
    fn test_nip_empty_is_unevaluated() {
        let check = validate_nip("");
        assert!(!check.is_valid);
        assert!(check.message.is_empty());
    }

    #[test]
    fn test_nama_rejects_digits() {
        let check = validate_nama("Budi123");
        assert_eq!(check.message, "Nama hanya boleh berisi huruf dan spasi");
        assert!(validate_nama("Budi Santoso").is_valid);
    }

    #[test]
    fn test_nama_length_bounds() {
        assert_eq!(
            validate_nama("Ab").message,
            "Nama terlalu pendek (minimal 3 karakter)"
        );
        let long_name = "a".repeat(101);
        assert_eq!(
            validate_nama(&long_name).message,
            "Nama terlalu panjang (maksimal 100 karakter)"
        );
    }

    #[test]
    fn test_email_format_and_domain() {
        assert!(validate_email("guru@gmail.com").is_valid);
        assert!(validate_email("staf@sekolah.sch.id").is_valid);
        assert_eq!(
            validate_email("guru@kantorku.id").message,
            "Gunakan email dari domain yang umum (gmail, yahoo, dll)"
        );
        assert_eq!(
            validate_email("bukan-email").message,
            "Format email tidak valid (contoh: user@domain.com)"
        );
    }

    #[test]
    fn test_password_empty_has_no_strength() {
        let check = validate_password("");
        assert!(!check.field.is_valid);
        assert!(check.field.message.is_empty());
        assert!(check.strength.is_none());
    }

    #[test]
    fn test_password_short_circuit_on_length() {
        let check = validate_password("Ab1!");
        assert_eq!(check.field.message, "Password minimal 8 karakter");
        assert_eq!(check.strength, Some(PasswordStrength::Lemah));
    }

    #[test]
    fn test_password_class_count_branch_independent_of_length_gate() {
        // 长度 8 过门槛，单一字符类别 -> 走类别分支，强度仍为 Lemah
        let check = validate_password("abcdefgh");
        assert!(!check.field.is_valid);
        assert!(check.field.message.contains("huruf besar"));
        assert!(check.field.message.contains("angka"));
        assert!(!check.field.message.contains("huruf kecil"));
        assert_eq!(check.strength, Some(PasswordStrength::Lemah));
    }

    #[test]
    fn test_password_strength_ladder() {
        assert_eq!(
            validate_password("abcdefG1").strength,
            Some(PasswordStrength::Sedang)
        );
        assert_eq!(
            validate_password("abcdefG1!").strength,
            Some(PasswordStrength::Kuat)
        );
        assert!(validate_password("abcdefG1!").field.is_valid);
    }

    #[test]
    fn test_confirm_password_matches() {
        assert!(validate_confirm_password("Rahasia1!", "Rahasia1!").is_valid);
        assert_eq!(
            validate_confirm_password("Rahasia1!", "RahasiaLain").message,
            "Password tidak cocok"
        );
        assert!(!validate_confirm_password("", "Rahasia1!").is_valid);
    }
}
