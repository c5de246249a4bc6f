//! Localized UI text. Handlers pick a catalog once and translate provider
//! failures through it; raw provider text only reaches the user behind a
//! generic prefix.

use super::error::{AuthErrorKind, ProviderError};

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Thai,
    English,
}

impl Locale {
    /// Accepts BCP 47 style tags (`th`, `th-TH`, `en_US`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let language = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match language.as_str() {
            "th" => Some(Self::Thai),
            "en" => Some(Self::English),
            _ => None,
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Self::Thai => &THAI,
            Self::English => &ENGLISH,
        }
    }
}

/// One language's UI strings.
#[derive(Debug)]
pub struct Messages {
    pub missing_credentials: &'static str,
    pub missing_reset_email: &'static str,

    pub register_success: &'static str,
    pub register_error_prefix: &'static str,
    pub email_already_in_use: &'static str,
    pub weak_password: &'static str,

    pub sign_in_success: &'static str,
    pub sign_in_error_prefix: &'static str,
    pub invalid_credentials: &'static str,

    pub sign_out_success: &'static str,
    pub sign_out_error_prefix: &'static str,

    pub reset_sent_prefix: &'static str,
    pub reset_sent_suffix: &'static str,
    pub reset_error_prefix: &'static str,
    pub no_such_user: &'static str,

    pub title_signed_in: &'static str,
    pub title_signed_out: &'static str,
    pub main_heading: &'static str,
    pub email_label: &'static str,
    pub password_label: &'static str,
    pub register_button: &'static str,
    pub sign_in_button: &'static str,
    pub reset_button: &'static str,
    pub sign_out_button: &'static str,
    pub back_button: &'static str,
    pub close_button: &'static str,
}

pub static THAI: Messages = Messages {
    missing_credentials: "กรุณากรอกอีเมลและรหัสผ่าน",
    missing_reset_email: "กรุณากรอกอีเมลที่ต้องการรีเซ็ตรหัสผ่าน",

    register_success: "สมัครสมาชิกสำเร็จ! ยินดีต้อนรับ 🎉",
    register_error_prefix: "เกิดข้อผิดพลาดในการสมัครสมาชิก: ",
    email_already_in_use: "อีเมลนี้ถูกใช้แล้ว ลองเข้าสู่ระบบ",
    weak_password: "รหัสผ่านต้องมีความยาวอย่างน้อย 6 ตัวอักษร",

    sign_in_success: "เข้าสู่ระบบสำเร็จ!",
    sign_in_error_prefix: "เกิดข้อผิดพลาดในการเข้าสู่ระบบ: ",
    invalid_credentials: "อีเมลหรือรหัสผ่านไม่ถูกต้อง",

    sign_out_success: "ออกจากระบบสำเร็จแล้ว 👋",
    sign_out_error_prefix: "เกิดข้อผิดพลาดในการออกจากระบบ: ",

    reset_sent_prefix: "ส่งลิงก์รีเซ็ตรหัสผ่านไปยัง ",
    reset_sent_suffix: " แล้ว",
    reset_error_prefix: "เกิดข้อผิดพลาดในการส่งอีเมลรีเซ็ตรหัสผ่าน: ",
    no_such_user: "ไม่พบผู้ใช้นี้",

    title_signed_in: "ข้อมูลผู้ใช้",
    title_signed_out: "เข้าสู่ระบบ / สมัครสมาชิก",
    main_heading: "หน้าหลัก",
    email_label: "อีเมล",
    password_label: "รหัสผ่าน",
    register_button: "สมัครสมาชิก",
    sign_in_button: "เข้าสู่ระบบ",
    reset_button: "ลืมรหัสผ่าน",
    sign_out_button: "ออกจากระบบ",
    back_button: "กลับ",
    close_button: "ปิด",
};

pub static ENGLISH: Messages = Messages {
    missing_credentials: "Please enter your email and password.",
    missing_reset_email: "Please enter the email to reset the password for.",

    register_success: "Registration successful! Welcome 🎉",
    register_error_prefix: "Registration failed: ",
    email_already_in_use: "This email is already in use. Try signing in.",
    weak_password: "Password must be at least 6 characters long.",

    sign_in_success: "Signed in successfully!",
    sign_in_error_prefix: "Sign-in failed: ",
    invalid_credentials: "Invalid email or password.",

    sign_out_success: "Signed out successfully 👋",
    sign_out_error_prefix: "Sign-out failed: ",

    reset_sent_prefix: "A password reset link was sent to ",
    reset_sent_suffix: ".",
    reset_error_prefix: "Failed to send the password reset email: ",
    no_such_user: "No user found with this email.",

    title_signed_in: "Your account",
    title_signed_out: "Sign in / Register",
    main_heading: "Home",
    email_label: "Email",
    password_label: "Password",
    register_button: "Register",
    sign_in_button: "Sign in",
    reset_button: "Forgot password",
    sign_out_button: "Sign out",
    back_button: "Back",
    close_button: "Close",
};

impl Messages {
    /// Confirmation shown after a reset email was requested.
    pub fn reset_sent(&self, email: &str) -> String {
        format!("{}{email}{}", self.reset_sent_prefix, self.reset_sent_suffix)
    }

    pub fn register_failed(&self, err: &ProviderError) -> String {
        match err.kind {
            AuthErrorKind::EmailAlreadyInUse => self.email_already_in_use.to_string(),
            AuthErrorKind::WeakPassword => self.weak_password.to_string(),
            _ => generic(self.register_error_prefix, err),
        }
    }

    pub fn sign_in_failed(&self, err: &ProviderError) -> String {
        match err.kind {
            AuthErrorKind::UserNotFound
            | AuthErrorKind::WrongPassword
            | AuthErrorKind::InvalidCredential => self.invalid_credentials.to_string(),
            _ => generic(self.sign_in_error_prefix, err),
        }
    }

    pub fn sign_out_failed(&self, err: &ProviderError) -> String {
        generic(self.sign_out_error_prefix, err)
    }

    pub fn reset_failed(&self, err: &ProviderError) -> String {
        match err.kind {
            AuthErrorKind::UserNotFound => self.no_such_user.to_string(),
            _ => generic(self.reset_error_prefix, err),
        }
    }
}

fn generic(prefix: &str, err: &ProviderError) -> String {
    format!("{prefix}{}", err.message)
}
