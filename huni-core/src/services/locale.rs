//! Locale service - static English/Turkish string table
//!
//! Front ends build a [`Translations`] for the chosen [`Locale`] and look up
//! labels and messages by key. Error kinds use their snake_case code as the
//! key. Lookups fall back to English, then to the key itself.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::ErrorKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Tr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Tr];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => EN,
            Locale::Tr => TR,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Accepts the locale code or the language name shown in the picker
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "tr" | "turkish" | "türkçe" => Ok(Locale::Tr),
            other => Err(format!("Unknown language: {}. Available: en, tr", other)),
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("title", "HuNi | Login Screen"),
    ("email_label", "E-Mail: "),
    ("password_label", "Password: "),
    ("confirm_password_label", "Confirm Password: "),
    ("login_button", "Login"),
    ("login_tooltip", "Click to log in"),
    ("guest_login_button", "Guest Login"),
    ("guest_login_tooltip", "Log in as a guest"),
    ("register_button", "Register"),
    ("register_tooltip", "Click to register"),
    ("forgot_password_button", "Forgot Password"),
    ("forgot_password_tooltip", "Reset your password"),
    ("forgot_password_title", "Forgot Password"),
    ("forgot_password_success", "Password updated successfully! You can log in"),
    ("save_button", "Save"),
    ("login_msg", "Login Attempt"),
    ("login_info", "E-Mail: {email}\nPassword: {password}"),
    ("login_failed", "Invalid email or password!"),
    ("guest_msg", "Logged in as guest"),
    ("language_label", "Select Language:"),
    ("language_tr", "Turkish"),
    ("language_en", "English"),
    ("language_changed", "Language set to English"),
    ("register_title", "Register Screen"),
    ("register_success", "Registration successful! You can log in now."),
    ("please_register", "No Registered Users!"),
    ("select_language", "Select Language"),
    ("required", "All fields are required!"),
    ("bad_email", "Please enter a valid e-mail address (gmail.com, hotmail.com or outlook.com)."),
    ("mismatch", "Passwords do not match!"),
    ("email_taken", "This email is already registered!"),
    ("no_such_user", "No registered users found! Please register"),
    ("read_failed", "The user file could not be read."),
    ("write_failed", "The user file could not be saved."),
    ("malformed", "The user file is corrupted."),
    ("hash_failed", "The password could not be processed."),
];

const TR: &[(&str, &str)] = &[
    ("title", "HuNi | Giriş Ekranı"),
    ("email_label", "E-Posta: "),
    ("password_label", "Şifre: "),
    ("confirm_password_label", "Şifreyi Onayla: "),
    ("login_button", "Giriş Yap"),
    ("login_tooltip", "Giriş yapmak için tıklayın"),
    ("guest_login_button", "Misafir Giriş"),
    ("guest_login_tooltip", "Misafir olarak giriş yapın"),
    ("register_button", "Kayıt Ol"),
    ("register_tooltip", "Kayıt olmak için tıklayın"),
    ("forgot_password_button", "Şifremi Unuttum"),
    ("forgot_password_tooltip", "Şifrenizi sıfırlayın"),
    ("forgot_password_title", "Şifremi Unuttum"),
    ("forgot_password_success", "Şifre başarıyla güncellendi! Giriş yapabilirsin."),
    ("save_button", "Kaydet"),
    ("login_msg", "Giriş Denemesi"),
    ("login_info", "E-Posta: {email}\nŞifre: {password}"),
    ("login_failed", "Geçersiz e-posta veya şifre!"),
    ("guest_msg", "Misafir olarak giriş yapıldı"),
    ("language_label", "Dil Seç:"),
    ("language_tr", "Türkçe"),
    ("language_en", "English"),
    ("language_changed", "Dil Türkçe olarak ayarlandı"),
    ("register_title", "Kayıt Ekranı"),
    ("register_success", "Kayıt başarılı! Giriş yapabilirsiniz."),
    ("please_register", "Kayıtlı Kullanıcı Bulanamadı!"),
    ("select_language", "Dil Seç"),
    ("required", "Tüm alanların doldurulması zorunludur!"),
    ("bad_email", "Lütfen geçerli bir e-posta adresi girin (gmail.com, hotmail.com veya outlook.com)."),
    ("mismatch", "Şifreler eşleşmiyor!"),
    ("email_taken", "Bu e-posta zaten kayıtlı!"),
    ("no_such_user", "Kayıtlı kullanıcı bulunamadı! Lütfen kayıt olunuz."),
    ("read_failed", "Kullanıcı dosyası okunamadı."),
    ("write_failed", "Kullanıcı dosyası kaydedilemedi."),
    ("malformed", "Kullanıcı dosyası bozuk."),
    ("hash_failed", "Şifre işlenemedi."),
];

/// Message lookup for one locale
#[derive(Debug, Clone)]
pub struct Translations {
    locale: Locale,
    strings: HashMap<&'static str, &'static str>,
    fallback: HashMap<&'static str, &'static str>,
}

impl Translations {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            strings: locale.table().iter().copied().collect(),
            fallback: EN.iter().copied().collect(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up a string, falling back to English, then to the key
    pub fn get<'a>(&self, key: &'a str) -> &'a str {
        self.strings
            .get(key)
            .or_else(|| self.fallback.get(key))
            .copied()
            .unwrap_or(key)
    }

    /// User-facing message for an error kind
    pub fn error_message(&self, kind: ErrorKind) -> &'static str {
        self.get(kind.as_str())
    }

    /// Look up a string and substitute `{name}` placeholders
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter().fold(self.get(key).to_string(), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
    }
}
