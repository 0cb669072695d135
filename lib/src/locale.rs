use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    #[display("ru")]
    Ru,
    #[display("en")]
    En,
}

/// Every user-visible string of the auth screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub login_title: &'static str,
    pub login_button: &'static str,
    pub forgot_password: &'static str,
    pub no_account: &'static str,
    pub sign_up_link: &'static str,
    pub signup_title: &'static str,
    pub signup_button: &'static str,
    pub have_account: &'static str,
    pub log_in_link: &'static str,
    pub email: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub iin: &'static str,
    pub iin_hint: &'static str,
    pub role: &'static str,
    pub role_placeholder: &'static str,
    pub password: &'static str,
    pub patient: &'static str,
    pub doctor: &'static str,
    pub loading: &'static str,
}

static RU: Strings = Strings {
    login_title: "Вход в",
    login_button: "Войти",
    forgot_password: "Забыли пароль?",
    no_account: "Нет аккаунта?",
    sign_up_link: "Зарегистрироваться",
    signup_title: "Регистрация",
    signup_button: "Зарегистрироваться",
    have_account: "Уже есть аккаунт?",
    log_in_link: "Войти",
    email: "Email",
    first_name: "Имя",
    last_name: "Фамилия",
    iin: "ИИН",
    iin_hint: "12 цифр",
    role: "Роль",
    role_placeholder: "Выберите роль",
    password: "Пароль",
    patient: "Пациент",
    doctor: "Врач",
    loading: "Загрузка…",
};

static EN: Strings = Strings {
    login_title: "Log in to",
    login_button: "Log in",
    forgot_password: "Forgot password?",
    no_account: "Don’t have an account?",
    sign_up_link: "Sign up",
    signup_title: "Sign up",
    signup_button: "Sign up",
    have_account: "Already have an account?",
    log_in_link: "Log in",
    email: "Email",
    first_name: "First name",
    last_name: "Last name",
    iin: "IIN",
    iin_hint: "12 digits",
    role: "Role",
    role_placeholder: "Choose a role",
    password: "Password",
    patient: "Patient",
    doctor: "Doctor",
    loading: "Loading…",
};

impl Locale {
    pub fn strings(&self) -> &'static Strings {
        match self {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }
}
