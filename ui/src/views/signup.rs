use dioxus::prelude::*;
use lib::{Locale, SignupField, SignupForm};
use tracing::debug;

use crate::{
    components::{Button, ButtonKind, Input, RoleSelect},
    state::AppState,
    Route,
};

/// Signup page. Owns the form state for as long as it is mounted; every
/// input event replaces it with a copy that differs in one field.
#[component]
pub fn Signup() -> Element {
    let state = use_context::<AppState>();
    let locale = state.config().locale;
    let strings = locale.strings();
    let form = use_signal(SignupForm::new);

    rsx! {
        div { class: "auth-card",
            h1 { class: "auth-title", {strings.signup_title} }
            SignupFields {
                form: form(),
                locale: locale,
                on_change: move |(field, value): (SignupField, String)| set_field(form, field, value),
            }
            Button { kind: ButtonKind::Primary, text: strings.signup_button.to_string() }
            p { class: "auth-footer",
                {strings.have_account}
                " "
                Link { to: Route::Login {}, class: "link", {strings.log_in_link} }
            }
        }
    }
}

/// Replaces the form held by `form` with a copy where `field` is `value`.
pub fn set_field(mut form: Signal<SignupForm>, field: SignupField, value: String) {
    // values stay out of the logs, the password is one of them
    debug!(%field, "signup field changed");
    let next = form.peek().with_field(field, value);
    form.set(next);
}

/// One controlled control per signup field, in display order. The displayed
/// value of each is `form.get(field)`.
#[component]
pub fn SignupFields(
    form: SignupForm,
    locale: Locale,
    on_change: EventHandler<(SignupField, String)>,
) -> Element {
    rsx! {
        for (field, value) in form.fields() {
            if field == SignupField::Role {
                RoleSelect {
                    key: "{field}",
                    id: field.name().to_string(),
                    label: field.label(locale).to_string(),
                    value: value.to_string(),
                    locale: locale,
                    on_select: move |role: String| on_change.call((field, role)),
                }
            } else {
                Input {
                    key: "{field}",
                    id: Some(field.name().to_string()),
                    label: Some(field.label(locale).to_string()),
                    description: field.hint(locale).map(str::to_string),
                    r#type: field.input_type(),
                    value: value.to_string(),
                    maxlength: field.max_len().map(|len| len.to_string()),
                    inputmode: field.input_mode(),
                    oninput: move |e: FormEvent| on_change.call((field, e.value())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use dioxus::prelude::*;
    use lib::{Locale, SignupField, SignupForm};

    use super::{set_field, SignupFields};

    #[component]
    fn Harness(form: SignupForm, locale: Locale) -> Element {
        rsx! {
            SignupFields { form: form, locale: locale, on_change: move |_| {} }
        }
    }

    fn render(form: SignupForm, locale: Locale) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { form, locale });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_every_field() {
        let html = render(SignupForm::new(), Locale::En);
        for field in SignupField::ALL {
            assert!(html.contains(&format!(r#"id="{}""#, field.name())), "{field}");
            assert!(html.contains(field.label(Locale::En)), "{field}");
        }
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains(r#"maxlength="12""#));
        assert_eq!(html.matches(r#"inputmode="numeric""#).count(), 1);
        assert!(html.contains("12 digits"));
    }

    #[test]
    fn role_offers_placeholder_and_two_roles() {
        let html = render(SignupForm::new(), Locale::En);
        assert_eq!(html.matches("<option").count(), 3);
        assert!(html.contains("Choose a role"));
        assert!(html.contains(r#"value="patient""#));
        assert!(html.contains(r#"value="doctor""#));
    }

    #[test]
    fn displayed_values_follow_the_form() {
        let form = SignupForm::new()
            .with_field(SignupField::Email, "a@b.com")
            .with_field(SignupField::LastName, "Abenova");
        let html = render(form, Locale::Ru);
        assert!(html.contains(r#"value="a@b.com""#));
        assert!(html.contains(r#"value="Abenova""#));
        assert!(html.contains("Фамилия"));
    }

    #[test]
    fn selected_role_is_the_select_value() {
        let unselected = render(SignupForm::new(), Locale::En);
        let form = SignupForm::new()
            .with_field(SignupField::Role, "doctor")
            .with_field(SignupField::Role, "patient");
        let selected = render(form, Locale::En);

        let count = |html: &str| html.matches(r#"value="patient""#).count();
        assert_eq!(count(&selected), count(&unselected) + 1);
    }

    /// Every form the signal held, starting with the initial one.
    #[derive(Clone, Default)]
    struct History(Rc<RefCell<Vec<SignupForm>>>);

    #[component]
    fn EditingHarness(edits: Vec<(SignupField, String)>) -> Element {
        let form = use_signal(SignupForm::new);
        let history = use_context::<History>();
        use_hook(move || {
            history.0.borrow_mut().push(form.peek().clone());
            for (field, value) in edits {
                set_field(form, field, value);
                history.0.borrow_mut().push(form.peek().clone());
            }
        });

        rsx! {
            SignupFields {
                form: form(),
                locale: Locale::En,
                on_change: move |(field, value): (SignupField, String)| set_field(form, field, value),
            }
        }
    }

    fn run_edits(edits: &[(SignupField, &str)]) -> (Vec<SignupForm>, String) {
        let history = History::default();
        let edits = edits
            .iter()
            .map(|(field, value)| (*field, value.to_string()))
            .collect();
        let mut dom = VirtualDom::new_with_props(EditingHarness, EditingHarnessProps { edits });
        dom.provide_root_context(history.clone());
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        let forms = history.0.borrow().clone();
        (forms, html)
    }

    #[test]
    fn edits_replace_one_field_at_a_time() {
        let edits = [
            (SignupField::Email, "a@b.com"),
            (SignupField::Iin, "990101300123"),
            (SignupField::Role, "doctor"),
            (SignupField::Role, "patient"),
        ];
        let (forms, _) = run_edits(&edits);

        assert_eq!(forms.len(), edits.len() + 1);
        assert_eq!(forms[0], SignupForm::new());
        for (step, (field, value)) in edits.iter().enumerate() {
            let (prev, next) = (&forms[step], &forms[step + 1]);
            assert_eq!(next.get(*field), *value);
            for other in SignupField::ALL.into_iter().filter(|f| f != field) {
                assert_eq!(next.get(other), prev.get(other), "{other} after {field}");
            }
        }
        // earlier snapshots keep their values
        assert_eq!(forms[1].get(SignupField::Iin), "");
        assert_eq!(forms[3].get(SignupField::Role), "doctor");
    }

    #[test]
    fn controls_show_the_edited_form() {
        let (_, html) = run_edits(&[
            (SignupField::Email, "a@b.com"),
            (SignupField::FirstName, "Aigerim"),
        ]);
        assert!(html.contains(r#"value="a@b.com""#));
        assert!(html.contains(r#"value="Aigerim""#));
    }
}
