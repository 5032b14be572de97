use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::form::{ContactForm, SubmitOutcome};
use super::rules::Field;

struct TextInput {
    field: Field,
    id: &'static str,
    error_id: &'static str,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
}

static TEXT_INPUTS: [TextInput; 3] = [
    TextInput {
        field: Field::Name,
        id: "name",
        error_id: "nameError",
        label: "Name",
        kind: "text",
        placeholder: "Your name",
    },
    TextInput {
        field: Field::Email,
        id: "email",
        error_id: "emailError",
        label: "Email",
        kind: "email",
        placeholder: "you@example.com",
    },
    TextInput {
        field: Field::Phone,
        id: "phone",
        error_id: "phoneError",
        label: "Phone",
        kind: "tel",
        placeholder: "+995 555 123 456",
    },
];

fn update(form: &UseStateHandle<ContactForm>, apply: impl FnOnce(&mut ContactForm)) {
    let mut next = (**form).clone();
    apply(&mut next);
    form.set(next);
}

fn on_input(form: &UseStateHandle<ContactForm>, field: Field) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        update(&form, |f| f.set_value(field, input.value()));
    })
}

fn error_line(form: &ContactForm, field: Field, id: &'static str) -> Html {
    html! {
        <small class="error" id={id} aria-live="polite">{form.error(field).unwrap_or("")}</small>
    }
}

#[function_component(ContactFormView)]
pub fn contact_form_view() -> Html {
    let form = use_state(ContactForm::default);

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            update(&form, |f| match f.submit() {
                SubmitOutcome::Valid => info!("Contact form accepted"),
                SubmitOutcome::Invalid { failed } => info!("Contact form rejected, {} field(s) invalid", failed),
            });
        })
    };

    let toggle_password = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| update(&form, ContactForm::toggle_password))
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            update(&form, |f| f.set_value(Field::Message, input.value()));
        })
    };

    let visibility = form.password_visibility();

    html! {
        <form id="contactForm" class="form" novalidate=true {onsubmit}>
            { for TEXT_INPUTS.iter().map(|row| html! {
                <div class="form__row">
                    <label for={row.id}>{row.label}</label>
                    <input
                        id={row.id}
                        type={row.kind}
                        placeholder={row.placeholder}
                        value={form.value(row.field).to_string()}
                        oninput={on_input(&form, row.field)}
                    />
                    { error_line(&form, row.field, row.error_id) }
                </div>
            }) }

            <div class="form__row">
                <label for="password">{"Password"}</label>
                <div class="password">
                    <input
                        id="password"
                        type={visibility.input_type()}
                        placeholder="min 6 chars, letters + numbers"
                        value={form.value(Field::Password).to_string()}
                        oninput={on_input(&form, Field::Password)}
                    />
                    <button type="button" id="togglePass" class="btn btn--ghost" onclick={toggle_password}>
                        {visibility.label()}
                    </button>
                </div>
                { error_line(&form, Field::Password, "passError") }
            </div>

            <div class="form__row">
                <label for="message">{"Message"}</label>
                <textarea
                    id="message"
                    rows="4"
                    placeholder="Tell us about your trip"
                    value={form.value(Field::Message).to_string()}
                    oninput={on_message}
                />
                { error_line(&form, Field::Message, "msgError") }
            </div>

            <button type="submit" class="btn">{"Send"}</button>
            <p id="formSuccess" class="success" aria-live="polite">{form.success().unwrap_or("")}</p>
        </form>
    }
}
