use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{info, warn};

use api::contact::{SubmitContactReq, submit_contact};
use common::{
    contact::{ContactError, ContactField, ContactForm, SubmitState},
    pages::service_options,
};

use crate::{components::section::PageHeader, site::Site, web::storage::push_outbox};

const STATUS_DISMISS_MS: u32 = 5000;

const WHY_US: [&str; 3] = [
    "24-48 Hour Turnaround",
    "100% Satisfaction Guarantee",
    "Dedicated Account Manager",
];

#[derive(Clone, Debug, PartialEq)]
enum FormStatus {
    Sending,
    Sent,
    // held in the browser outbox, with the outbox length
    Queued(usize),
    Invalid(ContactError),
    Failed(String),
}

impl FormStatus {
    fn message(&self) -> String {
        match self {
            FormStatus::Sending => "Sending...".to_owned(),
            FormStatus::Sent => "Thanks! We'll be in touch within one business day.".to_owned(),
            FormStatus::Queued(_) => {
                "Thanks! Your message is saved and we'll be in touch soon.".to_owned()
            }
            FormStatus::Invalid(err) => err.to_string(),
            FormStatus::Failed(err) => format!("Error: {err}"),
        }
    }

    fn is_error(&self) -> bool {
        matches!(self, FormStatus::Invalid(_) | FormStatus::Failed(_))
    }
}

fn show_status(
    mut status: Signal<Option<FormStatus>>,
    submit: Signal<SubmitState>,
    ticket: u32,
    next: FormStatus,
) {
    status.set(Some(next));

    Timeout::new(STATUS_DISMISS_MS, move || {
        if submit.peek().may_dismiss(ticket) {
            status.set(None);
        }
    })
    .forget();
}

// hands a validated request to the form backend when one is configured, and to the
// local outbox otherwise or when the backend is unreachable
async fn deliver(endpoint: Option<String>, req: SubmitContactReq) -> FormStatus {
    if let Some(endpoint) = endpoint {
        match submit_contact(&endpoint, &req).await {
            Ok(_) => return FormStatus::Sent,
            Err(err) => warn!("contact hand-off failed, queueing locally: {err}"),
        }
    }

    match push_outbox(req) {
        Ok(len) => FormStatus::Queued(len),
        Err(err) => FormStatus::Failed(err.to_string()),
    }
}

#[derive(Clone, PartialEq, Props)]
struct FormInputProps {
    field: ContactField,
    kind: String,
    placeholder: String,
    form: Signal<ContactForm>,
}

#[component]
fn FormInput(props: FormInputProps) -> Element {
    let field = props.field;
    let mut form = props.form;

    rsx! {
        div { class: "form-field",
            label { "{field}" }
            input {
                class: "form-input",
                r#type: "{props.kind}",
                placeholder: "{props.placeholder}",
                value: "{form.read().get(field)}",
                oninput: move |evt| form.write().set(field, evt.value()),
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let site = use_context::<Site>();

    let options = use_hook(|| service_options(&site.content));
    let first_option = options.first().cloned().unwrap_or_default();

    let mut form = use_signal(|| ContactForm::new(first_option.clone()));
    let mut status = use_signal(|| None::<FormStatus>);

    let mut submit = use_signal(SubmitState::default);

    let endpoint = site.config.contact.endpoint.clone();
    let contact = &site.config.contact;
    let details = [
        ("✉", "Email", contact.email.clone()),
        ("☏", "Phone", contact.phone.clone()),
        ("⌖", "Location", contact.location.clone()),
    ];
    let service_label = ContactField::Service.label();
    let message_label = ContactField::Message.label();

    let handle_submit = move |event: FormEvent| {
        event.prevent_default();

        if submit.peek().in_flight() {
            return;
        }

        let req = match form.read().submit() {
            Ok(req) => req,
            Err(err) => {
                let ticket = submit.write().notice();
                show_status(status, submit, ticket, FormStatus::Invalid(err));
                return;
            }
        };

        if submit.write().begin().is_none() {
            return;
        }
        status.set(Some(FormStatus::Sending));

        let endpoint = endpoint.clone();
        let first_option = first_option.clone();
        spawn(async move {
            let result = deliver(endpoint, req).await;

            if !result.is_error() {
                info!("contact request delivered: {result:?}");
                form.set(ContactForm::new(first_option));
            }
            let ticket = submit.write().finish();
            show_status(status, submit, ticket, result);
        });
    };

    rsx! {
        PageHeader {
            title: "Let's Scale Your Business".to_owned(),
            subtitle: "Ready for 10x ROI? Get in touch.".to_owned(),
        }
        div { class: "container contact-grid",
            div { class: "contact-details",
                h2 { "Contact Information" }
                for (icon , label , value) in details {
                    div { key: "{label}", class: "contact-item",
                        div { class: "contact-icon", "{icon}" }
                        div {
                            div { class: "contact-label", "{label}" }
                            div { "{value}" }
                        }
                    }
                }

                div { class: "card why-us",
                    h3 { "Why choose us?" }
                    ul { class: "check-list",
                        for reason in WHY_US {
                            li { key: "{reason}",
                                span { class: "check-icon", "✓" }
                                "{reason}"
                            }
                        }
                    }
                }
            }

            form { class: "card contact-form", onsubmit: handle_submit,
                div { class: "form-row",
                    FormInput {
                        field: ContactField::Name,
                        kind: "text".to_owned(),
                        placeholder: "John Doe".to_owned(),
                        form,
                    }
                    FormInput {
                        field: ContactField::Email,
                        kind: "email".to_owned(),
                        placeholder: "john@company.com".to_owned(),
                        form,
                    }
                }

                div { class: "form-field",
                    label { "{service_label}" }
                    select {
                        class: "form-input",
                        value: "{form.read().service}",
                        onchange: move |evt| form.write().set(ContactField::Service, evt.value()),
                        for choice in options.iter() {
                            option {
                                key: "{choice}",
                                value: "{choice}",
                                selected: form.read().service == *choice,
                                "{choice}"
                            }
                        }
                    }
                }

                div { class: "form-field",
                    label { "{message_label}" }
                    textarea {
                        class: "form-input",
                        rows: "4",
                        placeholder: "Tell us about your project goals...",
                        value: "{form.read().message}",
                        oninput: move |evt| form.write().set(ContactField::Message, evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary btn-block btn-lg",
                    r#type: "submit",
                    disabled: submit.read().in_flight(),
                    "Send Message"
                }

                if let Some(current) = status() {
                    p { class: if current.is_error() { "form-status error" } else { "form-status" },
                        "{current.message()}"
                    }
                }
            }
        }
    }
}
