use dioxus::prelude::*;
use tracing::info;

use site::{
    SiteConfig,
    catalog::{COMPANY_EMAIL, COMPANY_PHONE, service_names},
    nav::SECTION_CONTACT,
    quote::{QuoteError, QuoteField, QuoteForm, QuoteRequest, QuoteSubmitter},
};

use crate::{common::scroll::NamedSection, components::showcase::SectionHeader};

// there is no delivery backend yet, so a request is acknowledged and logged
//
// a real integration (mail relay, crm) implements QuoteSubmitter and is swapped in here
#[derive(Clone, Copy, Debug, Default)]
pub struct AcknowledgeSubmitter;

impl QuoteSubmitter for AcknowledgeSubmitter {
    fn submit(&mut self, request: &QuoteRequest) -> anyhow::Result<()> {
        info!(
            service = %request.service_required,
            "quote request received from {}",
            request.full_name.trim()
        );
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
enum FormStatus {
    #[default]
    Blank,
    Invalid(Vec<QuoteField>, String),
    Failed(String),
    Sent(String),
}

impl FormStatus {
    fn flags(&self, field: QuoteField) -> bool {
        match self {
            FormStatus::Invalid(missing, _) => missing.contains(&field),
            _ => false,
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct QuoteInputProps {
    form: Signal<QuoteForm>,
    field: QuoteField,
    invalid: bool,
    #[props(default = "text")]
    input_type: &'static str,
}

#[component]
fn QuoteInput(props: QuoteInputProps) -> Element {
    let mut form = props.form;
    let field = props.field;
    let name = field.name();
    let value = form.read().request().field(field).to_owned();
    let class = if props.invalid { "form-input invalid" } else { "form-input" };

    rsx! {
        div { class: "form-group",
            FieldLabel { field }
            input {
                class: "{class}",
                id: name,
                name: name,
                r#type: "{props.input_type}",
                value: "{value}",
                oninput: move |evt: FormEvent| form.write().update_field(field, evt.value()),
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct FieldLabelProps {
    field: QuoteField,
}

#[component]
fn FieldLabel(props: FieldLabelProps) -> Element {
    let name = props.field.name();
    let label = props.field.label();

    rsx! {
        label { class: "form-label", r#for: "{name}",
            "{label}"
            if props.field.is_required() {
                span { class: "required", "*" }
            }
        }
    }
}

// the contact section: controlled fields plus one synchronous submit
#[component]
pub fn QuoteIntake() -> Element {
    let config = use_context::<SiteConfig>();
    let mut form = use_signal(move || QuoteForm::new(config.quote_email_check));
    let mut status = use_signal(FormStatus::default);

    let service = form.read().request().service_required.clone();
    let details = form.read().request().project_details.clone();
    let submitting = form.read().is_submitting();
    let current = status.read().clone();

    let service_class = if current.flags(QuoteField::ServiceRequired) {
        "form-select invalid"
    } else {
        "form-select"
    };
    let details_class = if current.flags(QuoteField::ProjectDetails) {
        "form-textarea invalid"
    } else {
        "form-textarea"
    };

    rsx! {
        NamedSection { name: SECTION_CONTACT,
            div { class: "container",
                SectionHeader {
                    title: "Request a Quote".to_owned(),
                    subtitle: "Tell us about your project and we will reply within one business day.".to_owned(),
                }
                div { class: "contact-layout",
                    div { class: "contact-details",
                        p { "Prefer to talk? Call us on {COMPANY_PHONE}." }
                        p { "Or email " a { href: "mailto:{COMPANY_EMAIL}", "{COMPANY_EMAIL}" } "." }
                        p { "Fields marked * are required." }
                    }
                    form {
                        class: "card",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            let result = form.write().submit(&mut AcknowledgeSubmitter);
                            let next = match result {
                                Ok(accepted) => {
                                    FormStatus::Sent(
                                        format!(
                                            "Thanks {}, your request has been received. We will be in touch shortly.",
                                            accepted.request.full_name.trim(),
                                        ),
                                    )
                                }
                                Err(QuoteError::Validation(err)) => {
                                    let message = err.to_string();
                                    FormStatus::Invalid(err.missing, message)
                                }
                                Err(QuoteError::InvalidEmail(_)) => {
                                    FormStatus::Invalid(
                                        vec![QuoteField::EmailAddress],
                                        "Please enter a valid email address.".to_owned(),
                                    )
                                }
                                // a second click while the first is still in flight
                                Err(QuoteError::SubmissionInFlight) => return,
                                Err(err) => FormStatus::Failed(err.to_string()),
                            };
                            status.set(next);
                        },

                        QuoteInput {
                            form,
                            field: QuoteField::FullName,
                            invalid: current.flags(QuoteField::FullName),
                        }
                        QuoteInput {
                            form,
                            field: QuoteField::EmailAddress,
                            invalid: current.flags(QuoteField::EmailAddress),
                            input_type: "email",
                        }
                        QuoteInput {
                            form,
                            field: QuoteField::PhoneNumber,
                            invalid: false,
                            input_type: "tel",
                        }

                        div { class: "form-group",
                            FieldLabel { field: QuoteField::ServiceRequired }
                            select {
                                class: "{service_class}",
                                id: QuoteField::ServiceRequired.name(),
                                value: "{service}",
                                onchange: move |evt: FormEvent| {
                                    form.write().update_field(QuoteField::ServiceRequired, evt.value())
                                },
                                option { value: "", "Select a service" }
                                for name in service_names() {
                                    option { key: "{name}", value: "{name}", selected: name == service, "{name}" }
                                }
                                option { value: "Other", selected: service == "Other", "Other" }
                            }
                        }

                        div { class: "form-group",
                            FieldLabel { field: QuoteField::ProjectDetails }
                            textarea {
                                class: "{details_class}",
                                id: QuoteField::ProjectDetails.name(),
                                rows: "6",
                                value: "{details}",
                                oninput: move |evt: FormEvent| {
                                    form.write().update_field(QuoteField::ProjectDetails, evt.value())
                                },
                            }
                        }

                        button {
                            class: "btn btn-primary btn-lg",
                            r#type: "submit",
                            disabled: submitting,
                            if submitting { "Sending..." } else { "Send Request" }
                        }

                        match &current {
                            FormStatus::Blank => rsx! {},
                            FormStatus::Invalid(_, message) | FormStatus::Failed(message) => rsx! {
                                p { class: "form-status error", "{message}" }
                            },
                            FormStatus::Sent(message) => rsx! {
                                p { class: "form-status success", "{message}" }
                            },
                        }
                    }
                }
            }
        }
    }
}
