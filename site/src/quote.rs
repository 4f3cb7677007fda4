use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

// deliberately loose: one @, something on both sides, and a dot in the domain
//
// anything stricter belongs to whoever actually delivers the request
pub const EMAIL_REGEX: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("valid email regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteField {
    FullName,
    EmailAddress,
    PhoneNumber,
    ServiceRequired,
    ProjectDetails,
}

impl QuoteField {
    // form order
    pub const ALL: [QuoteField; 5] = [
        QuoteField::FullName,
        QuoteField::EmailAddress,
        QuoteField::PhoneNumber,
        QuoteField::ServiceRequired,
        QuoteField::ProjectDetails,
    ];

    // input names, also the serialized field names of QuoteRequest
    pub fn name(self) -> &'static str {
        match self {
            QuoteField::FullName => "fullName",
            QuoteField::EmailAddress => "emailAddress",
            QuoteField::PhoneNumber => "phoneNumber",
            QuoteField::ServiceRequired => "serviceRequired",
            QuoteField::ProjectDetails => "projectDetails",
        }
    }

    pub fn from_name(name: &str) -> Option<QuoteField> {
        QuoteField::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            QuoteField::FullName => "Full Name",
            QuoteField::EmailAddress => "Email Address",
            QuoteField::PhoneNumber => "Phone Number",
            QuoteField::ServiceRequired => "Service Required",
            QuoteField::ProjectDetails => "Project Details",
        }
    }

    pub fn is_required(self) -> bool {
        self != QuoteField::PhoneNumber
    }
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub full_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub service_required: String,
    pub project_details: String,
}

impl QuoteRequest {
    pub fn field(&self, field: QuoteField) -> &str {
        match field {
            QuoteField::FullName => &self.full_name,
            QuoteField::EmailAddress => &self.email_address,
            QuoteField::PhoneNumber => &self.phone_number,
            QuoteField::ServiceRequired => &self.service_required,
            QuoteField::ProjectDetails => &self.project_details,
        }
    }

    // every keystroke lands here, so no validation
    pub fn update_field(&mut self, field: QuoteField, value: impl Into<String>) {
        let slot = match field {
            QuoteField::FullName => &mut self.full_name,
            QuoteField::EmailAddress => &mut self.email_address,
            QuoteField::PhoneNumber => &mut self.phone_number,
            QuoteField::ServiceRequired => &mut self.service_required,
            QuoteField::ProjectDetails => &mut self.project_details,
        };
        *slot = value.into();
    }

    // required fields that are empty once whitespace is trimmed, in form order
    pub fn missing_fields(&self) -> Vec<QuoteField> {
        QuoteField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.field(*f).trim().is_empty())
            .collect()
    }

    pub fn validate(&self, check_email: bool) -> Result<(), QuoteError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(QuoteError::Validation(ValidationError { missing }));
        }

        if check_email && !EMAIL.is_match(self.email_address.trim()) {
            return Err(QuoteError::InvalidEmail(self.email_address.trim().to_owned()));
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub missing: Vec<QuoteField>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.missing.iter().map(|m| m.label()).collect();
        write!(f, "please fill in: {}", labels.join(", "))
    }
}

impl std::error::Error for ValidationError {}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0:?} does not look like an email address")]
    InvalidEmail(String),
    #[error("a quote request is already being sent")]
    SubmissionInFlight,
    #[error("no quote request is being sent")]
    NotSubmitting,
    #[error("failed to send quote request: {0}")]
    Delivery(String),
}

/// Receipt for a request handed to the delivery collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accepted {
    pub request: QuoteRequest,
}

/// Where validated quote requests go (email relay, CRM, ...).
pub trait QuoteSubmitter {
    fn submit(&mut self, request: &QuoteRequest) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

// the controlled field-set behind the contact section
//
// a submission is split into begin/finish so an async collaborator can sit in
// between; while one is outstanding further submits are refused
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteForm {
    request: QuoteRequest,
    state: SubmitState,
    check_email: bool,
}

impl QuoteForm {
    pub fn new(check_email: bool) -> Self {
        QuoteForm {
            check_email,
            ..Default::default()
        }
    }

    pub fn request(&self) -> &QuoteRequest {
        &self.request
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn update_field(&mut self, field: QuoteField, value: impl Into<String>) {
        self.request.update_field(field, value);
    }

    // on any error the fields are left exactly as they were
    pub fn begin_submit(&mut self) -> Result<QuoteRequest, QuoteError> {
        if self.is_submitting() {
            warn!("ignoring duplicate quote submission");
            return Err(QuoteError::SubmissionInFlight);
        }

        self.request.validate(self.check_email)?;
        self.state = SubmitState::Submitting;

        Ok(self.request.clone())
    }

    pub fn finish_submit(&mut self, outcome: anyhow::Result<()>) -> Result<Accepted, QuoteError> {
        if !self.is_submitting() {
            return Err(QuoteError::NotSubmitting);
        }
        self.state = SubmitState::Idle;

        match outcome {
            Ok(()) => {
                info!("quote request accepted");
                Ok(Accepted {
                    request: std::mem::take(&mut self.request),
                })
            }
            Err(err) => {
                warn!("quote delivery failed: {err}");
                Err(QuoteError::Delivery(err.to_string()))
            }
        }
    }

    #[instrument(level = "debug", skip_all)]
    pub fn submit<S: QuoteSubmitter>(&mut self, submitter: &mut S) -> Result<Accepted, QuoteError> {
        let request = self.begin_submit()?;
        debug!("handing quote request to submitter");
        let outcome = submitter.submit(&request);
        self.finish_submit(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSubmitter {
        received: Vec<QuoteRequest>,
        fail: bool,
    }

    impl QuoteSubmitter for RecordingSubmitter {
        fn submit(&mut self, request: &QuoteRequest) -> anyhow::Result<()> {
            self.received.push(request.clone());
            if self.fail {
                anyhow::bail!("relay offline");
            }
            Ok(())
        }
    }

    fn filled_form() -> QuoteForm {
        let mut form = QuoteForm::new(true);
        form.update_field(QuoteField::FullName, "Ada Pilot");
        form.update_field(QuoteField::EmailAddress, "ada@example.com");
        form.update_field(QuoteField::ServiceRequired, "Aerial Photography");
        form.update_field(QuoteField::ProjectDetails, "Roof inspection, two buildings");
        form
    }

    #[test]
    fn missing_project_details_is_rejected() {
        let mut form = filled_form();
        form.update_field(QuoteField::ProjectDetails, "");
        let before = form.request().clone();
        let mut submitter = RecordingSubmitter::default();

        let err = form.submit(&mut submitter).unwrap_err();
        assert_eq!(
            err,
            QuoteError::Validation(ValidationError {
                missing: vec![QuoteField::ProjectDetails],
            })
        );
        assert!(submitter.received.is_empty());
        assert_eq!(form.request(), &before);
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn complete_form_is_submitted_exactly_once() {
        let mut form = filled_form();
        form.update_field(QuoteField::PhoneNumber, "");
        let mut submitter = RecordingSubmitter::default();

        let accepted = form.submit(&mut submitter).unwrap();
        assert_eq!(submitter.received.len(), 1);
        assert_eq!(accepted.request.full_name, "Ada Pilot");
        // the form is cleared for the next inquiry
        assert_eq!(form.request(), &QuoteRequest::default());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = QuoteForm::new(false);
        form.update_field(QuoteField::FullName, "   ");
        form.update_field(QuoteField::ServiceRequired, "Mapping");

        let err = form.begin_submit().unwrap_err();
        assert_eq!(
            err,
            QuoteError::Validation(ValidationError {
                missing: vec![
                    QuoteField::FullName,
                    QuoteField::EmailAddress,
                    QuoteField::ProjectDetails,
                ],
            })
        );
        assert_eq!(
            err.to_string(),
            "please fill in: Full Name, Email Address, Project Details"
        );
    }

    #[test]
    fn malformed_email_is_rejected_when_checked() {
        let mut form = filled_form();
        form.update_field(QuoteField::EmailAddress, "ada at example");
        assert_eq!(
            form.begin_submit(),
            Err(QuoteError::InvalidEmail("ada at example".into()))
        );

        let mut lenient = QuoteForm::new(false);
        lenient.update_field(QuoteField::FullName, "Ada");
        lenient.update_field(QuoteField::EmailAddress, "ada at example");
        lenient.update_field(QuoteField::ServiceRequired, "Mapping");
        lenient.update_field(QuoteField::ProjectDetails, "Survey");
        assert!(lenient.begin_submit().is_ok());
    }

    #[test]
    fn double_submit_is_refused_while_in_flight() {
        let mut form = filled_form();

        let snapshot = form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(QuoteError::SubmissionInFlight));

        let accepted = form.finish_submit(Ok(())).unwrap();
        assert_eq!(accepted.request, snapshot);
        assert_eq!(form.finish_submit(Ok(())), Err(QuoteError::NotSubmitting));
    }

    #[test]
    fn delivery_failure_keeps_fields() {
        let mut form = filled_form();
        let before = form.request().clone();
        let mut submitter = RecordingSubmitter {
            fail: true,
            ..Default::default()
        };

        let err = form.submit(&mut submitter).unwrap_err();
        assert_eq!(err, QuoteError::Delivery("relay offline".into()));
        assert_eq!(form.request(), &before);
        assert_eq!(form.state(), SubmitState::Idle);

        // and the user can try again
        submitter.fail = false;
        assert!(form.submit(&mut submitter).is_ok());
        assert_eq!(submitter.received.len(), 2);
    }

    #[test]
    fn field_names_match_serialized_record() {
        let mut request = QuoteRequest::default();
        request.update_field(QuoteField::ServiceRequired, "Thermal Imaging");
        let json = serde_json::to_value(&request).unwrap();

        for field in QuoteField::ALL {
            assert!(json.get(field.name()).is_some(), "{field}");
            assert_eq!(QuoteField::from_name(field.name()), Some(field));
        }
        assert_eq!(json["serviceRequired"], "Thermal Imaging");
    }
}
