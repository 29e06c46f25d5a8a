use std::fmt;

use thiserror::Error;

use api::contact::SubmitContactReq;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Service,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Service,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Service => "Service",
            ContactField::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),
}

// ContactForm
//
// the contact page's local state; submit() turns it into the request handed to the
// form backend without touching the values
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(service: impl Into<String>) -> Self {
        ContactForm {
            service: service.into(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Service => &self.service,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Service => self.service = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn missing(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
    }

    pub fn submit(&self) -> Result<SubmitContactReq, ContactError> {
        if let Some(field) = self.missing() {
            return Err(ContactError::MissingField(field));
        }

        Ok(SubmitContactReq {
            name: self.name.clone(),
            email: self.email.clone(),
            service: self.service.clone(),
            message: self.message.clone(),
        })
    }
}

// SubmitState
//
// tracks the single in-flight hand-off and which status message is current. every
// status change takes a new ticket, and a dismissal timer may only clear the status
// it was armed for; nothing but finish() ends an in-flight submission
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    generation: u32,
    in_flight: bool,
}

impl SubmitState {
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    // start a hand-off; None while another one is still running
    pub fn begin(&mut self) -> Option<u32> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(self.bump())
    }

    // the hand-off settled; returns the ticket of the status it produced
    pub fn finish(&mut self) -> u32 {
        self.in_flight = false;
        self.bump()
    }

    // a status that did not start a hand-off, e.g. a validation error
    pub fn notice(&mut self) -> u32 {
        self.bump()
    }

    // whether a timer armed with this ticket may dismiss the status
    pub fn may_dismiss(&self, ticket: u32) -> bool {
        !self.in_flight && self.generation == ticket
    }

    fn bump(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new("Brand Commercials (₹4,599)");
        form.set(ContactField::Name, " Priya Shah ".to_owned());
        form.set(ContactField::Email, "priya@studio.in".to_owned());
        form.set(ContactField::Message, "Two spots for Diwali.\nBudget flexible.".to_owned());
        form
    }

    #[test]
    fn submit_copies_values_verbatim() {
        let req = filled().submit().unwrap();

        assert_eq!(
            req,
            SubmitContactReq {
                name: " Priya Shah ".to_owned(),
                email: "priya@studio.in".to_owned(),
                service: "Brand Commercials (₹4,599)".to_owned(),
                message: "Two spots for Diwali.\nBudget flexible.".to_owned(),
            }
        );
    }

    #[test]
    fn blank_fields_are_reported_in_form_order() {
        let form = ContactForm::new("UGC Ads (₹1,999)");
        assert_eq!(form.submit(), Err(ContactError::MissingField(ContactField::Name)));

        let mut form = filled();
        form.set(ContactField::Email, "   ".to_owned());
        assert_eq!(form.submit(), Err(ContactError::MissingField(ContactField::Email)));
        assert_eq!(form.submit().unwrap_err().to_string(), "Email is required");
    }

    #[test]
    fn get_reads_back_what_set_wrote() {
        let mut form = ContactForm::default();
        for field in ContactField::ALL {
            form.set(field, field.label().to_lowercase());
        }
        for field in ContactField::ALL {
            assert_eq!(form.get(field), field.label().to_lowercase());
        }
    }

    #[test]
    fn stale_dismissal_cannot_end_a_running_submission() {
        let mut state = SubmitState::default();

        // a rejected submit arms a dismissal timer
        let invalid = state.notice();
        assert!(state.may_dismiss(invalid));

        // the visitor fixes the form and resubmits before that timer fires
        let sending = state.begin().unwrap();
        assert!(!state.may_dismiss(invalid));
        assert!(!state.may_dismiss(sending));
        assert!(state.in_flight());

        // a second click while the request is out is refused
        assert_eq!(state.begin(), None);

        let done = state.finish();
        assert!(!state.in_flight());
        assert!(!state.may_dismiss(invalid));
        assert!(state.may_dismiss(done));
    }

    #[test]
    fn newer_notice_supersedes_older_timer() {
        let mut state = SubmitState::default();

        let first = state.notice();
        let second = state.notice();

        assert!(!state.may_dismiss(first));
        assert!(state.may_dismiss(second));
    }
}
