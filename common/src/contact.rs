use api::contact::{ContactSendReq, ContactSendResp};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn clear(&mut self) {
        *self = ContactDraft::default()
    }

    pub fn to_request(&self) -> ContactSendReq {
        ContactSendReq {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success { id: String },
    Failure { message: String },
}

// state machine behind the contact form: Idle -> submitting -> Success or
// Failure, and back to Idle on the next edit
//
// the in-flight flag is what disables the submit control; begin_submit and
// finish_submit are the only places it changes, so a panic-free send path
// always re-enables the form
#[derive(Clone, Debug, Default)]
pub struct ContactController {
    draft: ContactDraft,
    status: SubmitStatus,
    in_flight: bool,
}

impl ContactController {
    pub fn new() -> ContactController {
        ContactController::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    // editing a field also retires any stale result banner
    pub fn update_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.draft.name = value,
            ContactField::Email => self.draft.email = value,
            ContactField::Message => self.draft.message = value,
        }

        self.status = SubmitStatus::Idle;
    }

    // returns the request to send, or None when one is already outstanding
    pub fn begin_submit(&mut self) -> Option<ContactSendReq> {
        if self.in_flight {
            return None;
        }

        self.in_flight = true;
        self.status = SubmitStatus::Idle;

        Some(self.draft.to_request())
    }

    // a successful send clears the draft; a failed one keeps it so the
    // visitor can resubmit without retyping
    pub fn finish_submit(&mut self, result: anyhow::Result<ContactSendResp>) {
        self.in_flight = false;

        match result {
            Ok(resp) => {
                self.status = SubmitStatus::Success { id: resp.id };
                self.draft.clear();
            }
            Err(err) => {
                self.status = SubmitStatus::Failure {
                    message: err.to_string(),
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use anyhow::anyhow;

    #[test]
    fn starts_idle_and_empty() {
        let controller = ContactController::new();

        assert_eq!(*controller.status(), SubmitStatus::Idle);
        assert_eq!(*controller.draft(), ContactDraft::default());
        assert!(!controller.is_submitting());
    }

    #[test]
    fn edits_land_in_the_draft() {
        let mut controller = ContactController::new();

        controller.update_field(ContactField::Name, "Ada".into());
        controller.update_field(ContactField::Email, "ada@example.com".into());
        controller.update_field(ContactField::Message, "hello".into());

        assert_eq!(controller.draft().name, "Ada");
        assert_eq!(controller.draft().email, "ada@example.com");
        assert_eq!(controller.draft().message, "hello");
    }

    #[test]
    fn begin_submit_snapshots_the_draft() {
        let mut controller = ContactController::new();

        controller.update_field(ContactField::Name, "Ada".into());
        controller.update_field(ContactField::Message, "hello".into());

        let req = controller.begin_submit().unwrap();

        assert_eq!(req.name, "Ada");
        assert_eq!(req.message, "hello");
        assert!(controller.is_submitting());
    }

    #[test]
    fn second_submit_is_refused_while_in_flight() {
        let mut controller = ContactController::new();

        assert!(controller.begin_submit().is_some());
        assert!(controller.begin_submit().is_none());

        // still exactly one outstanding request
        assert!(controller.is_submitting());
    }

    #[test]
    fn success_clears_the_draft_and_reports_the_id() {
        let mut controller = ContactController::new();

        controller.update_field(ContactField::Name, "Ada".into());
        controller.begin_submit().unwrap();
        controller.finish_submit(Ok(ContactSendResp { id: "m-17".into() }));

        assert!(!controller.is_submitting());
        assert_eq!(
            *controller.status(),
            SubmitStatus::Success { id: "m-17".into() }
        );
        assert_eq!(*controller.draft(), ContactDraft::default());
    }

    #[test]
    fn failure_keeps_the_draft_for_resubmission() {
        let mut controller = ContactController::new();

        controller.update_field(ContactField::Message, "hello again".into());
        controller.begin_submit().unwrap();
        controller.finish_submit(Err(anyhow!("mailbox is full")));

        assert!(!controller.is_submitting());
        assert_eq!(
            *controller.status(),
            SubmitStatus::Failure {
                message: "mailbox is full".into()
            }
        );
        assert_eq!(controller.draft().message, "hello again");
    }

    #[test]
    fn resubmission_is_allowed_after_failure() {
        let mut controller = ContactController::new();

        controller.begin_submit().unwrap();
        controller.finish_submit(Err(anyhow!("timeout")));

        assert!(controller.begin_submit().is_some());
    }

    #[test]
    fn editing_retires_a_stale_result() {
        let mut controller = ContactController::new();

        controller.begin_submit().unwrap();
        controller.finish_submit(Ok(ContactSendResp { id: "m-1".into() }));
        controller.update_field(ContactField::Name, "B".into());

        assert_eq!(*controller.status(), SubmitStatus::Idle);
    }
}
