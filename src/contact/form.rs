use super::rules::{Field, RULES};

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully (demo).";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PasswordVisibility {
    #[default]
    Masked,
    Plain,
}

impl PasswordVisibility {
    pub fn toggled(self) -> Self {
        match self {
            PasswordVisibility::Masked => PasswordVisibility::Plain,
            PasswordVisibility::Plain => PasswordVisibility::Masked,
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            PasswordVisibility::Masked => "password",
            PasswordVisibility::Plain => "text",
        }
    }

    /// Label of the toggle button, naming the action it performs.
    pub fn label(self) -> &'static str {
        match self {
            PasswordVisibility::Masked => "Show",
            PasswordVisibility::Plain => "Hide",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Valid,
    Invalid { failed: usize },
}

/// Contact form values and the feedback shown for the last submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    values: [String; 5],
    errors: [Option<&'static str>; 5],
    success: Option<&'static str>,
    password: PasswordVisibility,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors[field.index()]
    }

    pub fn success(&self) -> Option<&'static str> {
        self.success
    }

    pub fn password_visibility(&self) -> PasswordVisibility {
        self.password
    }

    pub fn toggle_password(&mut self) {
        self.password = self.password.toggled();
    }

    /// Runs every rule, without stopping at the first failure. On success
    /// the values are cleared and the password goes back to masked; on
    /// failure the values are kept for correction.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = [None; 5];
        self.success = None;

        let mut failed = 0;
        for rule in RULES.iter() {
            if !rule.passes(&self.values[rule.field.index()]) {
                self.errors[rule.field.index()] = Some(rule.message);
                failed += 1;
            }
        }

        if failed > 0 {
            return SubmitOutcome::Invalid { failed };
        }

        self.success = Some(SUCCESS_MESSAGE);
        self.values = Default::default();
        self.password = PasswordVisibility::Masked;
        SubmitOutcome::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::rules::rule_for;

    fn filled(name: &str, email: &str, phone: &str, password: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        for (field, value) in Field::ALL.into_iter().zip([name, email, phone, password, message]) {
            form.set_value(field, value);
        }
        form
    }

    fn valid() -> ContactForm {
        filled("Al", "a@b.co", "+995555123456", "abc123", "hello!")
    }

    #[test]
    fn valid_submission_clears_fields_and_shows_success() {
        let mut form = valid();
        assert_eq!(form.submit(), SubmitOutcome::Valid);
        assert_eq!(form.success(), Some(SUCCESS_MESSAGE));
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
            assert_eq!(form.error(field), None);
        }
    }

    #[test]
    fn single_bad_field_reports_only_that_field() {
        let mut form = valid();
        form.set_value(Field::Name, "A");
        assert_eq!(form.submit(), SubmitOutcome::Invalid { failed: 1 });
        assert_eq!(form.error(Field::Name), Some(rule_for(Field::Name).message));
        for field in &Field::ALL[1..] {
            assert_eq!(form.error(*field), None);
        }
        assert_eq!(form.success(), None);
        assert_eq!(form.value(Field::Name), "A");
        assert_eq!(form.value(Field::Email), "a@b.co");
        assert_eq!(form.value(Field::Message), "hello!");
    }

    #[test]
    fn empty_form_reports_every_field() {
        let mut form = ContactForm::default();
        assert_eq!(form.submit(), SubmitOutcome::Invalid { failed: 5 });
        for field in Field::ALL {
            assert_eq!(form.error(field), Some(rule_for(field).message));
        }
        assert_eq!(form.success(), None);
    }

    #[test]
    fn resubmit_starts_from_clean_feedback() {
        let mut form = filled("A", "nope", "+995555123456", "abc123", "hello!");
        assert_eq!(form.submit(), SubmitOutcome::Invalid { failed: 2 });

        form.set_value(Field::Name, "Ana");
        assert_eq!(form.submit(), SubmitOutcome::Invalid { failed: 1 });
        assert_eq!(form.error(Field::Name), None);
        assert!(form.error(Field::Email).is_some());

        form.set_value(Field::Email, "ana@mail.ge");
        assert_eq!(form.submit(), SubmitOutcome::Valid);
        assert!(Field::ALL.iter().all(|f| form.error(*f).is_none()));
    }

    #[test]
    fn success_is_cleared_by_next_failing_submit() {
        let mut form = valid();
        form.submit();
        assert!(form.success().is_some());
        form.submit();
        assert_eq!(form.success(), None);
    }

    #[test]
    fn password_toggle_flips_type_and_label() {
        let mut form = ContactForm::default();
        assert_eq!(form.password_visibility().input_type(), "password");
        assert_eq!(form.password_visibility().label(), "Show");
        form.toggle_password();
        assert_eq!(form.password_visibility().input_type(), "text");
        assert_eq!(form.password_visibility().label(), "Hide");
        form.toggle_password();
        assert_eq!(form.password_visibility(), PasswordVisibility::Masked);
    }

    #[test]
    fn failed_submit_keeps_password_visible() {
        let mut form = filled("A", "a@b.co", "+995555123456", "abc123", "hello!");
        form.toggle_password();
        form.submit();
        assert_eq!(form.password_visibility(), PasswordVisibility::Plain);
    }

    #[test]
    fn successful_submit_masks_password_again() {
        let mut form = valid();
        form.toggle_password();
        assert_eq!(form.submit(), SubmitOutcome::Valid);
        assert_eq!(form.password_visibility(), PasswordVisibility::Masked);
        assert_eq!(form.password_visibility().label(), "Show");
    }
}
