//! Input validation logic

use super::state::{App, EditingField};
use crate::model::{FieldCounter, ValidationError};

impl App {
    /// Live character counter for a form field (trimmed, as submitted)
    pub fn field_counter(&self, field: EditingField) -> FieldCounter {
        let policy = self.model.policy();
        let max = match field {
            EditingField::Title => policy.title_max_chars,
            EditingField::Content => policy.content_max_chars,
        };
        FieldCounter::new(self.form.value(field).trim(), max)
    }

    /// Validate current input and update validation_errors
    ///
    /// Runs on every keystroke, so an empty content field is not flagged
    /// until the form is submitted.
    pub fn validate_inputs(&mut self) {
        self.form.clear_errors();

        for field in [EditingField::Title, EditingField::Content] {
            let counter = self.field_counter(field);
            if counter.is_exceeded() {
                self.form.set_error(
                    field,
                    format!(
                        "{} exceeds the maximum length of {} characters",
                        field.display_title(),
                        counter.max
                    ),
                );
            }
        }
    }

    /// Route a rejected submit to the field it concerns
    pub fn show_validation_error(&mut self, err: &ValidationError) {
        match err {
            ValidationError::EmptyContent | ValidationError::ContentTooLong { .. } => {
                self.form.set_error(EditingField::Content, err.to_string());
                self.focus_form(EditingField::Content);
            }
            ValidationError::EmptyTitle | ValidationError::TitleTooLong { .. } => {
                self.form.set_error(EditingField::Title, err.to_string());
                self.focus_form(EditingField::Title);
            }
            ValidationError::SizeLimitExceeded { .. } => self.set_warning(err.to_string()),
        }
    }

    pub fn has_validation_errors(&self) -> bool {
        self.form.has_errors()
    }
}
