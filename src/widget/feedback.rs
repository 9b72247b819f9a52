use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::FeedbackPayload;

/// A single-choice thumbs rating. Selecting one clears the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbChoice {
    Up,
    Down,
}

/// One open feedback form, scoped to the assistant message it rates.
///
/// Each form carries its own pending thumb selection. Two forms open at the
/// same time cannot interfere with each other's submission.
#[derive(Debug, Clone)]
pub struct FeedbackForm {
    id: Uuid,
    message_id: String,
    thumb: Option<ThumbChoice>,
}

impl FeedbackForm {
    pub fn new(message_id: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            message_id,
            thumb: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    pub fn thumb(&self) -> Option<ThumbChoice> {
        self.thumb
    }

    /// Record the thumb selection; replaces any previous choice.
    pub fn select_thumb(&mut self, choice: ThumbChoice) {
        self.thumb = Some(choice);
    }

    /// Build the `/feedback` payload. Thumbs fields are emitted only for the
    /// selected choice; the comment is dropped when blank after trimming.
    pub fn into_payload(self, comment: &str) -> FeedbackPayload {
        let trimmed = comment.trim();
        FeedbackPayload {
            message_id: self.message_id,
            thumbs_up: matches!(self.thumb, Some(ThumbChoice::Up)).then_some(true),
            thumbs_down: matches!(self.thumb, Some(ThumbChoice::Down)).then_some(true),
            feedback_text: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }
}

/// The set of currently open feedback forms, keyed by form id.
#[derive(Debug, Clone, Default)]
pub struct FeedbackForms {
    open: HashMap<Uuid, FeedbackForm>,
}

impl FeedbackForms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new form for the given assistant message. Returns the form id.
    pub fn open(&mut self, message_id: String) -> Uuid {
        let form = FeedbackForm::new(message_id);
        let id = form.id();
        self.open.insert(id, form);
        id
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut FeedbackForm> {
        self.open.get_mut(&id)
    }

    /// Remove a form from the page; submission consumes the form.
    pub fn take(&mut self, id: Uuid) -> Option<FeedbackForm> {
        self.open.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn clear(&mut self) {
        self.open.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_has_no_thumb() {
        let form = FeedbackForm::new("m1".into());
        assert!(form.thumb().is_none());
        assert_eq!(form.message_id(), "m1");
    }

    #[test]
    fn selecting_down_after_up_replaces_it() {
        let mut form = FeedbackForm::new("m1".into());
        form.select_thumb(ThumbChoice::Up);
        form.select_thumb(ThumbChoice::Down);
        assert_eq!(form.thumb(), Some(ThumbChoice::Down));

        let payload = form.into_payload("");
        assert!(payload.thumbs_up.is_none());
        assert_eq!(payload.thumbs_down, Some(true));
    }

    #[test]
    fn payload_without_selection_omits_both_thumbs() {
        let form = FeedbackForm::new("m1".into());
        let payload = form.into_payload("");
        assert!(payload.thumbs_up.is_none());
        assert!(payload.thumbs_down.is_none());
    }

    #[test]
    fn comment_is_trimmed_and_blank_dropped() {
        let form = FeedbackForm::new("m1".into());
        let payload = form.into_payload("  good  ");
        assert_eq!(payload.feedback_text.as_deref(), Some("good"));

        let form = FeedbackForm::new("m1".into());
        let payload = form.into_payload("   ");
        assert!(payload.feedback_text.is_none());
    }

    #[test]
    fn forms_are_independent() {
        let mut forms = FeedbackForms::new();
        let first = forms.open("m1".into());
        let second = forms.open("m2".into());

        forms.get_mut(first).unwrap().select_thumb(ThumbChoice::Up);
        forms
            .get_mut(second)
            .unwrap()
            .select_thumb(ThumbChoice::Down);

        let payload = forms.take(first).unwrap().into_payload("");
        assert_eq!(payload.message_id, "m1");
        assert_eq!(payload.thumbs_up, Some(true));

        let payload = forms.take(second).unwrap().into_payload("");
        assert_eq!(payload.message_id, "m2");
        assert_eq!(payload.thumbs_down, Some(true));
    }

    #[test]
    fn take_removes_the_form() {
        let mut forms = FeedbackForms::new();
        let id = forms.open("m1".into());
        assert!(forms.take(id).is_some());
        assert!(forms.take(id).is_none());
        assert!(forms.is_empty());
    }
}
