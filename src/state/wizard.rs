//! Wizard controller: step navigation, validation gating and submission state
//!
//! The controller is synchronous. Submission is split in two halves so the
//! network call can run elsewhere: [`WizardController::begin_submit`] hands out
//! a [`PendingSubmission`] tagged with the current session, and
//! [`WizardController::finish_submit`] applies the outcome only if that
//! session is still current. `reset` starts a new session, so a response that
//! arrives after it is discarded.

use super::document::{GenerateRequest, GeneratedDocument};
use super::forms::{FormField, FormState, WizardStep};
use crate::api::{ApiError, FailureNotice};
use crate::i18n::{Language, Translations};
use chrono::{DateTime, Local};
use uuid::Uuid;

/// A request that has been started and awaits its response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub session: Uuid,
    pub request: GenerateRequest,
}

/// What `finish_submit` did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Document stored, result view should be shown
    Completed,
    /// Error message stored, form kept at step 5
    Failed,
    /// Response belonged to an earlier session and was dropped
    Stale,
}

/// Owns the form, the generated document and the loading flag
#[derive(Debug, Clone)]
pub struct WizardController {
    form: FormState,
    document: Option<GeneratedDocument>,
    generated_at: Option<DateTime<Local>>,
    error: Option<FailureNotice>,
    loading: bool,
    session: Uuid,
}

impl WizardController {
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            document: None,
            generated_at: None,
            error: None,
            loading: false,
            session: Uuid::new_v4(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn current_step(&self) -> WizardStep {
        self.form.current_step
    }

    pub fn document(&self) -> Option<&GeneratedDocument> {
        self.document.as_ref()
    }

    pub fn generated_at(&self) -> Option<DateTime<Local>> {
        self.generated_at
    }

    /// Inline error text in the given language
    pub fn error_message<'a>(&'a self, t: &'a Translations) -> Option<&'a str> {
        self.error.as_ref().map(|notice| notice.message(t))
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn session(&self) -> Uuid {
        self.session
    }

    /// Whether the explicit "next" action is enabled
    pub fn can_advance(&self) -> bool {
        let step = self.form.current_step;
        !self.loading && step.next().is_some() && self.form.is_step_complete(step)
    }

    /// Move to the next step if the current step's field is filled in
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        if let Some(next) = self.form.current_step.next() {
            self.form.current_step = next;
        }
        true
    }

    /// Move to the previous step; no-op at step 1 or while loading
    pub fn retreat(&mut self) -> bool {
        if self.loading {
            return false;
        }
        match self.form.current_step.prev() {
            Some(prev) => {
                self.form.current_step = prev;
                true
            }
            None => false,
        }
    }

    /// Pick a category at step 3 and move on to step 4
    pub fn select_category(&mut self, value: &str) -> bool {
        if self.loading || self.form.current_step != WizardStep::Category || value.is_empty() {
            return false;
        }
        self.form.product_category = value.to_string();
        self.form.current_step = WizardStep::Country;
        true
    }

    /// Pick a country at step 4 and move on to step 5
    pub fn select_country(&mut self, value: &str) -> bool {
        if self.loading || self.form.current_step != WizardStep::Country || value.is_empty() {
            return false;
        }
        self.form.target_country = value.to_string();
        self.form.current_step = WizardStep::Description;
        true
    }

    /// Text field open for editing; fields are frozen while a request is in flight
    fn editable_field(&mut self) -> Option<&mut FormField> {
        if self.loading {
            return None;
        }
        self.form.active_text_field_mut()
    }

    /// Type a character into the current step's text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.editable_field() {
            field.push_char(c);
        }
    }

    pub fn input_newline(&mut self) {
        if let Some(field) = self.editable_field() {
            field.push_newline();
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.editable_field() {
            field.pop_char();
        }
    }

    /// Whether the submit action is enabled
    pub fn can_submit(&self) -> bool {
        self.form.current_step == WizardStep::Description
            && !self.form.product_description.is_empty()
            && !self.loading
            && self.document.is_none()
    }

    /// Enter the loading state and snapshot the request to send
    pub fn begin_submit(&mut self, language: Language) -> Option<PendingSubmission> {
        if !self.can_submit() {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(PendingSubmission {
            session: self.session,
            request: self.form.to_request(Some(language)),
        })
    }

    /// Apply a response; form fields are never touched on failure
    pub fn finish_submit(
        &mut self,
        session: Uuid,
        result: Result<GeneratedDocument, ApiError>,
    ) -> SubmitOutcome {
        if session != self.session || !self.loading {
            tracing::info!(%session, current = %self.session, "Discarding stale generate-docs response");
            return SubmitOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(document) => {
                self.document = Some(document);
                self.generated_at = Some(Local::now());
                self.error = None;
                SubmitOutcome::Completed
            }
            Err(err) => {
                tracing::error!(kind = err.kind(), "Document generation failed: {err}");
                self.error = Some(err.notice());
                SubmitOutcome::Failed
            }
        }
    }

    /// Start over: fresh form, no document, new session
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::tr;
    use crate::state::RegulationDetails;

    fn sample_document() -> GeneratedDocument {
        GeneratedDocument {
            document_content: "EXPORT DOCUMENT".to_string(),
            required_certs: vec!["FCC ID".to_string()],
            compliance_items: vec![],
            estimated_time: "4-8周".to_string(),
            estimated_cost: "$3,000 - $8,000".to_string(),
            recommended_steps: vec!["Book a lab".to_string()],
            regulation_details: RegulationDetails {
                country_name: "United States".to_string(),
                ..Default::default()
            },
        }
    }

    fn type_text(wizard: &mut WizardController, text: &str) {
        for c in text.chars() {
            wizard.input_char(c);
        }
    }

    /// Walk the wizard to step 5 with every field filled in
    fn filled_to_step_five() -> WizardController {
        let mut wizard = WizardController::new();
        type_text(&mut wizard, "Acme");
        assert!(wizard.advance());
        type_text(&mut wizard, "Widget");
        assert!(wizard.advance());
        assert!(wizard.select_category("Electronics"));
        assert!(wizard.select_country("usa"));
        type_text(&mut wizard, "A small widget");
        wizard
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_advance_blocked_when_required_field_empty() {
            let mut wizard = WizardController::new();
            let before = wizard.form().clone();
            assert!(!wizard.can_advance());
            assert!(!wizard.advance());
            assert_eq!(wizard.form(), &before);
        }

        #[test]
        fn test_advance_each_step_once_filled() {
            let mut wizard = WizardController::new();
            type_text(&mut wizard, "Acme");
            assert!(wizard.advance());
            assert_eq!(wizard.current_step().number(), 2);

            assert!(!wizard.advance());
            type_text(&mut wizard, "Widget");
            assert!(wizard.advance());
            assert_eq!(wizard.current_step().number(), 3);

            // Category empty: explicit advance is gated
            assert!(!wizard.advance());
            assert_eq!(wizard.current_step().number(), 3);
        }

        #[test]
        fn test_advance_capped_at_step_five() {
            let mut wizard = filled_to_step_five();
            assert_eq!(wizard.current_step(), WizardStep::Description);
            assert!(!wizard.can_advance());
            assert!(!wizard.advance());
            assert_eq!(wizard.current_step(), WizardStep::Description);
        }

        #[test]
        fn test_retreat_floors_at_step_one() {
            let mut wizard = WizardController::new();
            assert!(!wizard.retreat());
            assert_eq!(wizard.current_step().number(), 1);
        }

        #[test]
        fn test_retreat_keeps_values() {
            let mut wizard = filled_to_step_five();
            assert!(wizard.retreat());
            assert_eq!(wizard.current_step().number(), 4);
            assert_eq!(wizard.form().target_country, "usa");
            assert_eq!(wizard.form().product_description.as_text(), "A small widget");
        }

        #[test]
        fn test_typing_ignored_on_choice_steps() {
            let mut wizard = WizardController::new();
            type_text(&mut wizard, "Acme");
            wizard.advance();
            type_text(&mut wizard, "Widget");
            wizard.advance();
            type_text(&mut wizard, "xyz");
            wizard.backspace();
            assert!(wizard.form().product_category.is_empty());
            assert_eq!(wizard.form().product_name.as_text(), "Widget");
        }

        #[test]
        fn test_newline_only_lands_in_description() {
            let mut wizard = WizardController::new();
            wizard.input_newline();
            assert!(wizard.form().company_name.is_empty());

            let mut wizard = filled_to_step_five();
            wizard.input_newline();
            type_text(&mut wizard, "v2");
            assert_eq!(
                wizard.form().product_description.as_text(),
                "A small widget\nv2"
            );
        }
    }

    mod selection {
        use super::*;
        use pretty_assertions::assert_eq;

        fn at_category_step() -> WizardController {
            let mut wizard = WizardController::new();
            type_text(&mut wizard, "Acme");
            wizard.advance();
            type_text(&mut wizard, "Widget");
            wizard.advance();
            wizard
        }

        #[test]
        fn test_select_category_auto_advances() {
            let mut wizard = at_category_step();
            assert!(wizard.select_category("Electronics"));
            assert_eq!(wizard.form().product_category, "Electronics");
            assert_eq!(wizard.current_step().number(), 4);
        }

        #[test]
        fn test_select_country_auto_advances() {
            let mut wizard = at_category_step();
            wizard.select_category("Electronics");
            assert!(wizard.select_country("United States"));
            assert_eq!(wizard.form().target_country, "United States");
            assert_eq!(wizard.current_step().number(), 5);
        }

        #[test]
        fn test_select_rejected_off_step() {
            let mut wizard = WizardController::new();
            assert!(!wizard.select_category("Electronics"));
            assert!(!wizard.select_country("usa"));
            assert!(wizard.form().product_category.is_empty());
            assert_eq!(wizard.current_step().number(), 1);
        }

        #[test]
        fn test_auto_advance_is_reversible() {
            let mut wizard = at_category_step();
            wizard.select_category("Electronics");
            assert!(wizard.retreat());
            assert_eq!(wizard.current_step(), WizardStep::Category);
            // Previous choice is kept, so explicit advance is allowed without re-picking
            assert!(wizard.can_advance());
            assert!(wizard.advance());
            assert_eq!(wizard.form().product_category, "Electronics");
        }

        #[test]
        fn test_reselect_replaces_choice() {
            let mut wizard = at_category_step();
            wizard.select_category("Electronics");
            wizard.retreat();
            wizard.select_category("Textiles");
            assert_eq!(wizard.form().product_category, "Textiles");
            assert_eq!(wizard.current_step(), WizardStep::Country);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submit_disabled_without_description() {
            let mut wizard = filled_to_step_five();
            for _ in 0.."A small widget".len() {
                wizard.backspace();
            }
            assert!(!wizard.can_submit());
            assert!(wizard.begin_submit(Language::En).is_none());
            assert!(!wizard.is_loading());
        }

        #[test]
        fn test_submit_disabled_before_step_five() {
            let mut wizard = WizardController::new();
            type_text(&mut wizard, "Acme");
            assert!(!wizard.can_submit());
        }

        #[test]
        fn test_submit_disabled_while_in_flight() {
            let mut wizard = filled_to_step_five();
            let pending = wizard.begin_submit(Language::En);
            assert!(pending.is_some());
            assert!(wizard.is_loading());
            assert!(!wizard.can_submit());
            assert!(wizard.begin_submit(Language::En).is_none());
        }

        #[test]
        fn test_pending_request_matches_form() {
            let mut wizard = filled_to_step_five();
            let pending = wizard.begin_submit(Language::En).unwrap();
            assert_eq!(pending.session, wizard.session());
            assert_eq!(
                pending.request,
                GenerateRequest {
                    company_name: "Acme".to_string(),
                    product_name: "Widget".to_string(),
                    product_category: "Electronics".to_string(),
                    target_country: "usa".to_string(),
                    product_description: "A small widget".to_string(),
                    language: Some(Language::En),
                }
            );
        }

        #[test]
        fn test_success_stores_document() {
            let mut wizard = filled_to_step_five();
            let pending = wizard.begin_submit(Language::En).unwrap();
            let outcome = wizard.finish_submit(pending.session, Ok(sample_document()));
            assert_eq!(outcome, SubmitOutcome::Completed);
            assert_eq!(wizard.document(), Some(&sample_document()));
            assert!(wizard.generated_at().is_some());
            assert!(!wizard.is_loading());
            assert!(wizard.error_message(tr(Language::En)).is_none());
        }

        #[test]
        fn test_http_failure_keeps_form() {
            let mut wizard = filled_to_step_five();
            let before = wizard.form().clone();
            let pending = wizard.begin_submit(Language::En).unwrap();
            let outcome = wizard.finish_submit(pending.session, Err(ApiError::Http { status: 500 }));
            assert_eq!(outcome, SubmitOutcome::Failed);
            assert_eq!(
                wizard.error_message(tr(Language::En)),
                Some(tr(Language::En).network_error)
            );
            assert!(wizard.document().is_none());
            assert_eq!(wizard.form(), &before);
            assert_eq!(wizard.current_step().number(), 5);
            assert!(wizard.can_submit());
        }

        #[test]
        fn test_form_frozen_while_in_flight() {
            let mut wizard = filled_to_step_five();
            let before = wizard.form().clone();
            let pending = wizard.begin_submit(Language::En).unwrap();

            type_text(&mut wizard, "X");
            wizard.input_newline();
            wizard.backspace();
            assert!(!wizard.retreat());
            assert!(!wizard.advance());
            assert!(!wizard.can_advance());
            assert_eq!(wizard.form(), &before);

            wizard.finish_submit(pending.session, Err(ApiError::Http { status: 500 }));
            assert_eq!(wizard.form(), &before);
            assert_eq!(wizard.current_step(), WizardStep::Description);

            // Editable again once the request has settled
            wizard.backspace();
            assert_eq!(wizard.form().product_description.as_text(), "A small widge");
        }

        #[test]
        fn test_error_text_follows_language() {
            let mut wizard = filled_to_step_five();
            let pending = wizard.begin_submit(Language::En).unwrap();
            wizard.finish_submit(pending.session, Err(ApiError::EmptyBody));
            assert_eq!(
                wizard.error_message(tr(Language::En)),
                Some(tr(Language::En).empty_response)
            );
            assert_eq!(
                wizard.error_message(tr(Language::Zh)),
                Some(tr(Language::Zh).empty_response)
            );
        }

        #[test]
        fn test_business_failure_surfaces_message() {
            let mut wizard = filled_to_step_five();
            let pending = wizard.begin_submit(Language::En).unwrap();
            wizard.finish_submit(
                pending.session,
                Err(ApiError::Business {
                    code: 400,
                    message: "invalid category".to_string(),
                }),
            );
            assert_eq!(
                wizard.error_message(tr(Language::En)),
                Some("invalid category")
            );
            assert!(wizard.document().is_none());
        }

        #[test]
        fn test_retry_clears_previous_error() {
            let mut wizard = filled_to_step_five();
            let pending = wizard.begin_submit(Language::En).unwrap();
            wizard.finish_submit(pending.session, Err(ApiError::EmptyBody));
            assert!(wizard.error_message(tr(Language::En)).is_some());

            let retry = wizard.begin_submit(Language::En).unwrap();
            assert!(wizard.error_message(tr(Language::En)).is_none());
            wizard.finish_submit(retry.session, Ok(sample_document()));
            assert!(wizard.document().is_some());
        }

        #[test]
        fn test_response_after_reset_is_stale() {
            let mut wizard = filled_to_step_five();
            let pending = wizard.begin_submit(Language::En).unwrap();
            wizard.reset();

            let outcome = wizard.finish_submit(pending.session, Ok(sample_document()));
            assert_eq!(outcome, SubmitOutcome::Stale);
            assert!(wizard.document().is_none());
            assert_eq!(wizard.current_step(), WizardStep::Company);
        }

        #[test]
        fn test_duplicate_response_is_stale() {
            let mut wizard = filled_to_step_five();
            let pending = wizard.begin_submit(Language::En).unwrap();
            wizard.finish_submit(pending.session, Err(ApiError::EmptyBody));
            let outcome = wizard.finish_submit(pending.session, Ok(sample_document()));
            assert_eq!(outcome, SubmitOutcome::Stale);
            assert!(wizard.document().is_none());
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_after_result_starts_fresh() {
            let mut wizard = filled_to_step_five();
            let old_session = wizard.session();
            let pending = wizard.begin_submit(Language::En).unwrap();
            wizard.finish_submit(pending.session, Ok(sample_document()));

            wizard.reset();
            assert!(wizard.document().is_none());
            assert!(wizard.generated_at().is_none());
            assert_eq!(wizard.current_step().number(), 1);
            assert_eq!(wizard.form(), &FormState::new());
            assert_ne!(wizard.session(), old_session);
        }

        #[test]
        fn test_submit_disabled_while_document_shown() {
            let mut wizard = filled_to_step_five();
            let pending = wizard.begin_submit(Language::En).unwrap();
            wizard.finish_submit(pending.session, Ok(sample_document()));
            assert!(!wizard.can_submit());
        }
    }
}
