//! Wizard form state and step bookkeeping

use super::field::FormField;
use crate::i18n::Language;
use crate::state::GenerateRequest;

/// Number of steps in the wizard
pub const TOTAL_STEPS: u8 = 5;

/// The five wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Company,
    Product,
    Category,
    Country,
    Description,
}

impl WizardStep {
    /// 1-based step number
    pub fn number(self) -> u8 {
        match self {
            Self::Company => 1,
            Self::Product => 2,
            Self::Category => 3,
            Self::Country => 4,
            Self::Description => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Company),
            2 => Some(Self::Product),
            3 => Some(Self::Category),
            4 => Some(Self::Country),
            5 => Some(Self::Description),
            _ => None,
        }
    }

    /// Following step, `None` at the last step
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Preceding step, `None` at the first step
    pub fn prev(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    /// Steps 3 and 4 pick from a fixed list instead of free text
    pub fn is_choice(self) -> bool {
        matches!(self, Self::Category | Self::Country)
    }
}

/// Field values collected by the wizard plus the current step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub company_name: FormField,
    pub product_name: FormField,
    pub product_category: String,
    pub target_country: String,
    pub product_description: FormField,
    pub current_step: WizardStep,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            company_name: FormField::text(),
            product_name: FormField::text(),
            product_category: String::new(),
            target_country: String::new(),
            product_description: FormField::multiline(),
            current_step: WizardStep::Company,
        }
    }

    /// Whether the field a step requires has been filled in
    pub fn is_step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Company => !self.company_name.is_empty(),
            WizardStep::Product => !self.product_name.is_empty(),
            WizardStep::Category => !self.product_category.is_empty(),
            WizardStep::Country => !self.target_country.is_empty(),
            WizardStep::Description => !self.product_description.is_empty(),
        }
    }

    /// Text input of the current step, `None` on choice steps
    pub fn active_text_field_mut(&mut self) -> Option<&mut FormField> {
        match self.current_step {
            WizardStep::Company => Some(&mut self.company_name),
            WizardStep::Product => Some(&mut self.product_name),
            WizardStep::Description => Some(&mut self.product_description),
            WizardStep::Category | WizardStep::Country => None,
        }
    }

    /// Snapshot the business fields into a request body, verbatim
    pub fn to_request(&self, language: Option<Language>) -> GenerateRequest {
        GenerateRequest {
            company_name: self.company_name.as_text().to_string(),
            product_name: self.product_name.as_text().to_string(),
            product_category: self.product_category.clone(),
            target_country: self.target_country.clone(),
            product_description: self.product_description.as_text().to_string(),
            language,
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod wizard_step {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_numbers_are_one_based() {
            assert_eq!(WizardStep::Company.number(), 1);
            assert_eq!(WizardStep::Description.number(), TOTAL_STEPS);
        }

        #[test]
        fn test_from_number_rejects_out_of_range() {
            assert_eq!(WizardStep::from_number(0), None);
            assert_eq!(WizardStep::from_number(6), None);
            assert_eq!(WizardStep::from_number(3), Some(WizardStep::Category));
        }

        #[test]
        fn test_next_and_prev_are_bounded() {
            assert_eq!(WizardStep::Description.next(), None);
            assert_eq!(WizardStep::Company.prev(), None);
            assert_eq!(WizardStep::Category.next(), Some(WizardStep::Country));
            assert_eq!(WizardStep::Category.prev(), Some(WizardStep::Product));
        }

        #[test]
        fn test_choice_steps() {
            assert!(WizardStep::Category.is_choice());
            assert!(WizardStep::Country.is_choice());
            assert!(!WizardStep::Company.is_choice());
            assert!(!WizardStep::Description.is_choice());
        }
    }

    mod form_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_is_empty_at_step_one() {
            let form = FormState::new();
            assert_eq!(form.current_step, WizardStep::Company);
            assert!(form.company_name.is_empty());
            assert!(form.product_category.is_empty());
            assert!(form.product_description.is_multiline);
        }

        #[test]
        fn test_step_completion_tracks_required_field() {
            let mut form = FormState::new();
            assert!(!form.is_step_complete(WizardStep::Company));
            form.company_name.set_text("Acme");
            assert!(form.is_step_complete(WizardStep::Company));

            assert!(!form.is_step_complete(WizardStep::Country));
            form.target_country = "usa".to_string();
            assert!(form.is_step_complete(WizardStep::Country));
        }

        #[test]
        fn test_active_text_field_none_on_choice_steps() {
            let mut form = FormState::new();
            form.current_step = WizardStep::Category;
            assert!(form.active_text_field_mut().is_none());
            form.current_step = WizardStep::Description;
            assert!(form
                .active_text_field_mut()
                .is_some_and(|f| f.is_multiline));
        }

        #[test]
        fn test_to_request_copies_fields_verbatim() {
            let mut form = FormState::new();
            form.company_name.set_text("  Acme  ");
            form.product_name.set_text("Widget");
            form.product_category = "Electronics".to_string();
            form.target_country = "usa".to_string();
            form.product_description.set_text("A small\nwidget");

            let request = form.to_request(Some(Language::En));
            assert_eq!(
                request,
                GenerateRequest {
                    company_name: "  Acme  ".to_string(),
                    product_name: "Widget".to_string(),
                    product_category: "Electronics".to_string(),
                    target_country: "usa".to_string(),
                    product_description: "A small\nwidget".to_string(),
                    language: Some(Language::En),
                }
            );
        }
    }
}
