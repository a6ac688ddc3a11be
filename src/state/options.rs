//! Choice lists for the category and country steps

use crate::i18n::Translations;

/// A selectable option: stable key plus localized label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// Product categories offered at step 3
pub fn product_categories(t: &'static Translations) -> Vec<ChoiceOption> {
    vec![
        ChoiceOption { key: "electronics", label: t.electronics },
        ChoiceOption { key: "foodBeverage", label: t.food_beverage },
        ChoiceOption { key: "cosmetics", label: t.cosmetics },
        ChoiceOption { key: "textiles", label: t.textiles },
        ChoiceOption { key: "machinery", label: t.machinery },
        ChoiceOption { key: "other", label: t.other },
    ]
}

/// Countries and regions offered at step 4
pub fn target_countries(t: &'static Translations) -> Vec<ChoiceOption> {
    vec![
        ChoiceOption { key: "usa", label: t.usa },
        ChoiceOption { key: "eu", label: t.eu },
        ChoiceOption { key: "japan", label: t.japan },
        ChoiceOption { key: "korea", label: t.korea },
        ChoiceOption { key: "australia", label: t.australia },
        ChoiceOption { key: "southeastAsia", label: t.southeast_asia },
        ChoiceOption { key: "middleEast", label: t.middle_east },
        ChoiceOption { key: "other", label: t.other },
    ]
}

/// Index of the option whose label matches the stored value, if any
pub fn position_of(options: &[ChoiceOption], value: &str) -> Option<usize> {
    options.iter().position(|o| o.label == value)
}
