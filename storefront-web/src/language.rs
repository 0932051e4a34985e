use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: &str = "en";

/// A language the storefront ships translations for.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

const LANGUAGES: [LanguageInfo; 2] = [
    LanguageInfo {
        code: "en",
        flag: "🇬🇧",
        translation: include_str!("../translations/en.json"),
        native_name: "English",
    },
    LanguageInfo {
        code: "es",
        flag: "🇪🇸",
        translation: include_str!("../translations/es.json"),
        native_name: "Español",
    },
];

pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    LANGUAGES.iter().find(|info| info.code == code).cloned()
}

/// Languages ordered by their native name, for the selector.
pub fn sorted_languages() -> Vec<LanguageInfo> {
    let mut languages = LANGUAGES.to_vec();
    languages.sort_by(|a, b| a.native_name.cmp(b.native_name));
    languages
}

/// Translation bundles keyed by language code, as the i18n provider wants them.
pub fn translations() -> HashMap<&'static str, &'static str> {
    LANGUAGES
        .iter()
        .map(|info| (info.code, info.translation))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundles_are_valid_json_with_the_same_sections() {
        let english: serde_json::Value = serde_json::from_str(LANGUAGES[0].translation).unwrap();
        for info in &LANGUAGES {
            let bundle: serde_json::Value = serde_json::from_str(info.translation).unwrap();
            let sections: Vec<_> = bundle.as_object().unwrap().keys().collect();
            let expected: Vec<_> = english.as_object().unwrap().keys().collect();
            assert_eq!(sections, expected, "language {}", info.code);
        }
    }

    #[test]
    fn navbar_labels_are_translated() {
        use crate::models::navigation::{NavItem, Viewport, link_set};

        fn labels(items: &[NavItem], out: &mut Vec<&'static str>) {
            for item in items {
                match item {
                    NavItem::Link { label, .. } => out.push(*label),
                    NavItem::UserMenu(nested) => labels(nested, out),
                    NavItem::SignupCta | NavItem::Logout => {}
                }
            }
        }

        let mut keys = Vec::new();
        for signed_in in [false, true] {
            for viewport in [Viewport::Desktop, Viewport::Mobile] {
                labels(&link_set(signed_in, viewport), &mut keys);
            }
        }
        for info in &LANGUAGES {
            let bundle: serde_json::Value = serde_json::from_str(info.translation).unwrap();
            for key in &keys {
                let pointer = format!("/{}", key.replace('.', "/"));
                assert!(bundle.pointer(&pointer).is_some(), "{} misses {key}", info.code);
            }
        }
    }

    #[test]
    fn order_statuses_and_profile_fields_are_translated() {
        use crate::components::profile_form::PROFILE_FIELDS;
        use shared::models::OrderStatus;

        let statuses = [
            OrderStatus::NotProcessed,
            OrderStatus::Processed,
            OrderStatus::Shipping,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
            OrderStatus::Unknown,
        ];
        let keys = statuses
            .iter()
            .map(|status| status.label_key().to_string())
            .chain(PROFILE_FIELDS.iter().map(|field| format!("profile.{field}")));
        for key in keys {
            for info in &LANGUAGES {
                let bundle: serde_json::Value = serde_json::from_str(info.translation).unwrap();
                let pointer = format!("/{}", key.replace('.', "/"));
                assert!(bundle.pointer(&pointer).is_some(), "{} misses {key}", info.code);
            }
        }
    }

    #[test]
    fn default_language_is_shipped() {
        assert!(get_language_info(DEFAULT_LANGUAGE).is_some());
        assert!(get_language_info("xx").is_none());
        assert_eq!(translations().len(), 2);
    }
}
