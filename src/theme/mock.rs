// src/theme/mock.rs — Built-in theme used when no generator tool is installed

use serde_json::Value;

use super::{ColorSchemes, ColorTokens, SchemeType, ThemeDocument, ThemeStyles};

const LIGHT_TOKENS: &[(&str, &str)] = &[
    ("background", "0 0% 100%"),
    ("foreground", "240 10% 3.9%"),
    ("card", "0 0% 100%"),
    ("card-foreground", "240 10% 3.9%"),
    ("popover", "0 0% 100%"),
    ("popover-foreground", "240 10% 3.9%"),
    ("primary", "240 5.9% 10%"),
    ("primary-foreground", "0 0% 98%"),
    ("secondary", "240 4.8% 95.9%"),
    ("secondary-foreground", "240 5.9% 10%"),
    ("muted", "240 4.8% 95.9%"),
    ("muted-foreground", "240 3.8% 46.1%"),
    ("accent", "240 4.8% 95.9%"),
    ("accent-foreground", "240 5.9% 10%"),
    ("destructive", "0 84.2% 60.2%"),
    ("destructive-foreground", "0 0% 98%"),
    ("border", "240 5.9% 90%"),
    ("input", "240 5.9% 90%"),
    ("ring", "240 10% 3.9%"),
    ("chart-1", "12 76% 61%"),
    ("chart-2", "173 58% 39%"),
    ("chart-3", "197 37% 24%"),
    ("chart-4", "43 74% 66%"),
    ("chart-5", "27 87% 67%"),
];

const DARK_TOKENS: &[(&str, &str)] = &[
    ("background", "240 10% 3.9%"),
    ("foreground", "0 0% 98%"),
    ("card", "240 10% 3.9%"),
    ("card-foreground", "0 0% 98%"),
    ("popover", "240 10% 3.9%"),
    ("popover-foreground", "0 0% 98%"),
    ("primary", "0 0% 98%"),
    ("primary-foreground", "240 5.9% 10%"),
    ("secondary", "240 3.7% 15.9%"),
    ("secondary-foreground", "0 0% 98%"),
    ("muted", "240 3.7% 15.9%"),
    ("muted-foreground", "240 5% 64.9%"),
    ("accent", "240 3.7% 15.9%"),
    ("accent-foreground", "0 0% 98%"),
    ("destructive", "0 62.8% 30.6%"),
    ("destructive-foreground", "0 0% 98%"),
    ("border", "240 3.7% 15.9%"),
    ("input", "240 3.7% 15.9%"),
    ("ring", "240 4.9% 83.9%"),
    ("chart-1", "220 70% 50%"),
    ("chart-2", "160 60% 45%"),
    ("chart-3", "30 80% 55%"),
    ("chart-4", "280 65% 60%"),
    ("chart-5", "340 75% 55%"),
];

pub const MOCK_RADIUS: f64 = 0.5;

fn tokens(table: &[(&str, &str)]) -> ColorTokens {
    table
        .iter()
        .map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
        .collect()
}

/// Build the mock theme. `number` ends up in the name (`Generated Theme N`).
pub fn mock_theme(number: u32) -> ThemeDocument {
    ThemeDocument {
        name: format!("Generated Theme {number}"),
        styles: ThemeStyles {
            scheme_type: SchemeType::Dark,
            css: String::new(),
            colors: ColorSchemes {
                light: tokens(LIGHT_TOKENS),
                dark: tokens(DARK_TOKENS),
            },
            radius: MOCK_RADIUS,
        },
    }
}

/// Random name number in `1..=100`. Falls back to 1 if the OS RNG fails.
pub fn random_theme_number() -> u32 {
    let mut buf = [0u8; 4];
    if getrandom::getrandom(&mut buf).is_err() {
        return 1;
    }
    u32::from_le_bytes(buf) % 100 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_theme_name() {
        assert_eq!(mock_theme(7).name, "Generated Theme 7");
    }

    #[test]
    fn test_mock_theme_token_sets_match() {
        let theme = mock_theme(1);
        let light: Vec<&String> = theme.styles.colors.light.keys().collect();
        let dark: Vec<&String> = theme.styles.colors.dark.keys().collect();
        assert_eq!(light, dark);
        assert_eq!(light.len(), 24);
        assert!(theme.styles.colors.light.contains_key("chart-5"));
    }

    #[test]
    fn test_mock_theme_shape() {
        let value = serde_json::to_value(mock_theme(3)).unwrap();
        assert_eq!(value["styles"]["type"], "dark");
        assert_eq!(value["styles"]["css"], "");
        assert_eq!(value["styles"]["radius"], 0.5);
        assert_eq!(value["styles"]["colors"]["light"]["background"], "0 0% 100%");
        assert_eq!(value["styles"]["colors"]["dark"]["background"], "240 10% 3.9%");
    }

    #[test]
    fn test_mock_tokens_keep_table_order() {
        let value = serde_json::to_value(mock_theme(1)).unwrap();
        for scheme in ["light", "dark"] {
            let keys: Vec<&str> = value["styles"]["colors"][scheme]
                .as_object()
                .unwrap()
                .keys()
                .map(String::as_str)
                .take(4)
                .collect();
            assert_eq!(keys, ["background", "foreground", "card", "card-foreground"]);
        }
    }

    #[test]
    fn test_random_theme_number_in_range() {
        for _ in 0..200 {
            let n = random_theme_number();
            assert!((1..=100).contains(&n));
        }
    }
}
