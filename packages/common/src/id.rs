//! Identifier normalization shared across the toolchain.
//!
//! Resource identifiers arrive in snake_case (`header_title`) or kebab-case
//! and are exposed to generated code as camelCase members. Normalization is a
//! pure function of the raw identifier, so two raw ids that normalize
//! identically always collide.

/// Convert a raw resource identifier to camelCase (`header_title` → `headerTitle`).
pub fn camel_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut upper_next = false;
    for ch in raw.chars() {
        match ch {
            '_' | '-' | '.' => upper_next = true,
            _ if upper_next => {
                out.extend(ch.to_uppercase());
                upper_next = false;
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Convert a raw identifier to PascalCase (`login_form` → `LoginForm`).
pub fn pascal_case(raw: &str) -> String {
    let camel = camel_case(raw);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => camel,
    }
}

/// Generated wrapper class name for a logical layout (`login_form` → `LoginFormXml`).
pub fn layout_class_name(layout_name: &str) -> String {
    format!("{}Xml", pascal_case(layout_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_snake() {
        assert_eq!(camel_case("header_title"), "headerTitle");
        assert_eq!(camel_case("a_b_c"), "aBC");
    }

    #[test]
    fn test_camel_case_passthrough() {
        assert_eq!(camel_case("already"), "already");
        assert_eq!(camel_case("alreadyCamel"), "alreadyCamel");
    }

    #[test]
    fn test_camel_case_kebab() {
        assert_eq!(camel_case("tab-bar-item"), "tabBarItem");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("login_form"), "LoginForm");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn test_layout_class_name() {
        assert_eq!(layout_class_name("login_form"), "LoginFormXml");
        assert_eq!(layout_class_name("screen"), "ScreenXml");
    }
}
