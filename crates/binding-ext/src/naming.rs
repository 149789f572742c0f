//! Name conversions applied to class names, resource references and
//! snake_case attribute names before they are emitted as source code.

use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamingError {
    /// A resource reference without the `<namespace>/<identifier>` separator.
    #[error("malformed resource identifier `{input}`: expected `<namespace>/<identifier>`")]
    MalformedResourceId { input: String },
}

/// Turns a binary class name (`a.b.Outer$Inner`) into its source form (`a.b.Outer.Inner`).
pub fn to_java_code(binary_name: &str) -> String {
    binary_name.replace('$', ".")
}

/// Extracts the identifier from a `<namespace>/<identifier>` resource reference.
///
/// Everything after the first `/` is the identifier, so `@+id/name` yields `name`.
pub fn android_id(reference: &str) -> Result<&str, NamingError> {
    reference
        .split_once('/')
        .map(|(_, id)| id)
        .ok_or_else(|| NamingError::MalformedResourceId {
            input: reference.to_string(),
        })
}

/// PascalCase form of a snake_case name: `foo_bar` becomes `FooBar`.
pub fn to_camel_case(name: &str) -> String {
    let tokens = name.split('_').collect::<Vec<_>>();
    match tokens.as_slice() {
        [single] => capitalize(single).into_owned(),
        _ => join_to_camel_case(&tokens),
    }
}

/// Variable-style form of a snake_case name: `foo_bar` becomes `fooBar`.
pub fn to_camel_case_as_var(name: &str) -> String {
    let tokens = name.split('_').collect::<Vec<_>>();
    match tokens.as_slice() {
        [single] => (*single).to_string(),
        _ => join_to_camel_case_as_var(&tokens),
    }
}

/// Concatenates the tokens, each with its first character upper-cased.
pub fn join_to_camel_case<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut joined = String::with_capacity(tokens.iter().map(|t| t.as_ref().len()).sum());
    for token in tokens {
        joined.push_str(&capitalize(token.as_ref()));
    }
    joined
}

/// Like [`join_to_camel_case`], but the first token is kept as is.
pub fn join_to_camel_case_as_var<S: AsRef<str>>(tokens: &[S]) -> String {
    match tokens.split_first() {
        Some((first, rest)) => {
            let mut joined = first.as_ref().to_string();
            joined.push_str(&join_to_camel_case(rest));
            joined
        }
        None => String::new(),
    }
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize(token: &str) -> Cow<'_, str> {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if !first.to_uppercase().eq(std::iter::once(first)) => {
            let mut capitalized = String::with_capacity(token.len());
            capitalized.extend(first.to_uppercase());
            capitalized.push_str(chars.as_str());
            Cow::Owned(capitalized)
        }
        _ => Cow::Borrowed(token),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("java.util.Map$Entry", "java.util.Map.Entry")]
    #[case("a.Outer$Middle$Inner", "a.Outer.Middle.Inner")]
    #[case("java.lang.String", "java.lang.String")]
    #[case("", "")]
    fn binary_names(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_java_code(input), expected);
    }

    #[rstest]
    #[case("layout/foo", "foo")]
    #[case("@+id/user_name", "user_name")]
    #[case("@android:id/text1", "text1")]
    #[case("drawable/", "")]
    #[case("a/b/c", "b/c")]
    fn resource_ids(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(android_id(input), Ok(expected));
    }

    #[test]
    fn resource_id_without_separator_is_rejected() {
        let err = android_id("foo").unwrap_err();
        assert_eq!(
            err,
            NamingError::MalformedResourceId {
                input: "foo".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "malformed resource identifier `foo`: expected `<namespace>/<identifier>`"
        );
    }

    #[rstest]
    #[case("foo_bar_baz", "FooBarBaz", "fooBarBaz")]
    #[case("foo", "Foo", "foo")]
    #[case("", "", "")]
    #[case("Foo", "Foo", "Foo")]
    #[case("foo_HTTP_client", "FooHTTPClient", "fooHTTPClient")]
    #[case("foo__bar", "FooBar", "fooBar")]
    #[case("_foo", "Foo", "Foo")]
    #[case("foo_", "Foo", "foo")]
    #[case("über_straße", "ÜberStraße", "überStraße")]
    fn camel_case(#[case] input: &str, #[case] pascal: &str, #[case] var: &str) {
        assert_eq!(to_camel_case(input), pascal);
        assert_eq!(to_camel_case_as_var(input), var);
    }

    #[test]
    fn joins_handle_empty_token_lists() {
        let empty: [&str; 0] = [];
        assert_eq!(join_to_camel_case(&empty), "");
        assert_eq!(join_to_camel_case_as_var(&empty), "");
    }

    #[test]
    fn joins_accept_owned_tokens() {
        let tokens = vec!["view".to_string(), "model".to_string()];
        assert_eq!(join_to_camel_case(&tokens), "ViewModel");
        assert_eq!(join_to_camel_case_as_var(&tokens), "viewModel");
    }

    #[test]
    fn capitalize_borrows_when_unchanged() {
        assert!(matches!(capitalize("Already"), Cow::Borrowed("Already")));
        assert!(matches!(capitalize(""), Cow::Borrowed("")));
        assert!(matches!(capitalize("9lives"), Cow::Borrowed("9lives")));
        assert_eq!(capitalize("name"), "Name");
    }
}
