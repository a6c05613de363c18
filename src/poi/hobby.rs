//! Hobby to Overpass tag mapping

/// Tag used for hobbies that have no mapping of their own
pub const DEFAULT_TAG: &str = "tourism=museum";

/// Look up the Overpass tag filters for a hobby category.
///
/// The lookup is case-insensitive; unrecognized hobbies fall back to
/// [`DEFAULT_TAG`]. The table is fixed at compile time and never mutated.
#[must_use]
pub fn tags_for_hobby(hobby: &str) -> &'static [&'static str] {
    match hobby.to_lowercase().as_str() {
        "culture" => &["tourism=museum", "historic=yes"],
        "adventure" => &["leisure=park", "sport=*"],
        "food" => &["amenity=restaurant"],
        "shopping" => &["shop=*"],
        _ => &[DEFAULT_TAG],
    }
}

/// A single Overpass tag filter, split into key and value.
///
/// A `*` value means "any value" and renders as a key-presence filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTag {
    pub key: String,
    pub value: Option<String>,
}

impl FilterTag {
    /// Parse a `key=value` tag string.
    ///
    /// Tags without a `=` keep the whole string as the key; `*` values
    /// become `None`.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag.split_once('=') {
            Some((key, "*")) => Self {
                key: key.to_string(),
                value: None,
            },
            Some((key, value)) => Self {
                key: key.to_string(),
                value: Some(value.to_string()),
            },
            None => Self {
                key: tag.to_string(),
                value: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("culture", &["tourism=museum", "historic=yes"])]
    #[case("adventure", &["leisure=park", "sport=*"])]
    #[case("food", &["amenity=restaurant"])]
    #[case("shopping", &["shop=*"])]
    fn test_known_hobby_tags(#[case] hobby: &str, #[case] expected: &[&str]) {
        assert_eq!(tags_for_hobby(hobby), expected);
    }

    #[rstest]
    #[case("CULTURE")]
    #[case("Food")]
    fn test_lookup_is_case_insensitive(#[case] hobby: &str) {
        assert_eq!(
            tags_for_hobby(hobby),
            tags_for_hobby(&hobby.to_lowercase())
        );
    }

    #[rstest]
    #[case("stargazing")]
    #[case("")]
    fn test_unknown_hobby_falls_back_to_default(#[case] hobby: &str) {
        assert_eq!(tags_for_hobby(hobby), &[DEFAULT_TAG]);
    }

    #[test]
    fn test_filter_tag_parse() {
        let tag = FilterTag::parse("amenity=restaurant");
        assert_eq!(tag.key, "amenity");
        assert_eq!(tag.value.as_deref(), Some("restaurant"));
    }

    #[test]
    fn test_filter_tag_parse_wildcard() {
        let tag = FilterTag::parse("shop=*");
        assert_eq!(tag.key, "shop");
        assert_eq!(tag.value, None);
    }

    #[test]
    fn test_filter_tag_parse_bare_key() {
        let tag = FilterTag::parse("historic");
        assert_eq!(tag.key, "historic");
        assert_eq!(tag.value, None);
    }
}
