//! Parsing of a single command line into an action and named parameters.
//!
//! Input lines follow a small query-string style grammar:
//!
//! ```text
//! <action>?<name1>=<value1>&<name2>=<value2>
//! ```
//!
//! Parsing never fails. Fragments without `=` are dropped, duplicate names
//! keep the last value, and every piece is trimmed of surrounding whitespace.

use std::str::FromStr;

use indexmap::IndexMap;

/// Separates the action from its parameters
pub const ACTION_DELIMITER: char = '?';
/// Separates parameter fragments from each other
pub const PARAMETER_DELIMITER: char = '&';
/// Separates a parameter name from its value
pub const VALUE_DELIMITER: char = '=';

/// Result of looking up a parameter and converting it to a typed value.
///
/// Distinguishes a parameter that was never supplied from one whose text
/// could not be converted.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Param<T> {
    Absent,
    Invalid(String),
    Valid(T),
}

impl<T> Param<T> {
    /// Returns the converted value, or `default` when absent or invalid.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Param::Valid(value) => value,
            Param::Absent | Param::Invalid(_) => default,
        }
    }
}

/// One parsed command line.
///
/// # Examples
///
/// ```
/// use quotes_core::request::Request;
///
/// let request = Request::parse("delete?id=3");
/// assert_eq!(request.action(), "delete");
/// assert_eq!(request.param_as_int("id", 0), 3);
/// ```
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Request {
    action: String,
    parameters: IndexMap<String, String>,
}

impl Request {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let Some((head, rest)) = line.split_once(ACTION_DELIMITER) else {
            return Self {
                action: line.trim().to_string(),
                parameters: IndexMap::new(),
            };
        };

        let mut parameters = IndexMap::new();

        for fragment in rest.trim().split(PARAMETER_DELIMITER) {
            // Fragments without a value delimiter carry no parameter
            let Some((name, value)) = fragment.split_once(VALUE_DELIMITER) else {
                continue;
            };

            parameters.insert(name.trim().to_string(), value.trim().to_string());
        }

        Self {
            action: head.trim().to_string(),
            parameters,
        }
    }

    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    #[must_use]
    pub fn has_param(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    /// Iterates over parameters in the order their names first appeared.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the raw value of a parameter, or `default` if it was not supplied.
    #[must_use]
    pub fn param<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.parameters
            .get(name)
            .map_or(default, String::as_str)
    }

    /// Looks up a parameter and converts it with [`FromStr`].
    pub fn param_parsed<T: FromStr>(&self, name: &str) -> Param<T> {
        match self.parameters.get(name) {
            None => Param::Absent,
            Some(raw) => match raw.parse::<T>() {
                Ok(value) => Param::Valid(value),
                Err(_) => Param::Invalid(raw.clone()),
            },
        }
    }

    /// Returns a parameter as a base-10 integer.
    ///
    /// Absent, empty, non-numeric and out of range values all yield `default`.
    #[must_use]
    pub fn param_as_int(&self, name: &str, default: i32) -> i32 {
        self.param_parsed::<i32>(name).unwrap_or(default)
    }
}

impl From<&str> for Request {
    fn from(line: &str) -> Self {
        Self::parse(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_delimiter_trims_action() {
        let request = Request::parse("   list  ");
        assert_eq!(request.action(), "list");
        assert_eq!(request.params().count(), 0);
    }

    #[test]
    fn test_parse_empty_line() {
        let request = Request::parse("");
        assert_eq!(request.action(), "");
        assert_eq!(request.params().count(), 0);
    }

    #[test]
    fn test_parse_delete_with_id() {
        let request = Request::parse("delete?id=3");
        assert_eq!(request.action(), "delete");
        assert_eq!(request.param_as_int("id", 0), 3);
    }

    #[test]
    fn test_parse_trims_names_and_values() {
        let request = Request::parse(" delete ?  id = 7 & force= true ");
        assert_eq!(request.action(), "delete");
        assert_eq!(request.param("id", ""), "7");
        assert_eq!(request.param("force", ""), "true");
    }

    #[test]
    fn test_parse_empty_value_is_recorded() {
        let request = Request::parse("x?id=&a=1");
        assert!(request.has_param("id"));
        assert_eq!(request.param("id", "missing"), "");
        assert_eq!(request.param("a", ""), "1");
    }

    #[test]
    fn test_parse_fragment_without_value_delimiter_is_dropped() {
        let request = Request::parse("x?novalue&a=1");
        assert!(!request.has_param("novalue"));
        let params: Vec<_> = request.params().collect();
        assert_eq!(params, vec![("a", "1")]);
    }

    #[test]
    fn test_parse_ignores_empty_fragments() {
        let request = Request::parse("x?&&a=1&&b=2&");
        let params: Vec<_> = request.params().collect();
        assert_eq!(params, vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_parse_last_duplicate_wins() {
        let request = Request::parse("x?id=1&id=2");
        assert_eq!(request.param("id", ""), "2");
        assert_eq!(request.params().count(), 1);
    }

    #[test]
    fn test_parse_splits_on_first_delimiters_only() {
        let request = Request::parse("search?q=a=b?c");
        assert_eq!(request.action(), "search");
        assert_eq!(request.param("q", ""), "a=b?c");
    }

    #[test]
    fn test_parse_delimiter_without_parameters() {
        let request = Request::parse("list?");
        assert_eq!(request.action(), "list");
        assert_eq!(request.params().count(), 0);
    }

    #[test]
    fn test_param_default_when_absent() {
        let request = Request::parse("list");
        assert_eq!(request.param("id", "fallback"), "fallback");
    }

    #[test]
    fn test_param_as_int_falls_back_to_default() {
        let request = Request::parse("delete?a=abc&b=&c=99999999999999999999&d=-4&e=+5");
        assert_eq!(request.param_as_int("a", 0), 0);
        assert_eq!(request.param_as_int("b", -1), -1);
        assert_eq!(request.param_as_int("c", 42), 42);
        assert_eq!(request.param_as_int("missing", 7), 7);
        assert_eq!(request.param_as_int("d", 0), -4);
        assert_eq!(request.param_as_int("e", 0), 5);
    }

    #[test]
    fn test_param_as_int_rejects_values_beyond_32_bits() {
        let request = Request::parse("delete?big=3000000000&max=2147483647&min=-2147483648");
        assert_eq!(request.param_as_int("big", 0), 0);
        assert_eq!(request.param_as_int("max", 0), i32::MAX);
        assert_eq!(request.param_as_int("min", 0), i32::MIN);
    }

    #[test]
    fn test_param_parsed_distinguishes_absent_and_invalid() {
        let request = Request::parse("delete?id=abc&zero=0");
        assert_eq!(request.param_parsed::<i32>("missing"), Param::Absent);
        assert_eq!(
            request.param_parsed::<i32>("id"),
            Param::Invalid("abc".to_string())
        );
        assert_eq!(request.param_parsed::<i32>("zero"), Param::Valid(0));
    }

    #[test]
    fn test_from_str_matches_parse() {
        let request: Request = "delete?id=1".into();
        assert_eq!(request, Request::parse("delete?id=1"));
    }
}
