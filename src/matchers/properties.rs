//! Matching a subset of a resource's properties.

use crate::assertions::matcher::Matcher;
use crate::resource::{Resource, Value, ValueMap};

/// Matcher requiring every expected property to be present with an equal
/// value. Properties not named in the expected map are ignored.
///
/// Created by [`props`](super::props) and
/// [`props_from_args`](super::props_from_args).
#[derive(Debug, Clone)]
pub struct PropertiesMatcher {
    expected: ValueMap,
}

impl PropertiesMatcher {
    pub(crate) fn new(expected: ValueMap) -> Self {
        Self { expected }
    }

    fn first_mismatch<'a>(&'a self, actual: &'a ValueMap) -> Option<(&'a str, Option<&'a Value>)> {
        self.expected.iter().find_map(|(key, expected)| {
            let given = actual.get(key);
            (given != Some(expected)).then_some((key, given))
        })
    }
}

impl<R: Resource + ?Sized> Matcher<R> for PropertiesMatcher {
    fn matches(&self, resource: &R) -> bool {
        match self.first_mismatch(resource.properties()) {
            None => true,
            Some((key, given)) => {
                tracing::trace!(
                    path = resource.path(),
                    key,
                    given = ?given,
                    "property mismatch"
                );
                false
            }
        }
    }

    fn describe(&self) -> String {
        format!("Resource with props {}", self.expected)
    }

    fn describe_mismatch(&self, resource: &R) -> String {
        let actual = resource.properties();
        let checked: Vec<String> = self
            .expected
            .keys()
            .map(|key| match actual.get(key) {
                Some(value) => format!("{key}={value}"),
                None => format!("{key}=<absent>"),
            })
            .collect();
        format!("was Resource with props {{{}}}", checked.join(", "))
    }
}
