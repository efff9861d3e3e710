//! Building property maps from argument lists.

use super::value::{Value, ValueMap};
use crate::error::{Error, Result};

/// Convert an alternating key/value argument list into a [`ValueMap`].
///
/// - An empty slice gives an empty map.
/// - A single [`Value::Map`] argument gives a copy of that map.
/// - Otherwise the arguments are read as `key, value, key, value, ...`.
///   Insertion order is kept and the last value wins for a repeated key.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for an odd number of arguments or a
/// key that is not a [`Value::String`].
///
/// # Example
///
/// ```rust
/// use resource_matchers::resource::{to_map, Value};
///
/// let args = [Value::from("k"), Value::from(1), Value::from("k"), Value::from(2)];
/// let map = to_map(&args).unwrap();
/// assert_eq!(map.get("k"), Some(&Value::Long(2)));
///
/// assert!(to_map(&args[..3]).is_err());
/// assert!(to_map(&[]).unwrap().is_empty());
/// ```
pub fn to_map(args: &[Value]) -> Result<ValueMap> {
    match args {
        [] => return Ok(ValueMap::new()),
        [Value::Map(map)] => return Ok(map.clone()),
        _ => {}
    }

    if args.len() % 2 != 0 {
        tracing::debug!(len = args.len(), "rejecting odd number of map arguments");
        return Err(Error::invalid_argument(format!(
            "expected an even number of key/value arguments, got {}",
            args.len()
        )));
    }

    let mut map = ValueMap::new();
    for (index, pair) in args.chunks_exact(2).enumerate() {
        let Some(key) = pair[0].as_str() else {
            tracing::debug!(position = index * 2, key = %pair[0], "rejecting non-string map key");
            return Err(Error::invalid_argument(format!(
                "key at position {} must be a string, got {}",
                index * 2,
                pair[0]
            )));
        };
        map.insert(key, pair[1].clone());
    }
    Ok(map)
}

/// Build a [`ValueMap`] literal.
///
/// ```rust
/// use resource_matchers::value_map;
/// use resource_matchers::resource::Value;
///
/// let map = value_map! {
///     "jcr:title" => "Node title",
///     "count" => 3,
/// };
/// assert_eq!(map.get("count"), Some(&Value::Long(3)));
/// assert!(value_map! {}.is_empty());
/// ```
#[macro_export]
macro_rules! value_map {
    () => {
        $crate::resource::ValueMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::resource::ValueMap::new();
        $(
            map.insert($key, $value);
        )+
        map
    }};
}
