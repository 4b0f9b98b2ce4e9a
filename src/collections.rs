use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::error::{HelperError, Result};

/// Checks that two maps hold exactly the same key/value pairs.
///
/// Fails with [`HelperError::EmptyCollections`] when both maps are empty;
/// one empty map against a non-empty one simply compares unequal.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use codehelpers::collections::has_same_keys_and_values;
///
/// let a = HashMap::from([("x", 1), ("y", 2)]);
/// let b = HashMap::from([("y", 2), ("x", 1)]);
/// assert!(has_same_keys_and_values(&a, &b).unwrap());
/// ```
pub fn has_same_keys_and_values<K, V, S1, S2>(
    main: &HashMap<K, V, S1>,
    secondary: &HashMap<K, V, S2>,
) -> Result<bool>
where
    K: Eq + Hash,
    V: PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    if main.is_empty() && secondary.is_empty() {
        return Err(HelperError::EmptyCollections);
    }
    if main.len() != secondary.len() {
        return Ok(false);
    }

    Ok(main
        .iter()
        .all(|(key, value)| secondary.get(key) == Some(value)))
}
