//! Conversions that fall back to a default instead of failing

use std::fmt::Debug;
use std::str::FromStr;

use tracing::debug;

/// Parses `input` as `T`, or returns `None`.
///
/// Surrounding whitespace is ignored.
pub fn try_convert<T: FromStr>(input: &str) -> Option<T> {
    input.trim().parse().ok()
}

/// Parses `input` as `T`, falling back to `T::default()`.
///
/// # Example
/// ```
/// use codehelpers::convert::convert;
/// assert_eq!(convert::<i32>(" 42 "), 42);
/// assert_eq!(convert::<i32>("forty-two"), 0);
/// assert_eq!(convert::<bool>("true"), true);
/// ```
pub fn convert<T>(input: &str) -> T
where
    T: FromStr + Default,
    T::Err: Debug,
{
    match input.trim().parse() {
        Ok(value) => value,
        Err(err) => {
            debug!(input, error = ?err, "conversion failed, using default");
            T::default()
        }
    }
}

/// Converts a value with `TryFrom`, falling back to `O::default()`.
pub fn convert_value<I, O>(input: I) -> O
where
    O: TryFrom<I> + Default,
{
    O::try_from(input).unwrap_or_default()
}

/// Element-wise [`convert_value`]; the output always has the input's length.
///
/// # Example
/// ```
/// use codehelpers::convert::convert_list;
/// let narrowed: Vec<u8> = convert_list(vec![1i32, 300, -5, 255]);
/// assert_eq!(narrowed, vec![1, 0, 0, 255]);
/// ```
pub fn convert_list<I, O>(input: Vec<I>) -> Vec<O>
where
    O: TryFrom<I> + Default,
{
    input.into_iter().map(convert_value).collect()
}

/// Method form of [`convert`] and [`try_convert`] on string slices.
pub trait ConvertExt {
    fn convert<T>(&self) -> T
    where
        T: FromStr + Default,
        T::Err: Debug;

    fn try_convert<T: FromStr>(&self) -> Option<T>;
}

impl ConvertExt for str {
    fn convert<T>(&self) -> T
    where
        T: FromStr + Default,
        T::Err: Debug,
    {
        convert(self)
    }

    fn try_convert<T: FromStr>(&self) -> Option<T> {
        try_convert(self)
    }
}
