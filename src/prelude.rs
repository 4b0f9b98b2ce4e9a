pub use crate::random::Randomize;
pub use crate::size::{SizeExt, SizeUnit};
pub use crate::convert::ConvertExt;
pub use crate::validation::StrExt;
pub use crate::conditional::{IsIn, WhenTrue};
pub use crate::fs::PathType;
pub use crate::error::HelperError;

#[cfg(feature = "datetime")]
pub use crate::datetime::{DateTimeKind, NaiveDateTimeExt, UnixTimeExt};
