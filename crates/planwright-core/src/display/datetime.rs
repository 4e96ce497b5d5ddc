//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// Placeholder shown for an unset date.
pub const NOT_SET: &str = "Not set";

/// A wrapper around an optional civil date that formats it the way the
/// review screen shows dates (`Mar 5, 2025`), or `Not set`.
pub struct ReviewDate<'a>(pub Option<&'a Date>);

impl<'a> ReviewDate<'a> {
    pub fn new(date: &'a Option<Date>) -> Self {
        Self(date.as_ref())
    }
}

impl fmt::Display for ReviewDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.strftime("%b %-d, %Y")),
            None => f.write_str(NOT_SET),
        }
    }
}
