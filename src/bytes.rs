use std::fmt;

/// Hex rendering of a raw byte message for logs.
#[derive(Debug)]
pub struct Displayable<'a>(&'a [u8]);

impl<'a> From<&'a [u8]> for Displayable<'a> {
    fn from(msg: &'a [u8]) -> Self {
        Self(msg)
    }
}

impl<'a> fmt::Display for Displayable<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();

        match iter.next() {
            Some(first) => write!(f, "(hex): {first:02x}")?,
            None => return Ok(()),
        };

        for val in iter {
            write!(f, ", {val:02x}")?;
        }

        Ok(())
    }
}
