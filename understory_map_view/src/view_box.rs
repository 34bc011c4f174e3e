// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading content dimensions out of a map description.

use core::fmt;

use crate::space::{CoordinateSpace, SpaceError};

const ATTRIBUTE: &str = "viewBox=";

/// Error returned by [`parse_view_box`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ViewBoxError {
    /// No quoted `viewBox` attribute was found.
    Missing,
    /// The attribute did not hold exactly four values.
    WrongValueCount(usize),
    /// The value at this position was not a number, or the minimum corner was
    /// not finite.
    InvalidNumber(usize),
    /// The width or height cannot be used as a content space.
    InvalidSize(SpaceError),
}

impl fmt::Display for ViewBoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("no viewBox attribute found"),
            Self::WrongValueCount(n) => write!(f, "viewBox holds {n} values, expected 4"),
            Self::InvalidNumber(i) => write!(f, "viewBox value {i} is not a number"),
            Self::InvalidSize(err) => write!(f, "viewBox size is unusable: {err}"),
        }
    }
}

impl core::error::Error for ViewBoxError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidSize(err) => Some(err),
            _ => None,
        }
    }
}

/// Extracts the content space from the `viewBox="min-x min-y width height"`
/// attribute of an SVG document.
///
/// Only the width and height are used; the minimum corner must be finite but
/// is otherwise ignored. Values may be separated by whitespace, commas, or
/// both. The attribute name must stand on its own, so `data-viewBox` does not
/// match.
///
/// ```rust
/// use understory_map_view::parse_view_box;
///
/// let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 2400 1800">"#;
/// let space = parse_view_box(svg).unwrap();
/// assert_eq!((space.size_x(), space.size_y()), (2400.0, 1800.0));
/// ```
pub fn parse_view_box(svg: &str) -> Result<CoordinateSpace, ViewBoxError> {
    let value = attribute_value(svg).ok_or(ViewBoxError::Missing)?;

    let mut values = [0.0_f64; 4];
    let mut count = 0;
    for (i, token) in value
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .enumerate()
    {
        if let Some(slot) = values.get_mut(i) {
            let value = token
                .parse::<f64>()
                .map_err(|_| ViewBoxError::InvalidNumber(i))?;
            // Width and height get their own check as a content space.
            if i < 2 && !value.is_finite() {
                return Err(ViewBoxError::InvalidNumber(i));
            }
            *slot = value;
        }
        count += 1;
    }
    if count != 4 {
        return Err(ViewBoxError::WrongValueCount(count));
    }

    CoordinateSpace::new(values[2], values[3]).map_err(ViewBoxError::InvalidSize)
}

fn attribute_value(svg: &str) -> Option<&str> {
    let (at, _) = svg.match_indices(ATTRIBUTE).find(|(at, _)| {
        svg[..*at]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_whitespace())
    })?;
    let rest = &svg[at + ATTRIBUTE.len()..];
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let rest = &rest[quote.len_utf8()..];
    let end = rest.find(quote)?;
    Some(&rest[..end])
}
