//! Minimal well-known-text reader for planar shapes.
//!
//! Supported: `POINT`, `LINESTRING`, `POLYGON` with 2D coordinates, each
//! optionally `EMPTY`. Tags are case-insensitive. Z/M ordinates are rejected.

use nalgebra::Vector2;
use thiserror::Error;

use super::types::{Shape, ShapeKind};

/// Errors raised while reading WKT text.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WktError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unexpected {found:?} at offset {offset}, expected {expected}")]
    Unexpected {
        offset: usize,
        found: char,
        expected: &'static str,
    },

    #[error("unsupported geometry type {0:?}")]
    UnsupportedType(String),

    /// Unparsable or non-finite (`NaN`, `inf`, overflowing) ordinate.
    #[error("invalid number {text:?} at offset {offset}")]
    InvalidNumber { offset: usize, text: String },

    #[error("only 2D coordinates are supported (offset {offset})")]
    TooManyOrdinates { offset: usize },

    #[error("trailing input at offset {offset}")]
    Trailing { offset: usize },
}

/// Parse a WKT string into a `Shape`.
pub fn parse(src: &str) -> Result<Shape, WktError> {
    let mut r = Reader { src, pos: 0 };
    let shape = r.geometry()?;
    r.skip_ws();
    if r.pos < src.len() {
        return Err(WktError::Trailing { offset: r.pos });
    }
    Ok(shape)
}

impl std::str::FromStr for Shape {
    type Err = WktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Shape {
    /// Read a shape from its WKT description.
    #[inline]
    pub fn from_wkt(src: &str) -> Result<Shape, WktError> {
        parse(src)
    }
}

struct Reader<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn word(&mut self) -> &'a str {
        self.skip_ws();
        let rest = self.rest();
        let end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    fn expect(&mut self, want: char, expected: &'static str) -> Result<(), WktError> {
        self.skip_ws();
        match self.peek() {
            Some(c) if c == want => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(found) => Err(WktError::Unexpected {
                offset: self.pos,
                found,
                expected,
            }),
            None => Err(WktError::UnexpectedEnd { expected }),
        }
    }

    /// Consume `,` and return true, or leave `)` in place and return false.
    fn more(&mut self) -> Result<bool, WktError> {
        self.skip_ws();
        match self.peek() {
            Some(',') => {
                self.pos += 1;
                Ok(true)
            }
            Some(')') => Ok(false),
            Some(found) => Err(WktError::Unexpected {
                offset: self.pos,
                found,
                expected: "',' or ')'",
            }),
            None => Err(WktError::UnexpectedEnd {
                expected: "',' or ')'",
            }),
        }
    }

    fn geometry(&mut self) -> Result<Shape, WktError> {
        let tag = self.word();
        let kind = match tag.to_ascii_uppercase().as_str() {
            "POINT" => ShapeKind::Point,
            "LINESTRING" => ShapeKind::LineString,
            "POLYGON" => ShapeKind::Polygon,
            "" => {
                return match self.peek() {
                    Some(found) => Err(WktError::Unexpected {
                        offset: self.pos,
                        found,
                        expected: "geometry type",
                    }),
                    None => Err(WktError::UnexpectedEnd {
                        expected: "geometry type",
                    }),
                }
            }
            other => return Err(WktError::UnsupportedType(other.to_string())),
        };
        let save = self.pos;
        let dim = self.word();
        if dim.eq_ignore_ascii_case("EMPTY") {
            return Ok(Shape::empty(kind));
        }
        if !dim.is_empty() {
            return Err(WktError::TooManyOrdinates { offset: save });
        }
        Ok(match kind {
            ShapeKind::Point => {
                self.expect('(', "'('")?;
                let p = self.coord()?;
                self.expect(')', "')'")?;
                Shape::point(p)
            }
            ShapeKind::LineString => Shape::line_string(self.coord_list()?),
            ShapeKind::Polygon => {
                let mut rings = self.ring_list()?.into_iter();
                let exterior = rings.next().unwrap_or_default();
                Shape::polygon(exterior, rings.collect())
            }
        })
    }

    fn ring_list(&mut self) -> Result<Vec<Vec<Vector2<f64>>>, WktError> {
        self.expect('(', "'('")?;
        let mut rings = vec![self.coord_list()?];
        while self.more()? {
            rings.push(self.coord_list()?);
        }
        self.expect(')', "')'")?;
        Ok(rings)
    }

    fn coord_list(&mut self) -> Result<Vec<Vector2<f64>>, WktError> {
        self.expect('(', "'('")?;
        let mut pts = vec![self.coord()?];
        while self.more()? {
            pts.push(self.coord()?);
        }
        self.expect(')', "')'")?;
        Ok(pts)
    }

    fn coord(&mut self) -> Result<Vector2<f64>, WktError> {
        let x = self.number()?;
        let y = self.number()?;
        self.skip_ws();
        if matches!(self.peek(), Some(c) if c != ',' && c != ')') {
            return Err(WktError::TooManyOrdinates { offset: self.pos });
        }
        Ok(Vector2::new(x, y))
    }

    fn number(&mut self) -> Result<f64, WktError> {
        self.skip_ws();
        let start = self.pos;
        let rest = self.rest();
        let end = rest
            .find(|c: char| c.is_whitespace() || c == ',' || c == '(' || c == ')')
            .unwrap_or(rest.len());
        if end == 0 {
            return match self.peek() {
                Some(found) => Err(WktError::Unexpected {
                    offset: start,
                    found,
                    expected: "number",
                }),
                None => Err(WktError::UnexpectedEnd { expected: "number" }),
            };
        }
        let text = &rest[..end];
        let v = text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| WktError::InvalidNumber {
                offset: start,
                text: text.to_string(),
            })?;
        self.pos += end;
        Ok(v)
    }
}
