//! SVG path data parser
//!
//! Reads the subset of the `d` attribute syntax that stroke-to-outline tools
//! emit for glyph outlines: `M m L l H h V v C c Z z`, with tokens separated
//! by whitespace and coordinate pairs written as `x,y`. Anything else,
//! elliptical arcs included, is rejected.
//!
//! SVG's y axis points down and the glyph model's points up. Absolute
//! coordinates are flipped against the canvas height once, as they are read;
//! relative offsets only have their y negated and are added to the cursor,
//! which always lives in model space.

use crate::data::ConversionError;
use crate::font_source::validate::validate_contour;
use crate::font_source::{Contour, UfoPoint, UfoPointType};
use kurbo::{Point, Vec2};

/// Parse path data into validated contours.
///
/// `height` is the height of the SVG canvas. Every `z`/`Z` closes a contour
/// and turns its first point into a `line` point. A trailing subpath without
/// `z` is kept as an open contour, as is one interrupted by a new `m`/`M`.
pub fn parse_path(d: &str, height: f64) -> Result<Vec<Contour>, ConversionError> {
    let tokens: Vec<&str> = d.split_whitespace().collect();
    let mut parser = PathParser::new(height);

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        let command = command_char(token)
            .ok_or_else(|| ConversionError::UnsupportedCommand(token.to_string()))?;
        let operand_count = tokens[i + 1..]
            .iter()
            .take_while(|t| command_char(t).is_none())
            .count();
        let operands = Operands {
            command,
            tokens: &tokens[i + 1..i + 1 + operand_count],
            first_index: i + 1,
        };
        parser.dispatch(command, token, i, operands)?;
        i += 1 + operand_count;
    }

    let contours = parser.finish();
    for (index, contour) in contours.iter().enumerate() {
        validate_contour(index, contour.points())?;
    }
    Ok(contours)
}

/// A token consisting of a single ASCII letter
fn command_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}

struct Operands<'a> {
    command: char,
    tokens: &'a [&'a str],
    first_index: usize,
}

impl Operands<'_> {
    fn malformed(&self, offset: usize) -> ConversionError {
        ConversionError::MalformedOperand {
            command: self.command,
            token: self.tokens[offset].to_string(),
            index: self.first_index + offset,
        }
    }

    fn require_some(&self) -> Result<(), ConversionError> {
        if self.tokens.is_empty() {
            return Err(ConversionError::MissingOperands {
                command: self.command,
                index: self.first_index - 1,
            });
        }
        Ok(())
    }

    /// `x,y` pairs, exactly as written (no flip)
    fn pairs(&self) -> Result<Vec<Vec2>, ConversionError> {
        self.require_some()?;
        self.tokens
            .iter()
            .enumerate()
            .map(|(n, token)| {
                let (x, y) = token.split_once(',').ok_or_else(|| self.malformed(n))?;
                match (parse_coordinate(x), parse_coordinate(y)) {
                    (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
                    _ => Err(self.malformed(n)),
                }
            })
            .collect()
    }

    /// Single numbers, for `h` and `v`
    fn numbers(&self) -> Result<Vec<f64>, ConversionError> {
        self.require_some()?;
        self.tokens
            .iter()
            .enumerate()
            .map(|(n, token)| parse_coordinate(token).ok_or_else(|| self.malformed(n)))
            .collect()
    }
}

fn parse_coordinate(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

struct PathParser {
    height: f64,
    cursor: Point,
    contour: Vec<UfoPoint>,
    contours: Vec<Contour>,
}

impl PathParser {
    fn new(height: f64) -> Self {
        Self {
            height,
            // SVG origin, in model space
            cursor: Point::new(0.0, height),
            contour: Vec::new(),
            contours: Vec::new(),
        }
    }

    /// Model-space position of an operand pair.
    fn resolve(&self, relative: bool, pair: Vec2) -> Point {
        if relative {
            self.cursor + Vec2::new(pair.x, -pair.y)
        } else {
            Point::new(pair.x, self.height - pair.y)
        }
    }

    fn push(&mut self, at: Point, point_type: UfoPointType) {
        self.contour.push(UfoPoint::new(at.x, at.y, point_type));
    }

    fn dispatch(
        &mut self,
        command: char,
        token: &str,
        index: usize,
        operands: Operands<'_>,
    ) -> Result<(), ConversionError> {
        let relative = command.is_ascii_lowercase();
        match command.to_ascii_uppercase() {
            'M' => {
                let pairs = operands.pairs()?;
                if !self.contour.is_empty() {
                    let open = std::mem::take(&mut self.contour);
                    self.contours.push(Contour::new(open));
                }
                for (n, pair) in pairs.into_iter().enumerate() {
                    self.cursor = self.resolve(relative, pair);
                    let point_type = if n == 0 {
                        UfoPointType::Move
                    } else {
                        UfoPointType::Line
                    };
                    self.push(self.cursor, point_type);
                }
            }
            'L' => {
                for pair in operands.pairs()? {
                    self.cursor = self.resolve(relative, pair);
                    self.push(self.cursor, UfoPointType::Line);
                }
            }
            'H' => {
                for x in operands.numbers()? {
                    self.cursor.x = if relative { self.cursor.x + x } else { x };
                    self.push(self.cursor, UfoPointType::Line);
                }
            }
            'V' => {
                for y in operands.numbers()? {
                    self.cursor.y = if relative {
                        self.cursor.y - y
                    } else {
                        self.height - y
                    };
                    self.push(self.cursor, UfoPointType::Line);
                }
            }
            'C' => {
                let pairs = operands.pairs()?;
                if pairs.len() % 3 != 0 {
                    return Err(ConversionError::CurveArity {
                        command,
                        pairs: pairs.len(),
                    });
                }
                for triple in pairs.chunks_exact(3) {
                    // All three pairs of a relative segment share one origin.
                    let c1 = self.resolve(relative, triple[0]);
                    let c2 = self.resolve(relative, triple[1]);
                    let end = self.resolve(relative, triple[2]);
                    self.push(c1, UfoPointType::OffCurve);
                    self.push(c2, UfoPointType::OffCurve);
                    self.push(end, UfoPointType::Curve);
                    self.cursor = end;
                }
            }
            'Z' => {
                if !operands.tokens.is_empty() {
                    return Err(operands.malformed(0));
                }
                let mut closed = std::mem::take(&mut self.contour);
                let Some(first) = closed.first_mut() else {
                    return Err(ConversionError::CloseWithoutContour { command, index });
                };
                first.point_type = UfoPointType::Line;
                self.cursor = first.position();
                self.contours.push(Contour::new(closed));
            }
            _ => return Err(ConversionError::UnsupportedCommand(token.to_string())),
        }
        Ok(())
    }

    fn finish(mut self) -> Vec<Contour> {
        if !self.contour.is_empty() {
            self.contours.push(Contour::new(self.contour));
        }
        self.contours
    }
}
