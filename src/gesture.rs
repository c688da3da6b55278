//! Screen geometry: turning board paths into on-screen pointer gestures.
//!
//! The board is addressed `(row, col)` everywhere else in the crate. This module is the one
//! place where that flips to screen `(x, y)`: `x` follows the column and `y` follows the
//! row.
//!
//! Calibration comes from outside (a selected screen rectangle or explicit numbers);
//! `Point` and `Region` parse the command-line forms `x,y` and `x1,y1,x2,y2`.

use std::str::FromStr;

use nom::{
    character::complete::{char, multispace0},
    combinator::all_consuming,
    number::complete::double,
    sequence::{delimited, separated_pair},
    IResult, Parser,
};

use crate::errors::CalibrationError;
use crate::grid::Cell;

/// A screen position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

fn comma(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0).parse(input)
}

fn point(input: &str) -> IResult<&str, Point> {
    separated_pair(double, comma, double)
        .map(|(x, y)| Point::new(x, y))
        .parse(input)
}

fn whole<'a, O>(
    input: &'a str,
    parser: fn(&'a str) -> IResult<&'a str, O>,
    what: &'static str,
) -> Result<O, CalibrationError> {
    all_consuming(delimited(multispace0, parser, multispace0))
        .parse(input)
        .map(|(_, value)| value)
        .map_err(|_| CalibrationError::Unparsable { what, input: input.to_string() })
}

impl FromStr for Point {
    type Err = CalibrationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        whole(input, point, "point")
    }
}

/// The selected board rectangle, corner to corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top_left: Point,
    pub bottom_right: Point,
}

fn region(input: &str) -> IResult<&str, Region> {
    separated_pair(point, comma, point)
        .map(|(top_left, bottom_right)| Region { top_left, bottom_right })
        .parse(input)
}

impl FromStr for Region {
    type Err = CalibrationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        whole(input, region, "region")
    }
}

/// Origin (top-left corner of the board) plus the size of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    origin: Point,
    cell_size: Point,
}

impl Geometry {
    /// # Errors
    ///
    /// [`CalibrationError::DegenerateCell`] unless both cell dimensions are positive and finite.
    pub fn new(origin: Point, cell_size: Point) -> Result<Self, CalibrationError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(cell_size.x) || !valid(cell_size.y) {
            return Err(CalibrationError::DegenerateCell { width: cell_size.x, height: cell_size.y });
        }
        Ok(Self { origin, cell_size })
    }

    /// Split `region` evenly into `rows × cols` cells.
    ///
    /// # Errors
    ///
    /// [`CalibrationError::DegenerateCell`] if the region is empty or inverted, or the grid
    /// has no rows or columns.
    pub fn from_region(region: Region, rows: usize, cols: usize) -> Result<Self, CalibrationError> {
        let width = region.bottom_right.x - region.top_left.x;
        let height = region.bottom_right.y - region.top_left.y;
        #[allow(clippy::cast_precision_loss)]
        let cell_size = Point::new(width / cols as f64, height / rows as f64);
        Self::new(region.top_left, cell_size)
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[must_use]
    pub fn cell_size(&self) -> Point {
        self.cell_size
    }

    /// Screen position of the middle of `cell`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cell_center(&self, cell: Cell) -> Point {
        Point::new(
            self.origin.x + self.cell_size.x * (cell.col as f64 + 0.5),
            self.origin.y + self.cell_size.y * (cell.row as f64 + 0.5),
        )
    }

    /// Map every cell of `path` to its screen center, keeping path order.
    #[must_use]
    pub fn gesture(&self, path: &[Cell]) -> Gesture {
        Gesture { points: path.iter().map(|&cell| self.cell_center(cell)).collect() }
    }
}

/// Ordered screen points of one traced word.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    points: Vec<Point>,
}

impl Gesture {
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
