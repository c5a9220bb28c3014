use nom::{
    bytes::complete::tag_no_case,
    character::complete::{i32 as i32_parser, space0, space1, u32 as u32_parser},
    combinator::all_consuming,
    multi::separated_list0,
    number::complete::double,
    sequence::{delimited, preceded, terminated},
    IResult, Parser,
};

use super::{ElevationGrid, GridHeader};


/// Reading a grid file failed on a specific line.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Line {line_number}: {description}")]
pub struct FileFormatError {
    /// 1-based physical line number.
    pub line_number: usize,
    pub description: String,
}

impl FileFormatError {
    fn new(line_number: usize, description: impl Into<String>) -> Self {
        FileFormatError {
            line_number,
            description: description.into(),
        }
    }
}

/// `<name><ws><value>` with optional leading and trailing whitespace, nothing else.
fn header_field<'a, O, P>(
    name: &'static str,
    value: P,
) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    P: Parser<&'a str, O, nom::error::Error<&'a str>>,
{
    all_consuming(delimited(
        space0,
        preceded(terminated(tag_no_case(name), space1), value),
        space0,
    ))
}

fn data_line(input: &str) -> IResult<&str, Vec<i32>> {
    all_consuming(delimited(
        space0,
        separated_list0(space1, i32_parser),
        space0,
    ))(input)
}

struct LineReader<'a> {
    lines: std::str::Lines<'a>,
    line_number: usize,
}

impl<'a> LineReader<'a> {
    fn next_line(&mut self) -> (usize, Option<&'a str>) {
        self.line_number += 1;
        (self.line_number, self.lines.next())
    }

    fn header<O, P>(&mut self, name: &'static str, value: P, what: &str, kind: &str) -> Result<O, FileFormatError>
    where
        P: Parser<&'a str, O, nom::error::Error<&'a str>>,
    {
        let (line_number, line) = self.next_line();
        let fail = || {
            FileFormatError::new(
                line_number,
                format!("{} parsing failed, expected `{} <{}>`", what, name, kind),
            )
        };

        let line = line.ok_or_else(fail)?;
        header_field(name, value)(line)
            .map(|(_, value)| value)
            .map_err(|_| fail())
    }

    fn count(&mut self, name: &'static str, what: &str) -> Result<usize, FileFormatError> {
        let count = self.header(name, u32_parser, what, "integer")? as usize;
        if count < 2 {
            return Err(FileFormatError::new(
                self.line_number,
                format!("{} must be at least 2, got {}", what, count),
            ));
        }
        Ok(count)
    }

    fn coordinate(&mut self, name: &'static str, what: &str) -> Result<f64, FileFormatError> {
        let value = self.header(name, double, what, "float")?;
        if !value.is_finite() {
            return Err(FileFormatError::new(
                self.line_number,
                format!("{} must be a finite number, got {}", what, value),
            ));
        }
        Ok(value)
    }
}

/// Parses a grid file held in memory.
///
/// The layout is fixed: `ncols`, `nrows`, `xllcorner`, `yllcorner` and
/// `cellsize` on the first five lines, then `nrows` lines of `ncols`
/// integers, northernmost row first.
pub fn parse(content: &str) -> Result<ElevationGrid, FileFormatError> {
    parse_from(content, "")
}

pub(super) fn parse_from(content: &str, source_path: &str) -> Result<ElevationGrid, FileFormatError> {
    let mut reader = LineReader {
        lines: content.lines(),
        line_number: 0,
    };

    let column_count = reader.count("ncols", "Column count")?;
    let row_count = reader.count("nrows", "Row count")?;
    let x_ll_corner = reader.coordinate("xllcorner", "Lower left corner's X coordinate")?;
    let y_ll_corner = reader.coordinate("yllcorner", "Lower left corner's Y coordinate")?;
    let cell_size = reader.coordinate("cellsize", "Cell size")?;
    if cell_size <= 0.0 {
        return Err(FileFormatError::new(
            reader.line_number,
            format!("Cell size must be greater than 0, got {}", cell_size),
        ));
    }

    let value_count = column_count.checked_mul(row_count).ok_or_else(|| {
        FileFormatError::new(
            2,
            format!("Grid of {}x{} values is too large", column_count, row_count),
        )
    })?;
    // capped by the input size
    let mut altitude: Vec<i32> = Vec::with_capacity(value_count.min(content.len()));

    for row_index in 0..row_count {
        let (line_number, line) = reader.next_line();
        let line = line.ok_or_else(|| {
            FileFormatError::new(
                line_number,
                format!("Missing altitude row {} of {}", row_index + 1, row_count),
            )
        })?;

        let (_, mut values) = data_line(line).map_err(|_| {
            FileFormatError::new(
                line_number,
                format!(
                    "Altitude row parsing failed, expected {} whitespace separated 32-bit integers",
                    column_count
                ),
            )
        })?;

        if values.len() < column_count {
            return Err(FileFormatError::new(
                line_number,
                format!(
                    "Missing altitude columns, expected {} values but found {}",
                    column_count,
                    values.len()
                ),
            ));
        }

        values.truncate(column_count);
        altitude.append(&mut values);
    }

    let header = GridHeader {
        column_count,
        row_count,
        x_ll_corner,
        y_ll_corner,
        cell_size,
    };

    ElevationGrid::new(source_path, header, altitude)
        .map_err(|e| FileFormatError::new(reader.line_number, e.to_string()))
}

/// Writes a grid in the layout `parse` reads.
pub fn serialize(grid: &ElevationGrid) -> String {
    let mut out = String::with_capacity(grid.altitudes().len() * 6 + 128);

    out.push_str(&format!("ncols        {}\n", grid.column_count()));
    out.push_str(&format!("nrows        {}\n", grid.row_count()));
    out.push_str(&format!("xllcorner    {:.12}\n", grid.x_ll_corner()));
    out.push_str(&format!("yllcorner    {:.12}\n", grid.y_ll_corner()));
    out.push_str(&format!("cellsize     {:.12}\n", grid.cell_size()));

    for row in grid.rows() {
        for value in row {
            out.push(' ');
            out.push_str(&value.to_string());
        }
        out.push('\n');
    }

    out
}
