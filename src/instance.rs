//! Point set loading.
//!
//! The accepted text format has one record per line, `id x y`, separated
//! by whitespace. The first line may instead hold the record count alone,
//! in which case the number of records must match it. Blank lines are
//! ignored. Record ids are not interpreted: nodes are numbered `0..n` in
//! file order.
//!
//! ```text
//! 4
//! 1 0.0 0.0
//! 2 1.0 0.0
//! 3 1.0 1.0
//! 4 0.0 1.0
//! ```

use crate::error::{AcoError, Result};
use crate::geometry::Point;
use std::path::Path;

/// Parses a point set from text.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    let mut declared: Option<(usize, usize)> = None;
    let mut seen_content = false;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let fields: Vec<&str> = raw.split_whitespace().collect();
        match fields.as_slice() {
            [] => continue,
            [count] if !seen_content => {
                let count = count.parse::<usize>().map_err(|e| AcoError::Parse {
                    line,
                    message: format!("invalid point count `{count}`: {e}"),
                })?;
                declared = Some((count, line));
            }
            [_id, x, y] => {
                points.push(Point::new(parse_coord(x, line)?, parse_coord(y, line)?));
            }
            other => {
                return Err(AcoError::Parse {
                    line,
                    message: format!("expected `id x y`, found {} fields", other.len()),
                });
            }
        }
        seen_content = true;
    }

    if let Some((count, line)) = declared {
        if count != points.len() {
            return Err(AcoError::Parse {
                line,
                message: format!("header declares {count} points, found {}", points.len()),
            });
        }
    }
    Ok(points)
}

/// Reads and parses a point file.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let text = std::fs::read_to_string(path)?;
    parse_points(&text)
}

fn parse_coord(field: &str, line: usize) -> Result<f64> {
    let value = field.parse::<f64>().map_err(|e| AcoError::Parse {
        line,
        message: format!("invalid coordinate `{field}`: {e}"),
    })?;
    if !value.is_finite() {
        return Err(AcoError::Parse {
            line,
            message: format!("coordinate `{field}` is not finite"),
        });
    }
    Ok(value)
}
