//! Loading and generating sample data.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{MlError, Result};
use crate::{Array2, Point, Vector};

/// Reads a two-column `x,y` CSV with a header row.
///
/// Rows that do not have exactly two cells are skipped.
pub fn load_xy_csv<P: AsRef<Path>>(path: P) -> Result<(Vector, Vector)> {
    let file = File::open(path.as_ref())?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(BufReader::new(file));

    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for (line, result) in rdr.records().enumerate() {
        let record = result?;
        if record.len() != 2 {
            log::warn!(
                "skipping row {} of {:?}: expected 2 cells, found {}",
                line + 2,
                path.as_ref(),
                record.len()
            );
            continue;
        }
        xs.push(parse_cell(&record[0], line + 2)?);
        ys.push(parse_cell(&record[1], line + 2)?);
    }

    log::debug!("loaded {} samples from {:?}", xs.len(), path.as_ref());
    Ok((Vector::from(xs), Vector::from(ys)))
}

fn parse_cell(cell: &str, line: usize) -> Result<f64> {
    cell.parse::<f64>()
        .map_err(|e| MlError::Parse(format!("row {}: {:?} is not a number ({})", line, cell, e)))
}

/// Samples `samples_per_center` points uniformly within `spread` of each
/// center, reproducibly for a given `seed`.
pub fn make_blobs(
    centers: &[Point],
    samples_per_center: usize,
    spread: f64,
    seed: u64,
) -> Result<Vec<Point>> {
    let dim = centers
        .first()
        .map(|c| c.len())
        .ok_or_else(|| MlError::EmptyInput("no centers given".to_string()))?;
    if centers.iter().any(|c| c.len() != dim) {
        return Err(MlError::DimensionMismatch(
            "all centers must have the same dimension".to_string(),
        ));
    }
    if !spread.is_finite() || spread <= 0.0 {
        return Err(MlError::InvalidParameter(format!(
            "spread must be a positive finite number, got {}",
            spread
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let distribution = Uniform::new_inclusive(-spread, spread);
    let mut points = Vec::with_capacity(centers.len() * samples_per_center);

    for center in centers {
        let noise = Array2::random_using((samples_per_center, dim), &distribution, &mut rng);
        for row in noise.rows() {
            points.push(&row + center);
        }
    }
    Ok(points)
}
