use crate::error::{MlError, Result};
use crate::vector;
use crate::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly random sample indices for centroid seeding.
///
/// Every [`rand::Rng`] is a sampler; tests can supply a scripted sequence.
pub trait IndexSampler {
    /// Returns an index in `0..upper`. `upper` is always non-zero.
    fn sample_index(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSampler for R {
    fn sample_index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

#[derive(Clone, Debug)]
pub struct KMeans {
    k: usize,
    max_iterations: usize,
    tolerance: f64,
    random_state: u64,
    centroids: Vec<Point>,
    n_iter: usize,
}

impl KMeans {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: 100,
            tolerance: 1e-3,
            random_state: 42,
            centroids: Vec::new(),
            n_iter: 0,
        }
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Seed used by [`KMeans::fit`].
    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = random_state;
        self
    }

    pub fn centroids(&self) -> &[Point] {
        &self.centroids
    }

    /// Iterations run by the last fit.
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    pub fn fit(&mut self, points: &[Point]) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(self.random_state);
        self.fit_with_sampler(points, &mut rng)
    }

    pub fn fit_with_sampler<S: IndexSampler + ?Sized>(
        &mut self,
        points: &[Point],
        sampler: &mut S,
    ) -> Result<()> {
        if self.k == 0 {
            return Err(MlError::InvalidParameter("k must be > 0".to_string()));
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(MlError::InvalidParameter(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        let dim = Self::validate_points(points)?;

        // Seed with k input points, drawn uniformly with replacement.
        let mut centroids: Vec<Point> = (0..self.k)
            .map(|_| points[sampler.sample_index(points.len())].clone())
            .collect();
        self.n_iter = 0;

        for iteration in 0..self.max_iterations {
            let mut sums = vec![Point::zeros(dim); self.k];
            let mut counts = vec![0usize; self.k];

            for point in points {
                let closest = Self::closest_centroid(&centroids, point)?;
                sums[closest] = vector::add(&sums[closest], point)?;
                counts[closest] += 1;
            }

            let mut new_centroids = Vec::with_capacity(self.k);
            for (cluster, (sum, count)) in sums.iter().zip(counts.iter()).enumerate() {
                if *count > 0 {
                    new_centroids.push(vector::divide(sum, *count as f64)?);
                } else {
                    log::warn!(
                        "cluster {} is empty at iteration {}, reseeding from a random point",
                        cluster,
                        iteration
                    );
                    new_centroids.push(points[sampler.sample_index(points.len())].clone());
                }
            }

            let mut max_shift = 0.0_f64;
            for (old, new) in centroids.iter().zip(new_centroids.iter()) {
                max_shift = max_shift.max(vector::euclidean_distance(old, new)?);
            }

            centroids = new_centroids;
            self.n_iter = iteration + 1;
            log::trace!("iteration {}: max centroid shift {:.6e}", iteration, max_shift);

            if max_shift < self.tolerance {
                log::debug!("k-means converged after {} iterations", self.n_iter);
                break;
            }
        }

        log::debug!(
            "k-means fitted {} centroids on {} points of dimension {} in {} iterations",
            self.k,
            points.len(),
            dim,
            self.n_iter
        );
        self.centroids = centroids;
        Ok(())
    }

    /// Index of the nearest centroid; ties go to the lowest index.
    pub fn predict(&self, point: &Point) -> Result<usize> {
        if self.centroids.is_empty() {
            return Err(MlError::InvalidOperation(
                "KMeans not fitted. Call fit() first.".to_string(),
            ));
        }
        Self::closest_centroid(&self.centroids, point)
    }

    pub fn predict_many(&self, points: &[Point]) -> Result<Vec<usize>> {
        points.iter().map(|p| self.predict(p)).collect()
    }

    /// Sum of squared distances from each point to its nearest centroid.
    pub fn inertia(&self, points: &[Point]) -> Result<f64> {
        let mut inertia = 0.0;
        for point in points {
            let closest = self.predict(point)?;
            let distance = vector::euclidean_distance(point, &self.centroids[closest])?;
            inertia += distance * distance;
        }
        Ok(inertia)
    }

    fn validate_points(points: &[Point]) -> Result<usize> {
        let first = points
            .first()
            .ok_or_else(|| MlError::EmptyInput("no points to cluster".to_string()))?;
        let dim = first.len();
        if dim == 0 {
            return Err(MlError::EmptyInput("points have no coordinates".to_string()));
        }
        if let Some((i, p)) = points.iter().enumerate().find(|(_, p)| p.len() != dim) {
            return Err(MlError::DimensionMismatch(format!(
                "point {} has {} coordinates, expected {}",
                i,
                p.len(),
                dim
            )));
        }
        Ok(dim)
    }

    fn closest_centroid(centroids: &[Point], point: &Point) -> Result<usize> {
        let mut closest = 0;
        let mut min_distance = f64::INFINITY;

        for (i, centroid) in centroids.iter().enumerate() {
            let distance = vector::euclidean_distance(point, centroid)?;
            if distance < min_distance {
                min_distance = distance;
                closest = i;
            }
        }
        Ok(closest)
    }
}
