use derive_builder::Builder;
use num_traits::Zero;
use std::ops::{Add, Mul};

/// Dense matrix with element values stored in row-major order (C-style).
#[derive(Debug, Default, Clone, PartialEq, Builder)]
#[builder(default, build_fn(name = "pre_build", validate = "Self::validate"))]
pub struct Mat<T: Default + Clone> {
    #[builder(setter(custom))]
    rows: usize,
    #[builder(setter(custom))]
    cols: usize,

    values: Vec<T>,
}

impl<T> MatBuilder<T>
where
    T: Default + Clone,
{
    pub fn build(&self) -> Result<Mat<T>, MatBuilderError>
    where
        T: Zero,
    {
        let mut mat = self.pre_build()?;
        if self.values.is_none() {
            mat.values = vec![T::zero(); mat.rows * mat.cols];
        }
        Ok(mat)
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(values) = &self.values {
            let (rows, cols) = (self.rows.unwrap_or(0), self.cols.unwrap_or(0));
            let expect = rows * cols;
            if values.len() != expect {
                return Err(format!(
                    "values length ({}) must be rows * cols ({} * {} = {})",
                    values.len(),
                    rows,
                    cols,
                    expect
                ));
            }
        }
        Ok(())
    }
}

impl<T> Mat<T>
where
    T: Default + Copy,
{
    pub fn new(rows: usize, cols: usize) -> MatBuilder<T> {
        MatBuilder {
            rows: Some(rows),
            cols: Some(cols),
            ..Default::default()
        }
    }

    /// Builds a matrix from a slice of rows. All rows must have the
    /// same length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MatBuilderError>
    where
        T: Zero,
    {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if let Some((i, r)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.as_ref().len() != cols)
        {
            return Err(MatBuilderError::ValidationError(format!(
                "row {} has {} values, expected {}",
                i,
                r.as_ref().len(),
                cols
            )));
        }
        let values = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::new(rows.len(), cols).values(values).build()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn values(&self) -> &Vec<T> {
        &self.values
    }

    #[inline]
    fn ix(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(row < self.rows);
        assert!(col < self.cols);
        self.values[self.ix(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: T) {
        assert!(row < self.rows);
        assert!(col < self.cols);
        let i = self.ix(row, col);
        self.values[i] = v
    }

    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows);
        let i = self.ix(row, 0);
        &self.values[i..i + self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.rows);
        let i = self.ix(row, 0);
        let cols = self.cols;
        &mut self.values[i..i + cols]
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(a < self.rows);
        assert!(b < self.rows);
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.values.split_at_mut(hi * self.cols);
        head[lo * self.cols..(lo + 1) * self.cols].swap_with_slice(&mut tail[..self.cols]);
    }

    pub fn diagonal(&self) -> impl Iterator<Item = T> + '_ {
        assert_eq!(self.rows, self.cols);
        (0..self.rows).map(move |i| self.get(i, i))
    }

    pub fn mat_vec(&self, b: &[T]) -> Vec<T>
    where
        T: Mul<Output = T> + Add<Output = T> + Zero,
    {
        assert_eq!(b.len(), self.cols);

        (0..self.rows).map(|i| dot(self.row(i), b)).collect()
    }
}

/// Computes the dot-product of `a` and `b`.
pub fn dot<T>(a: &[T], b: &[T]) -> T
where
    T: Mul<Output = T> + Add<Output = T> + Zero + Copy,
{
    a.iter()
        .zip(b)
        .map(|(&ai, &bi)| ai * bi)
        .fold(T::zero(), |x, y| x + y)
}
