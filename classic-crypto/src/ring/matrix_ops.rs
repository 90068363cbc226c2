use crate::errors::ClassicCryptoError;
use crate::ring::{Matrix, Ring, Vector, extended_gcd};

/// A·x where A is an m×n matrix and x is a length–n vector.
/// Returns an m‐vector with canonical entries.
pub fn matrix_vector_mul(a: &Matrix, x: &Vector, ring: &Ring) -> Result<Vector, ClassicCryptoError> {
    let m = a.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    let n = a[0].len();
    if x.len() != n {
        return Err(ClassicCryptoError::DimensionMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            n,
            x.len()
        )));
    }

    let mut y = vec![0i64; m];
    for (i, row) in a.iter().enumerate() {
        if row.len() != n {
            return Err(ClassicCryptoError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
        y[i] = row
            .iter()
            .zip(x)
            .fold(0i64, |sum, (&aij, &xj)| ring.add(sum, ring.mul(aij, xj)));
    }
    Ok(y)
}

/// Computes the matrix product `C = AB` modulo the ring's modulus.
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionMismatch` if the inner dimensions of the matrices do not match
/// or if rows within the matrices have inconsistent lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, ClassicCryptoError> {
    let n = a.len();
    if n == 0 {
        return Ok(Matrix::new());
    }
    let m_common = a[0].len();
    if b.len() != m_common {
        return Err(ClassicCryptoError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.len()
        )));
    }
    let p = b.first().map_or(0, Vec::len);
    if let Some(k) = b.iter().position(|row| row.len() != p) {
        return Err(ClassicCryptoError::DimensionMismatch(format!(
            "Matrix B row {} has incorrect length (expected {})",
            k, p
        )));
    }

    let mut c = vec![vec![0; p]; n];
    for i in 0..n {
        if a[i].len() != m_common {
            return Err(ClassicCryptoError::DimensionMismatch(format!(
                "Matrix A row {} has incorrect length (expected {})",
                i, m_common
            )));
        }
        for j in 0..p {
            let mut sum = 0i64;
            #[allow(clippy::needless_range_loop)]
            for k in 0..m_common {
                sum = ring.add(sum, ring.mul(a[i][k], b[k][j]));
            }
            c[i][j] = sum;
        }
    }
    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

/// Checks that `matrix` is a non-empty square matrix and returns its dimension.
pub fn square_dimension(matrix: &Matrix) -> Result<usize, ClassicCryptoError> {
    let n = matrix.len();
    if n == 0 {
        return Err(ClassicCryptoError::DimensionMismatch(
            "matrix must have at least one row".into(),
        ));
    }
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(ClassicCryptoError::DimensionMismatch(format!(
                "Row {} has length {} but a {}×{} matrix was expected",
                i,
                row.len(),
                n,
                n
            )));
        }
    }
    Ok(n)
}

/// Clears column `col` below the diagonal using determinant-one row operations.
///
/// Every lower row R is combined with the pivot row P as
/// `P ← s·P + t·R`, `R ← (p/g)·R − (r/g)·P` where `s·p + t·r = g = gcd(p, r)`.
/// Works over any Z/NZ, so a column does not need to contain a unit.
/// Entries of both rows left of `col` must already be zero.
fn clear_below(work: &mut Matrix, col: usize, ring: &Ring) {
    let width = work[col].len();
    for row in (col + 1)..work.len() {
        let r = work[row][col];
        if r == 0 {
            continue;
        }
        let p = work[col][col];
        let (g, s, t) = extended_gcd(p, r);
        let (p_g, r_g) = (p / g, r / g);

        for j in col..width {
            let top = work[col][j];
            let bottom = work[row][j];
            work[col][j] = ring.add(ring.mul(s, top), ring.mul(t, bottom));
            work[row][j] = ring.sub(ring.mul(p_g, bottom), ring.mul(r_g, top));
        }
    }
}

/// Computes `det(matrix) mod N`, returning a value in `[0, N)`.
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionMismatch` if the matrix is empty or not square.
pub fn determinant(matrix: &Matrix, ring: &Ring) -> Result<i64, ClassicCryptoError> {
    let n = square_dimension(matrix)?;
    let mut work = ring.normalize_matrix(matrix);

    let mut det = 1;
    for col in 0..n {
        clear_below(&mut work, col, ring);
        det = ring.mul(det, work[col][col]);
    }
    Ok(det)
}

/// Computes the inverse of a square matrix over Z/NZ.
///
/// Gauss–Jordan elimination on `[A | I]`, with the lower part of each column
/// cleared by [`clear_below`]. Once a column is cleared its pivot is a unit
/// exactly when `det(A)` is, so a non-unit pivot means `A` is singular mod N.
/// Every entry of the result is in `[0, N)`.
///
/// # Errors
///
/// Returns `ClassicCryptoError::NotInvertible` if `gcd(det(A), N) != 1`.
/// Returns `ClassicCryptoError::DimensionMismatch` if the matrix is empty or not square.
pub fn matrix_inverse(matrix: &Matrix, ring: &Ring) -> Result<Matrix, ClassicCryptoError> {
    let n = square_dimension(matrix)?;

    let mut work: Matrix = ring
        .normalize_matrix(matrix)
        .into_iter()
        .zip(identity_matrix(n))
        .map(|(mut row, unit)| {
            row.extend(unit);
            row
        })
        .collect();

    for col in 0..n {
        clear_below(&mut work, col, ring);

        let pivot = work[col][col];
        if !ring.is_unit(pivot) {
            return Err(ClassicCryptoError::NotInvertible {
                matrix: matrix.clone(),
                determinant: determinant(matrix, ring)?,
                modulus: ring.modulus(),
            });
        }
        let pivot_inv = ring.inv(pivot)?;
        for v in work[col].iter_mut() {
            *v = ring.mul(*v, pivot_inv);
        }

        for row in 0..n {
            let factor = work[row][col];
            if row == col || factor == 0 {
                continue;
            }
            for j in col..2 * n {
                let delta = ring.mul(factor, work[col][j]);
                work[row][j] = ring.sub(work[row][j], delta);
            }
        }
    }

    Ok(work.into_iter().map(|row| row[n..].to_vec()).collect())
}
