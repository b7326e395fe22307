use mathbeta::{Matrix, MatrixError};

fn main() -> Result<(), MatrixError> {
    // the counting matrix: third row = 2 * second - first
    let m = Matrix::new(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])?;
    println!("matrix:\n{}", m);
    println!("matrix determinant: {}", m.determinant()?);
    println!("matrix rank: {}", m.rank());
    match m.inverse() {
        Ok(inv) => println!("inverse:\n{}", inv),
        Err(e) => println!("no inverse: {}", e),
    }

    let m = Matrix::new(2, 2, &[4.0, 7.0, 2.0, 6.0])?;
    let inv = m.inverse()?;
    println!("matrix:\n{}", m);
    println!("matrix determinant: {}", m.determinant()?);
    println!("inverse:\n{}", inv);
    println!("m * inverse:\n{}", m.multiply(&inv)?);
    println!("inverse * m:\n{}", inv.multiply(&m)?);
    println!("random 2x3:\n{}", Matrix::random(2, 3));
    Ok(())
}
