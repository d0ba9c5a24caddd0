use anyhow::Result;

use gridmat::Matrix;

fn main() -> Result<()> {
    env_logger::init();

    // Start from the default 3x3 grid and place a few values.
    let mut matrix: Matrix<i32> = Matrix::new();
    matrix.set(1, 0, 0)?.set(2, 1, 1)?.set(3, 2, 2)?;
    println!("After set:\n{}", matrix.pretty());

    // Fill writes only the empty cells, leaving the diagonal alone.
    matrix.fill(0);
    println!("\nAfter fill(0):\n{}", matrix.pretty());

    // set_all overwrites everything.
    matrix.set_all(7);
    println!("\nAfter set_all(7): {}", matrix);

    // Clear one cell back to the empty marker, then the whole grid.
    matrix.clear_element(1, 1)?;
    println!("\nAfter clear_element(1, 1):\n{}", matrix.pretty());
    matrix.clear();
    println!("\nAfter clear: {}", matrix);

    // Random population; the sampled values change run to run.
    let mut random: Matrix<u8> = Matrix::with_shape(2, 4)?;
    random.randomize_all();
    println!("\nRandomized 2x4: {}", random);

    Ok(())
}
