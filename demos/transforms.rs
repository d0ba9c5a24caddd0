use anyhow::{Context, Result};

use gridmat::{Matrix, Plane, Rotation};

fn main() -> Result<()> {
    env_logger::init();

    // First argument picks the rotation; defaults to a quarter turn.
    let rotation: Rotation = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "90".to_string())
        .parse()
        .context("expected a rotation: 90, 180, or 270")?;

    let mut matrix: Matrix<i32> = Matrix::with_shape(2, 3)?;
    matrix.set(1, 0, 0)?.set(2, 0, 1)?.set(3, 0, 2)?;
    println!(
        "Start ({}x{}):\n{}",
        matrix.rows(),
        matrix.cols(),
        matrix.pretty()
    );

    matrix.rotate(rotation);
    println!(
        "\nAfter {} ({}x{}):\n{}",
        rotation,
        matrix.rows(),
        matrix.cols(),
        matrix.pretty()
    );

    // Flips mirror in place; two of the same flip restore the grid.
    matrix.flip(Plane::Horizontal);
    println!("\nAfter horizontal flip:\n{}", matrix.pretty());
    matrix.flip(Plane::Vertical);
    println!("\nAfter vertical flip:\n{}", matrix.pretty());

    Ok(())
}
