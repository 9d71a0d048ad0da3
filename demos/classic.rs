//! Solve the textbook triangle and print the report.

use tripath::{find_minimum_path, parse_triangle, render_report};

fn main() -> anyhow::Result<()> {
    let triangle = parse_triangle("[[2],[3,4],[6,5,7],[4,1,8,3]]")?;
    let result = find_minimum_path(&triangle);

    print!("{}", render_report(&result)?);
    println!("columns: {:?}", result.columns());

    Ok(())
}
