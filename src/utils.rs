// Cells that do not parse as a finite number count as 0.
pub fn parse_cell(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

pub fn parse_lines(lines: &[Vec<String>]) -> Vec<Vec<f64>> {
    lines
        .iter()
        .map(|line| line.iter().map(|cell| parse_cell(cell)).collect())
        .collect()
}

#[inline(always)]
pub fn log_step(index: usize, description: &str) {
    println!("[ ] Step {}: {}", index, description);
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
