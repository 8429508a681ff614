// Fixed-point rendering of readings

/// Render `value` with `digits` decimals, rounding ties away from zero
/// (`46.5` -> `"47"`, `0.125` -> `"0.13"`).
pub fn to_fixed(value: f64, digits: u32) -> String {
    let scale = 10f64.powi(digits as i32);
    let rounded = (value * scale).round() / scale;
    format!("{:.*}", digits as usize, rounded)
}
