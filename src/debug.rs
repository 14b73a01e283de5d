use crate::system::System;

use pretty_dtoa::{dtoa, FmtFloatConfig};

const FLOAT_CONFIG: FmtFloatConfig = FmtFloatConfig::default()
    .add_point_zero(false)
    .max_significant_digits(9);

pub fn format_f64(v: f64) -> String {
    dtoa(v, FLOAT_CONFIG)
}

pub fn format_f64_vec(v: &[f64]) -> String {
    let a: Vec<String> = v.iter().map(|&f| format_f64(f)).collect();
    format!("[{}]", a.join(", "))
}

/// Formats each row of `sys` as its coefficients followed by `|` and the
/// right-hand side value.
pub fn format_system(sys: &System) -> String {
    let a = sys.coefficients();
    let mut s = String::new();
    for (i, b_i) in sys.rhs().iter().enumerate() {
        let row: Vec<String> = a
            .row(i)
            .iter()
            .map(|&v| format!("{:>12}", format_f64(v)))
            .collect();
        s.push_str(&format!("{}   |   {}\n", row.join(""), format_f64(*b_i)));
    }
    s
}
