// src/math/conversion.rs

/// デシベル値を線形の電力比に変換する
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_to_linear_reference_points() {
        assert!((db_to_linear(0.0) - 1.0).abs() < 1e-12);
        assert!((db_to_linear(10.0) - 10.0).abs() < 1e-9);
        assert!((db_to_linear(30.0) - 1000.0).abs() < 1e-6);
        assert!((db_to_linear(-10.0) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_db_to_linear_adds_in_log_domain() {
        for (a, b) in [(10.0, 2.0), (33.0, 27.0), (-5.0, 60.0)] {
            let product = db_to_linear(a) * db_to_linear(b);
            assert!((product / db_to_linear(a + b) - 1.0).abs() < 1e-12);
        }
    }
}
