// src/math/statistics.rs

/// SNR 点ごとの列和
///
/// 列ごとに和と二乗和を保持し、最後の試行の後に平均と平均の標準誤差を求める。
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMoments {
    pub sum: Vec<f64>,
    pub sum_sq: Vec<f64>,
}

impl ColumnMoments {
    pub fn new(columns: usize) -> Self {
        ColumnMoments {
            sum: vec![0.0; columns],
            sum_sq: vec![0.0; columns],
        }
    }

    pub fn columns(&self) -> usize {
        self.sum.len()
    }

    /// 指定列にサンプルを 1 つ加える
    pub fn push(&mut self, column: usize, value: f64) {
        self.sum[column] += value;
        self.sum_sq[column] += value * value;
    }

    /// 別の部分和を列ごとに加算する
    pub fn merge(&mut self, other: &ColumnMoments) {
        debug_assert_eq!(self.columns(), other.columns());
        for (a, b) in self.sum.iter_mut().zip(other.sum.iter()) {
            *a += b;
        }
        for (a, b) in self.sum_sq.iter_mut().zip(other.sum_sq.iter()) {
            *a += b;
        }
    }

    /// `count` サンプルでの列平均
    pub fn mean(&self, count: usize) -> Vec<f64> {
        let n = count as f64;
        self.sum.iter().map(|s| s / n).collect()
    }

    /// `count` サンプルでの列平均の標準誤差
    ///
    /// 不偏分散を用いる。サンプルが 2 未満なら 0 を返す。
    pub fn standard_error(&self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![0.0; self.columns()];
        }
        let n = count as f64;
        self.sum
            .iter()
            .zip(self.sum_sq.iter())
            .map(|(s, sq)| {
                let mean = s / n;
                // 丸め誤差で分散がわずかに負になりうる
                let variance = ((sq - n * mean * mean) / (n - 1.0)).max(0.0);
                (variance / n).sqrt()
            })
            .collect()
    }
}
