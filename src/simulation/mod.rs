// src/simulation/mod.rs

pub mod load_parameters;
pub mod csv;
pub mod report;
pub mod framework;

use crate::math::ColumnMoments;
use crate::models::OutageIndicators;

/// 1 試行・1 SNR 点の評価値
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialMetrics {
    pub rate_primary: f64,
    pub rate_secondary: f64,
    pub rate_system: f64,
    pub outage: OutageIndicators,
}

/// 全評価値の累積和（SNR 点ごとに 1 列）
///
/// ワーカーごとにステートを埋め、加算で合算し、最後の試行の後に一度だけ曲線へ縮約する。
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub trials: usize,
    pub out_probability_system: ColumnMoments,
    pub out_probability_primary_user: ColumnMoments,
    pub out_probability_secondary_user: ColumnMoments,
    pub system_average_rate: ColumnMoments,
    pub rate_primary_user: ColumnMoments,
    pub rate_secondary_user: ColumnMoments,
}

impl SimulationState {
    pub fn new(snr_points: usize) -> Self {
        SimulationState {
            trials: 0,
            out_probability_system: ColumnMoments::new(snr_points),
            out_probability_primary_user: ColumnMoments::new(snr_points),
            out_probability_secondary_user: ColumnMoments::new(snr_points),
            system_average_rate: ColumnMoments::new(snr_points),
            rate_primary_user: ColumnMoments::new(snr_points),
            rate_secondary_user: ColumnMoments::new(snr_points),
        }
    }

    /// SNR 列 `column` に 1 試行分の評価値を記録する
    pub fn record(&mut self, column: usize, metrics: &TrialMetrics) {
        let indicator = |flag: bool| if flag { 1.0 } else { 0.0 };
        self.out_probability_system
            .push(column, indicator(metrics.outage.system));
        self.out_probability_primary_user
            .push(column, indicator(metrics.outage.primary));
        self.out_probability_secondary_user
            .push(column, indicator(metrics.outage.secondary));
        self.system_average_rate.push(column, metrics.rate_system);
        self.rate_primary_user.push(column, metrics.rate_primary);
        self.rate_secondary_user.push(column, metrics.rate_secondary);
    }

    pub fn merge(&mut self, other: &SimulationState) {
        self.trials += other.trials;
        self.out_probability_system
            .merge(&other.out_probability_system);
        self.out_probability_primary_user
            .merge(&other.out_probability_primary_user);
        self.out_probability_secondary_user
            .merge(&other.out_probability_secondary_user);
        self.system_average_rate.merge(&other.system_average_rate);
        self.rate_primary_user.merge(&other.rate_primary_user);
        self.rate_secondary_user.merge(&other.rate_secondary_user);
    }

    /// 記録済みの試行数で平均曲線に縮約する
    pub fn finish(&self, seed: u64, snr_db: Vec<f64>, snr_linear: Vec<f64>) -> SimulationCurves {
        let curve = |moments: &ColumnMoments| Curve {
            mean: moments.mean(self.trials),
            standard_error: moments.standard_error(self.trials),
        };
        SimulationCurves {
            seed,
            trials: self.trials,
            snr_db,
            snr_linear,
            out_prob_system: curve(&self.out_probability_system),
            out_prob_primary: curve(&self.out_probability_primary_user),
            out_prob_secondary: curve(&self.out_probability_secondary_user),
            rate_system: curve(&self.system_average_rate),
            rate_primary: curve(&self.rate_primary_user),
            rate_secondary: curve(&self.rate_secondary_user),
        }
    }
}

/// SNR スイープに沿った 1 評価値の期待値
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub mean: Vec<f64>,
    pub standard_error: Vec<f64>,
}

/// 実行結果（SNR スイープに沿った 6 本の曲線）
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationCurves {
    pub seed: u64,
    pub trials: usize,
    pub snr_db: Vec<f64>,
    pub snr_linear: Vec<f64>,
    pub out_prob_system: Curve,
    pub out_prob_primary: Curve,
    pub out_prob_secondary: Curve,
    pub rate_system: Curve,
    pub rate_primary: Curve,
    pub rate_secondary: Curve,
}

impl SimulationCurves {
    /// 出力名付きの 6 曲線（アウテージ曲線が先）
    pub fn named(&self) -> [(&'static str, &Curve); 6] {
        [
            ("outage_system", &self.out_prob_system),
            ("outage_primary", &self.out_prob_primary),
            ("outage_secondary", &self.out_prob_secondary),
            ("rate_system", &self.rate_system),
            ("rate_primary", &self.rate_primary),
            ("rate_secondary", &self.rate_secondary),
        ]
    }
}
