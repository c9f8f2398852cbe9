// src/math/error.rs

use thiserror::Error;

/// 実行前の設定エラー（バリアントごとに違反した制約を表す）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("試行回数は正の値が必要です（{0}）。")]
    NonPositiveTrials(usize),
    #[error("ワーカー数は正の値が必要です（{0}）。")]
    NonPositiveWorkers(usize),
    #[error("セカンダリユーザの電力係数は 0 以上が必要です（{0}）。")]
    NegativeSecondaryCoefficient(f64),
    #[error("プライマリユーザの電力係数（{primary}）はセカンダリユーザ（{secondary}）以上が必要です。")]
    CoefficientOrder { primary: f64, secondary: f64 },
    #[error("電力係数の和は (0, 1] の範囲が必要です（{0}）。")]
    CoefficientSum(f64),
    #[error("SNR スイープが空です。")]
    EmptySweep,
    #[error("SNR スイープは狭義単調増加が必要です（{previous} dB の次が {next} dB）。")]
    NonIncreasingSweep { previous: f64, next: f64 },
    #[error("SNR スイープの刻みは正の値が必要です（{0} dB）。")]
    NonPositiveSweepStep(f64),
    #[error("SNR スイープの点数 {points} が上限 {limit} を超えています。")]
    SweepTooLarge { points: f64, limit: usize },
    #[error("SNR スイープの値が有限ではありません（{0}）。")]
    NonFiniteSweepValue(f64),
    #[error("ライス係数は 0 以上が必要です（{0}）。")]
    NegativeRicianFactor(f64),
    #[error("パスロス指数は 0 以上が必要です（{0}）。")]
    NegativePathLoss(f64),
    #[error("フェージングの総電力は正の値が必要です（{0}）。")]
    NonPositiveFadingPower(f64),
    #[error("UAV の平均高度は正の値が必要です（{0}）。")]
    NonPositiveHeight(f64),
    #[error("{name} は 0 以上が必要です（{value}）。")]
    NegativeRadius { name: &'static str, value: f64 },
    #[error("ハードウェア劣化係数は 0 以上が必要です（{0}）。")]
    NegativeHardwareImpairment(f64),
    #[error("SIC 残留係数は [0, 1] の範囲が必要です（{0}）。")]
    SicImpairmentRange(f64),
    #[error("{user} ユーザの目標レートは 0 以上が必要です（{value}）。")]
    NegativeTargetRate { user: &'static str, value: f64 },
    #[error("パラメータ {name} が有限ではありません（{value}）。")]
    NonFinite { name: &'static str, value: f64 },
}

/// モンテカルロ実行の失敗
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("設定が不正です: {0}")]
    Config(#[from] ConfigError),
    #[error("ワーカープールを起動できません: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
