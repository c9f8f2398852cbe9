// src/config/simulation.rs

use serde::Deserialize;

use crate::config::parameters::{RolePolicy, SimulationParameters};
use crate::config::scenario::Scenario;
use crate::math::{db_to_linear, ConfigError};

/// 設定ファイルの構成（生の設定型ごとに 1 セクション）
#[derive(Debug, Deserialize, Clone)]
pub struct SimulationFile {
    pub parameters: SimulationParameters,
    pub scenario: Scenario,
}

/// 検証済みのモンテカルロ実行入力
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub trials: usize,
    pub radius_uav: f64,
    pub radius_user: f64,
    pub uav_height_mean: f64,
    pub rician_factor: f64,
    pub power_los: f64,
    pub path_loss: f64,
    pub hardw_ip: f64,
    pub sic_ip: f64,
    pub target_rate_primary: f64,
    pub target_rate_secondary: f64,
    pub power_coeff_primary: f64,
    pub power_coeff_secondary: f64,
    pub role_policy: RolePolicy,
    pub snr_db: Vec<f64>,
    pub seed: Option<u64>,
    pub workers: Option<usize>,
}

impl Default for SimulationConfig {
    /// 基準シナリオ（K = 15、alpha = 2.2、電力配分 (0.8, 0.2)、10..60 dB）
    fn default() -> Self {
        SimulationConfig {
            trials: 100_000,
            radius_uav: 2.0,
            radius_user: 10.0,
            uav_height_mean: 15.0,
            rician_factor: 15.0,
            power_los: 1.0,
            path_loss: 2.2,
            hardw_ip: 0.0,
            sic_ip: 0.0,
            target_rate_primary: 0.5,
            target_rate_secondary: 0.5,
            power_coeff_primary: 0.8,
            power_coeff_secondary: 0.2,
            role_policy: RolePolicy::WeakerPrimary,
            snr_db: (10..=60).step_by(2).map(f64::from).collect(),
            seed: None,
            workers: None,
        }
    }
}

impl SimulationConfig {
    /// 設定ファイルの 2 セクションから設定を組み立てて検証する
    ///
    /// # 引数
    /// - `parameters`: チャネル・配置・NOMA のパラメータ
    /// - `scenario`: 試行回数と SNR スイープ
    ///
    /// # 戻り値
    /// - 検証済みの設定。制約違反は最初の 1 件を返す
    pub fn from_parts(
        parameters: SimulationParameters,
        scenario: Scenario,
    ) -> Result<Self, ConfigError> {
        let config = SimulationConfig {
            trials: scenario.trials,
            radius_uav: parameters.radius_uav,
            radius_user: parameters.radius_user,
            uav_height_mean: parameters.uav_height_mean,
            rician_factor: parameters.rician_factor,
            power_los: parameters.power_los,
            path_loss: parameters.path_loss,
            hardw_ip: parameters.hardw_ip,
            sic_ip: parameters.sic_ip,
            target_rate_primary: parameters.target_rate_primary_user,
            target_rate_secondary: parameters.target_rate_secondary_user,
            power_coeff_primary: parameters.power_coeff_primary,
            power_coeff_secondary: parameters.resolved_power_coeff_secondary(),
            role_policy: parameters.role_policy,
            snr_db: scenario.snr_db.to_db()?,
            seed: scenario.seed,
            workers: scenario.workers,
        };
        config.validate()?;
        config.warn_outside_recommended_ranges();
        Ok(config)
    }

    /// `snr_db` に対応する線形 SNR
    pub fn snr_linear(&self) -> Vec<f64> {
        self.snr_db.iter().map(|db| db_to_linear(*db)).collect()
    }

    /// 最初の試行の前に満たすべき制約をすべて検査する
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("radius_uav", self.radius_uav),
            ("radius_user", self.radius_user),
            ("uav_height_mean", self.uav_height_mean),
            ("rician_factor", self.rician_factor),
            ("power_los", self.power_los),
            ("path_loss", self.path_loss),
            ("hardw_ip", self.hardw_ip),
            ("sic_ip", self.sic_ip),
            ("target_rate_primary", self.target_rate_primary),
            ("target_rate_secondary", self.target_rate_secondary),
            ("power_coeff_primary", self.power_coeff_primary),
            ("power_coeff_secondary", self.power_coeff_secondary),
        ];
        // 有限性
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        // 実行規模
        if self.trials == 0 {
            return Err(ConfigError::NonPositiveTrials(self.trials));
        }
        if let Some(0) = self.workers {
            return Err(ConfigError::NonPositiveWorkers(0));
        }

        // 電力配分
        if self.power_coeff_secondary < 0.0 {
            return Err(ConfigError::NegativeSecondaryCoefficient(
                self.power_coeff_secondary,
            ));
        }
        if self.power_coeff_primary < self.power_coeff_secondary {
            return Err(ConfigError::CoefficientOrder {
                primary: self.power_coeff_primary,
                secondary: self.power_coeff_secondary,
            });
        }
        let sum_power = self.power_coeff_primary + self.power_coeff_secondary;
        if !(sum_power > 0.0 && sum_power <= 1.0) {
            return Err(ConfigError::CoefficientSum(sum_power));
        }

        // SNR スイープ
        validate_sweep(&self.snr_db)?;

        // チャネルと配置
        if self.rician_factor < 0.0 {
            return Err(ConfigError::NegativeRicianFactor(self.rician_factor));
        }
        if self.path_loss < 0.0 {
            return Err(ConfigError::NegativePathLoss(self.path_loss));
        }
        if self.power_los <= 0.0 {
            return Err(ConfigError::NonPositiveFadingPower(self.power_los));
        }
        if self.uav_height_mean <= 0.0 {
            return Err(ConfigError::NonPositiveHeight(self.uav_height_mean));
        }
        if self.radius_uav < 0.0 {
            return Err(ConfigError::NegativeRadius {
                name: "radius_uav",
                value: self.radius_uav,
            });
        }
        if self.radius_user < 0.0 {
            return Err(ConfigError::NegativeRadius {
                name: "radius_user",
                value: self.radius_user,
            });
        }
        // 劣化係数と目標レート
        if self.hardw_ip < 0.0 {
            return Err(ConfigError::NegativeHardwareImpairment(self.hardw_ip));
        }
        if !(0.0..=1.0).contains(&self.sic_ip) {
            return Err(ConfigError::SicImpairmentRange(self.sic_ip));
        }
        if self.target_rate_primary < 0.0 {
            return Err(ConfigError::NegativeTargetRate {
                user: "primary",
                value: self.target_rate_primary,
            });
        }
        if self.target_rate_secondary < 0.0 {
            return Err(ConfigError::NegativeTargetRate {
                user: "secondary",
                value: self.target_rate_secondary,
            });
        }
        Ok(())
    }

    /// 基準シナリオの推奨範囲外の値を警告としてログ出力する
    pub fn warn_outside_recommended_ranges(&self) {
        if !(1.0..=2.0).contains(&self.power_los) {
            log::warn!(
                "power_los = {} is outside the recommended range [1, 2]",
                self.power_los
            );
        }
        if !(10.0..=15.0).contains(&self.rician_factor) {
            log::warn!(
                "rician_factor = {} is outside the recommended range [10, 15]",
                self.rician_factor
            );
        }
        if !(2.0..=3.0).contains(&self.path_loss) {
            log::warn!(
                "path_loss = {} is outside the recommended range [2, 3]",
                self.path_loss
            );
        }
    }
}

fn validate_sweep(snr_db: &[f64]) -> Result<(), ConfigError> {
    if snr_db.is_empty() {
        return Err(ConfigError::EmptySweep);
    }
    if let Some(bad) = snr_db.iter().find(|v| !v.is_finite()) {
        return Err(ConfigError::NonFiniteSweepValue(*bad));
    }
    for pair in snr_db.windows(2) {
        if pair[1] <= pair[0] {
            return Err(ConfigError::NonIncreasingSweep {
                previous: pair[0],
                next: pair[1],
            });
        }
    }
    Ok(())
}
