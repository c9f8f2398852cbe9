// src/config/parameters.rs

use serde::Deserialize;

/// 2 ユーザのどちらをプライマリ（SIC で先に復号）とするか
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RolePolicy {
    /// チャネル利得の小さいユーザをプライマリとする。大きい電力配分を受けて
    /// 先に復号され、強いユーザがその信号を除去する。
    #[default]
    WeakerPrimary,
    /// ユーザ 0 を常にプライマリ、ユーザ 1 をセカンダリとする
    FixedIndex,
}

/// 設定ファイルに記述するチャネル・配置・NOMA のパラメータ
#[derive(Debug, Deserialize, Clone)]
pub struct SimulationParameters {
    pub radius_uav: f64,               // UAV 飛行軌道の半径（m）
    pub radius_user: f64,              // ユーザ分布円の半径（m）
    pub uav_height_mean: f64,          // UAV の平均飛行高度（m）
    pub rician_factor: f64,            // ライス係数 K（直接波と散乱波の電力比）
    pub power_los: f64,                // フェージング総電力（LOS + 散乱）
    pub path_loss: f64,                // パスロス指数
    #[serde(default)]
    pub hardw_ip: f64,                 // ハードウェア劣化の残留係数
    #[serde(default)]
    pub sic_ip: f64,                   // 不完全 SIC の残留係数
    pub target_rate_primary_user: f64, // 目標レート（bits/s/Hz）
    pub target_rate_secondary_user: f64, // 目標レート（bits/s/Hz）
    pub power_coeff_primary: f64,
    pub power_coeff_secondary: Option<f64>, // 省略時は 1 - power_coeff_primary
    #[serde(default)]
    pub role_policy: RolePolicy,
}

impl SimulationParameters {
    /// セカンダリの電力係数（省略時はプライマリの補数）
    pub fn resolved_power_coeff_secondary(&self) -> f64 {
        self.power_coeff_secondary
            .unwrap_or(1.0 - self.power_coeff_primary)
    }
}
