// src/models/fading.rs

use rand::Rng;
use rand_distr::StandardNormal;

use crate::math::ConfigError;

/// 全ユーザで共有するライスフェージングのパラメータ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadingParameters {
    pub s: f64,     // 直接波（LOS）の振幅
    pub sigma: f64, // 散乱成分ごとの標準偏差
}

/// ライス係数と総電力から `(s, sigma)` を求める純粋関数
///
/// `s^2 = power * K / (K + 1)`、`2 sigma^2 = power / (K + 1)`
///
/// # 引数
/// - `rician_factor`: ライス係数 K
/// - `power`: フェージング総電力
///
/// # 戻り値
/// - フェージングパラメータ。`K < 0` または電力が正でなければエラー
pub fn fading_rician(rician_factor: f64, power: f64) -> Result<FadingParameters, ConfigError> {
    if !(rician_factor >= 0.0) {
        return Err(ConfigError::NegativeRicianFactor(rician_factor));
    }
    if !(power > 0.0) {
        return Err(ConfigError::NonPositiveFadingPower(power));
    }
    let s = (power * rician_factor / (rician_factor + 1.0)).sqrt();
    let sigma = (power / (2.0 * (rician_factor + 1.0))).sqrt();
    Ok(FadingParameters { s, sigma })
}

impl FadingParameters {
    /// ライス振幅 `|h|` を 1 つ引く
    ///
    /// 標準偏差 `sigma` のガウス成分 2 つを引き、同相成分に直接波の振幅を加える。
    pub fn sample_magnitude<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z_i: f64 = rng.sample(StandardNormal);
        let z_q: f64 = rng.sample(StandardNormal);
        (self.s + self.sigma * z_i).hypot(self.sigma * z_q)
    }
}
