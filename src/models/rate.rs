// src/models/rate.rs

use std::f64::consts::LN_2;

fn is_degenerate(gain: f64, snr: f64) -> bool {
    !(gain > 0.0 && gain.is_finite() && snr > 0.0 && snr.is_finite())
}

/// 受信電力 `x = gain * snr` に対する `log2(1 + a x / (b x + 1))`
///
/// # 引数
/// - `signal_coeff`: 所望信号の電力係数 `a`
/// - `interference_coeff`: 受信電力に比例する干渉の係数 `b`
/// - `gain`: チャネル電力利得
/// - `snr`: 送信 SNR（線形）
///
/// # 戻り値
/// - レート（bits/s/Hz）。縮退した入力では 0
fn rate_from_received(signal_coeff: f64, interference_coeff: f64, gain: f64, snr: f64) -> f64 {
    if is_degenerate(gain, snr) || !(signal_coeff > 0.0) {
        return 0.0;
    }
    let received = gain * snr;
    let sinr = if received > 1.0 {
        // 分子と分母を受信電力で割る（received = inf でも 1/inf = 0）
        signal_coeff / (interference_coeff + received.recip())
    } else {
        signal_coeff * received / (interference_coeff * received + 1.0)
    };
    if sinr.is_infinite() {
        // 干渉なしで受信電力が f64 を超えた場合は対数領域で求める
        return signal_coeff.log2() + gain.log2() + snr.log2();
    }
    if !(sinr.is_finite() && sinr >= 0.0) {
        return 0.0;
    }
    sinr.ln_1p() / LN_2
}

/// プライマリユーザの瞬時達成レート（bits/s/Hz）
///
/// プライマリは先に復号されるため、セカンダリの電力が干渉として残る。
///
/// # 引数
/// - `gain`: プライマリユーザのチャネル電力利得
/// - `snr`: 送信 SNR（線形）
/// - `coeff_primary`, `coeff_secondary`: 電力配分係数
/// - `hardw_ip`: ハードウェア劣化の残留係数
pub fn calculate_instantaneous_rate_primary(
    gain: f64,
    snr: f64,
    coeff_primary: f64,
    coeff_secondary: f64,
    hardw_ip: f64,
) -> f64 {
    rate_from_received(coeff_primary, coeff_secondary + hardw_ip, gain, snr)
}

/// セカンダリユーザの瞬時達成レート（bits/s/Hz）
///
/// セカンダリはプライマリ信号を除去してから復号する。`sic_ip` は不完全な
/// 除去で残るプライマリ電力の割合。
///
/// # 引数
/// - `gain`: セカンダリユーザのチャネル電力利得
/// - `snr`: 送信 SNR（線形）
/// - `coeff_secondary`, `coeff_primary`: 電力配分係数
/// - `hardw_ip`: ハードウェア劣化の残留係数
/// - `sic_ip`: 不完全 SIC の残留係数
pub fn calculate_instantaneous_rate_secondary(
    gain: f64,
    snr: f64,
    coeff_secondary: f64,
    coeff_primary: f64,
    hardw_ip: f64,
    sic_ip: f64,
) -> f64 {
    rate_from_received(coeff_secondary, sic_ip * coeff_primary + hardw_ip, gain, snr)
}

/// システムレート（2 ユーザのレートの単純平均）
pub fn average_rate(rate_primary: f64, rate_secondary: f64) -> f64 {
    (rate_primary + rate_secondary) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_rate_formula() {
        let (g, snr): (f64, f64) = (0.01, 1000.0);
        let expected = (1.0 + (0.8 * g * snr) / (0.2 * g * snr + 1.0 + 0.05 * snr * g)).log2();
        let rate = calculate_instantaneous_rate_primary(g, snr, 0.8, 0.2, 0.05);
        assert!((rate - expected).abs() < 1e-12);
    }

    #[test]
    fn test_secondary_rate_formula() {
        let (g, snr): (f64, f64) = (0.02, 500.0);
        let expected =
            (1.0 + (0.2 * g * snr) / (0.1 * 0.8 * g * snr + 1.0 + 0.03 * snr * g)).log2();
        let rate = calculate_instantaneous_rate_secondary(g, snr, 0.2, 0.8, 0.03, 0.1);
        assert!((rate - expected).abs() < 1e-12);
    }

    #[test]
    fn test_ideal_secondary_is_interference_free() {
        let (g, snr): (f64, f64) = (0.02, 500.0);
        let expected = (1.0 + 0.2 * g * snr).log2();
        let rate = calculate_instantaneous_rate_secondary(g, snr, 0.2, 0.8, 0.0, 0.0);
        assert!((rate - expected).abs() < 1e-12);
    }

    #[test]
    fn test_full_sic_residual_treats_primary_as_interference() {
        let (g, snr): (f64, f64) = (0.02, 500.0);
        let expected = (1.0 + (0.2 * g * snr) / (0.8 * g * snr + 1.0)).log2();
        let rate = calculate_instantaneous_rate_secondary(g, snr, 0.2, 0.8, 0.0, 1.0);
        assert!((rate - expected).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs_give_zero_rate() {
        assert_eq!(calculate_instantaneous_rate_primary(0.0, 100.0, 0.8, 0.2, 0.0), 0.0);
        assert_eq!(calculate_instantaneous_rate_primary(-1.0, 100.0, 0.8, 0.2, 0.0), 0.0);
        assert_eq!(calculate_instantaneous_rate_primary(0.1, 0.0, 0.8, 0.2, 0.0), 0.0);
        assert_eq!(
            calculate_instantaneous_rate_secondary(f64::NAN, 100.0, 0.2, 0.8, 0.0, 0.0),
            0.0
        );
        assert_eq!(
            calculate_instantaneous_rate_secondary(0.1, f64::INFINITY, 0.2, 0.8, 0.0, 0.0),
            0.0
        );
    }

    #[test]
    fn test_zero_secondary_coefficient_gives_zero_rate() {
        for snr in [10.0, 1e3, 1e6] {
            assert_eq!(
                calculate_instantaneous_rate_secondary(0.05, snr, 0.0, 1.0, 0.0, 0.0),
                0.0
            );
        }
    }

    #[test]
    fn test_rates_non_decreasing_in_snr() {
        let g = 0.004;
        let mut previous = (0.0, 0.0);
        for db in (10..=60).step_by(2) {
            let snr = 10.0_f64.powf(db as f64 / 10.0);
            let p = calculate_instantaneous_rate_primary(g, snr, 0.8, 0.2, 0.01);
            let s = calculate_instantaneous_rate_secondary(g, snr, 0.2, 0.8, 0.01, 0.05);
            assert!(p >= previous.0 && s >= previous.1);
            previous = (p, s);
        }
    }

    #[test]
    fn test_overflowing_received_power_saturates() {
        let (g, snr): (f64, f64) = (1e200, 1e200);
        assert!((g * snr).is_infinite());

        let primary = calculate_instantaneous_rate_primary(g, snr, 0.8, 0.2, 0.0);
        assert!((primary - (1.0_f64 + 0.8 / 0.2).log2()).abs() < 1e-12);

        let secondary = calculate_instantaneous_rate_secondary(g, snr, 0.2, 0.8, 0.1, 1.0);
        assert!((secondary - (1.0_f64 + 0.2 / (0.8 + 0.1)).log2()).abs() < 1e-12);
    }

    #[test]
    fn test_overflowing_received_power_without_interference() {
        let (g, snr): (f64, f64) = (1e200, 1e200);
        let rate = calculate_instantaneous_rate_secondary(g, snr, 0.2, 0.8, 0.0, 0.0);
        let expected = 0.2_f64.log2() + 400.0 * 10.0_f64.log2();
        assert!((rate - expected).abs() < 1e-9, "rate = {}", rate);

        let smaller = calculate_instantaneous_rate_secondary(1e100, 1e100, 0.2, 0.8, 0.0, 0.0);
        assert!(smaller.is_finite() && smaller < rate);
    }

    #[test]
    fn test_average_rate() {
        assert_eq!(average_rate(1.0, 3.0), 2.0);
    }
}
