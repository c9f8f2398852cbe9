// src/models/outage.rs

/// 1 試行・1 SNR 点でのアウテージ判定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutageIndicators {
    pub system: bool,    // いずれかのユーザが目標未達
    pub primary: bool,
    pub secondary: bool,
}

/// 瞬時レートを目標レートと比較する純粋関数
///
/// # 引数
/// - `rate_primary`, `rate_secondary`: 瞬時レート（bits/s/Hz）
/// - `target_primary`, `target_secondary`: 目標レート（bits/s/Hz）
///
/// # 戻り値
/// - アウテージ判定。いずれかのユーザがアウテージならシステムもアウテージ
pub fn outage_probability(
    rate_primary: f64,
    rate_secondary: f64,
    target_primary: f64,
    target_secondary: f64,
) -> OutageIndicators {
    let primary = rate_primary < target_primary;
    let secondary = rate_secondary < target_secondary;
    OutageIndicators {
        system: primary || secondary,
        primary,
        secondary,
    }
}
