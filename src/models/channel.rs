// src/models/channel.rs

use rand::Rng;

use crate::config::RolePolicy;
use crate::models::fading::FadingParameters;
use crate::models::geometry::{Placement, Uav, User};

/// 役割割り当て後の 2 ユーザの電力利得
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelGains {
    pub primary: f64,   // 先に復号、大きい電力配分
    pub secondary: f64, // プライマリ除去後に復号
}

/// UAV と地上ユーザの 3 次元距離
pub fn distance_to_user(uav: &Uav, user: &User) -> f64 {
    let dx = uav.position[0] - user.position[0];
    let dy = uav.position[1] - user.position[1];
    let dz = uav.position[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// 距離減衰 `d^(-alpha)`
///
/// 距離が 0 以下または有限でない場合は 0 を返す。
pub fn path_loss_gain(distance: f64, path_loss: f64) -> f64 {
    if !(distance > 0.0 && distance.is_finite()) {
        return 0.0;
    }
    let gain = distance.powf(-path_loss);
    if gain.is_finite() {
        gain
    } else {
        0.0
    }
}

/// 1 ユーザの電力利得 `|h|^2 * d^(-alpha)` を計算する純粋関数
///
/// # 引数
/// - `magnitude`: 小規模フェージングの振幅 `|h|`
/// - `distance`: UAV とユーザの距離（m）
/// - `path_loss`: パスロス指数
///
/// # 戻り値
/// - 有限かつ非負の利得
pub fn channel_gain(magnitude: f64, distance: f64, path_loss: f64) -> f64 {
    let gain = magnitude * magnitude * path_loss_gain(distance, path_loss);
    if gain.is_finite() && gain >= 0.0 {
        gain
    } else {
        0.0
    }
}

/// ユーザごとの利得をプライマリ／セカンダリに割り当てる
pub fn assign_roles(gains: [f64; 2], policy: RolePolicy) -> ChannelGains {
    match policy {
        RolePolicy::WeakerPrimary => ChannelGains {
            primary: gains[0].min(gains[1]),
            secondary: gains[0].max(gains[1]),
        },
        RolePolicy::FixedIndex => ChannelGains {
            primary: gains[0],
            secondary: gains[1],
        },
    }
}

/// ユーザごとに独立なフェージングを引き、距離減衰と合わせる
pub fn generate_channel<R: Rng + ?Sized>(
    rng: &mut R,
    fading: &FadingParameters,
    placement: &Placement,
    path_loss: f64,
    policy: RolePolicy,
) -> ChannelGains {
    let gains = placement.users.map(|user| {
        let magnitude = fading.sample_magnitude(rng);
        channel_gain(magnitude, distance_to_user(&placement.uav, &user), path_loss)
    });
    assign_roles(gains, policy)
}
