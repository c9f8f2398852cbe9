// src/models/geometry.rs

use std::f64::consts::TAU;

use rand::Rng;

/// 1 試行あたりの NOMA ユーザ数
pub const NUMBER_USERS: usize = 2;

/// UAV 高度を平均の周りで一様に引く帯の半幅（m）
/// 平均高度が小さい場合は平均の半分に狭め、高度を正に保つ。
pub const UAV_HEIGHT_SPREAD: f64 = 1.0;

/// 基地局として動作する UAV
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uav {
    pub position: [f64; 3], // [x, y, z] 座標（m）
}

/// 地上ユーザ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct User {
    pub position: [f64; 2], // [x, y] 座標（m）
}

/// 1 試行分の配置
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub uav: Uav,
    pub users: [User; NUMBER_USERS],
}

/// 原点中心の円内で面積一様に点を引く
///
/// 半径は平方根変換を通す。
pub fn sample_in_disk<R: Rng + ?Sized>(rng: &mut R, radius: f64) -> [f64; 2] {
    let r = radius * rng.gen::<f64>().sqrt();
    let theta = rng.gen::<f64>() * TAU;
    [r * theta.cos(), r * theta.sin()]
}

/// UAV の位置を引く（水平位置は軌道円内で一様、高度は平均の周り）
///
/// # 引数
/// - `radius_uav`: 飛行軌道の半径（m）
/// - `height_mean`: 平均飛行高度（m）、正の値
///
/// # 戻り値
/// - 高度が正の UAV
pub fn random_position_uav<R: Rng + ?Sized>(rng: &mut R, radius_uav: f64, height_mean: f64) -> Uav {
    let [x, y] = sample_in_disk(rng, radius_uav);
    let half_width = UAV_HEIGHT_SPREAD.min(0.5 * height_mean);
    let z = height_mean - half_width + 2.0 * half_width * rng.gen::<f64>();
    Uav { position: [x, y, z] }
}

/// ユーザ円内に独立な地上位置を `number_user` 個引く
pub fn random_position_users<R: Rng + ?Sized>(
    rng: &mut R,
    number_user: usize,
    radius_user: f64,
) -> Vec<User> {
    (0..number_user)
        .map(|_| User {
            position: sample_in_disk(rng, radius_user),
        })
        .collect()
}

/// 1 試行分の UAV と 2 ユーザを引く（UAV、ユーザの順に乱数を消費する）
pub fn sample_placement<R: Rng + ?Sized>(
    rng: &mut R,
    radius_uav: f64,
    height_mean: f64,
    radius_user: f64,
) -> Placement {
    let uav = random_position_uav(rng, radius_uav, height_mean);
    let drawn = random_position_users(rng, NUMBER_USERS, radius_user);
    let users = std::array::from_fn(|i| drawn[i]);
    Placement { uav, users }
}
