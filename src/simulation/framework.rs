// src/simulation/framework.rs

use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::math::SimulationError;
use crate::models::channel::generate_channel;
use crate::models::fading::{fading_rician, FadingParameters};
use crate::models::geometry::sample_placement;
use crate::models::outage::outage_probability;
use crate::models::rate::{
    average_rate, calculate_instantaneous_rate_primary, calculate_instantaneous_rate_secondary,
};
use crate::models::ChannelGains;
use crate::simulation::{SimulationCurves, SimulationState, TrialMetrics};

/// 作業単位あたりの試行数（固定値なので加算順序と出力はワーカー数に依存しない）
pub const TRIALS_PER_CHUNK: usize = 1024;

/// 1 試行分の乱数系列（シードで鍵、試行番号でストリームを選ぶ）
pub fn trial_rng(seed: u64, trial: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(trial as u64);
    rng
}

/// 1 試行のチャネルに対する 1 SNR 点でのレートとアウテージ
pub fn evaluate_snr_point(gains: &ChannelGains, snr: f64, config: &SimulationConfig) -> TrialMetrics {
    // 瞬時レート
    let rate_primary = calculate_instantaneous_rate_primary(
        gains.primary,
        snr,
        config.power_coeff_primary,
        config.power_coeff_secondary,
        config.hardw_ip,
    );
    let rate_secondary = calculate_instantaneous_rate_secondary(
        gains.secondary,
        snr,
        config.power_coeff_secondary,
        config.power_coeff_primary,
        config.hardw_ip,
        config.sic_ip,
    );
    // システムレートとアウテージ判定
    TrialMetrics {
        rate_primary,
        rate_secondary,
        rate_system: average_rate(rate_primary, rate_secondary),
        outage: outage_probability(
            rate_primary,
            rate_secondary,
            config.target_rate_primary,
            config.target_rate_secondary,
        ),
    }
}

/// 1 試行の実行
///
/// 配置とフェージングは 1 回だけ引き、すべての SNR 点で使い回す。
pub fn execute_trial<R: Rng + ?Sized>(
    state: &mut SimulationState,
    config: &SimulationConfig,
    fading: &FadingParameters,
    snr_linear: &[f64],
    rng: &mut R,
) {
    // 配置の生成
    let placement = sample_placement(
        rng,
        config.radius_uav,
        config.uav_height_mean,
        config.radius_user,
    );
    // チャネル利得の生成
    let gains = generate_channel(rng, fading, &placement, config.path_loss, config.role_policy);

    // SNR 点ごとの評価
    for (column, snr) in snr_linear.iter().enumerate() {
        let metrics = evaluate_snr_point(&gains, *snr, config);
        state.record(column, &metrics);
    }
    state.trials += 1;
}

/// 連続した試行ブロックを新しいステートで実行する
pub fn run_chunk(
    config: &SimulationConfig,
    fading: &FadingParameters,
    snr_linear: &[f64],
    seed: u64,
    trials: Range<usize>,
) -> SimulationState {
    let mut state = SimulationState::new(snr_linear.len());
    for trial in trials {
        let mut rng = trial_rng(seed, trial);
        execute_trial(&mut state, config, fading, snr_linear, &mut rng);
    }
    state
}

/// 設定シナリオのモンテカルロ評価
///
/// 設定を検証し、`config.trials` 回の独立な試行を並列チャンクで実行して、
/// 合算した和を 6 本の平均曲線に縮約する。シードを固定すれば結果は実行回数や
/// ワーカー数によらずビット単位で一致する。
///
/// # 引数
/// - `config`: 実行設定
///
/// # 戻り値
/// - SNR スイープに沿った 6 本の曲線
pub fn run_simulation(config: SimulationConfig) -> Result<SimulationCurves, SimulationError> {
    // 設定の検証とフェージングパラメータ
    config.validate()?;
    let fading = fading_rician(config.rician_factor, config.power_los)?;
    let snr_linear = config.snr_linear();

    // シードの決定
    let seed = match config.seed {
        Some(seed) => seed,
        None => {
            let seed = rand::thread_rng().gen::<u64>();
            log::info!("no seed configured, drew seed {}", seed);
            seed
        }
    };

    // チャンク分割
    let chunks = config.trials.div_ceil(TRIALS_PER_CHUNK);
    log::info!(
        "running {} trials over {} SNR points ({} chunks, seed {})",
        config.trials,
        snr_linear.len(),
        chunks,
        seed
    );

    // 並列実行
    let work = || -> Vec<SimulationState> {
        (0..chunks)
            .into_par_iter()
            .map(|chunk| {
                let start = chunk * TRIALS_PER_CHUNK;
                let end = (start + TRIALS_PER_CHUNK).min(config.trials);
                let state = run_chunk(&config, &fading, &snr_linear, seed, start..end);
                log::debug!("chunk {} done (trials {}..{})", chunk, start, end);
                state
            })
            .collect()
    };

    let partials = match config.workers {
        Some(workers) => rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()?
            .install(work),
        None => work(),
    };

    // チャンク順に合算
    let mut total = SimulationState::new(snr_linear.len());
    for partial in &partials {
        total.merge(partial);
    }
    log::info!("finished {} trials", total.trials);

    // 平均曲線への縮約
    Ok(total.finish(seed, config.snr_db, snr_linear))
}
