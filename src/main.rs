// src/main.rs

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use uavnoma::config::ScenarioOverrides;
use uavnoma::simulation::load_parameters::load_config;
use uavnoma::simulation::report::{log_summary, save_reports};
use uavnoma::run_simulation;

#[derive(Parser, Debug)]
#[command(about = "Monte Carlo rate and outage evaluation of a UAV-assisted two-user NOMA downlink")]
struct Args {
    /// シナリオファイル（YAML）
    #[arg(short, long, default_value = "config/simulation.yaml")]
    config: PathBuf,

    /// CSV とテキスト出力の保存先
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// シナリオのシードを上書き
    #[arg(long)]
    seed: Option<u64>,

    /// シナリオの試行回数を上書き
    #[arg(long)]
    trials: Option<usize>,

    /// ワーカースレッド数を上書き
    #[arg(long)]
    workers: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 設定の読み込み
    let args = Args::parse();
    let overrides = ScenarioOverrides {
        seed: args.seed,
        trials: args.trials,
        workers: args.workers,
    };
    log::info!("loading scenario from {}", args.config.display());
    let config = load_config(&args.config, &overrides)?;
    log::debug!("{:?}", config);

    // シミュレーションの実行
    let curves = run_simulation(config)?;
    log_summary(&curves);

    // 結果の出力
    for path in save_reports(&args.output_dir, &curves)? {
        log::info!("wrote {}", path.display());
    }

    Ok(())
}
