// src/simulation/load_parameters.rs

use std::error::Error;
use std::fs::File;
use std::path::Path;
use serde_yaml::from_reader;

use crate::config::{ScenarioOverrides, SimulationConfig, SimulationFile};

/// パラメータとシナリオの読み込み（未検証）
pub fn load_simulation_file<P: AsRef<Path>>(path: P) -> Result<SimulationFile, Box<dyn Error>> {
    let file = File::open(path.as_ref())?;
    let parsed: SimulationFile = from_reader(file)?;
    Ok(parsed)
}

/// 設定の読み込み
///
/// 上書き値をシナリオに適用してから、ファイルの値と合わせて検証する。
///
/// # 引数
/// - `path`: YAML 設定ファイル
/// - `overrides`: コマンドラインからの上書き値
///
/// # 戻り値
/// - 検証済みの設定
pub fn load_config<P: AsRef<Path>>(
    path: P,
    overrides: &ScenarioOverrides,
) -> Result<SimulationConfig, Box<dyn Error>> {
    let mut file = load_simulation_file(path)?;
    overrides.apply(&mut file.scenario);
    let config = SimulationConfig::from_parts(file.parameters, file.scenario)?;
    Ok(config)
}
