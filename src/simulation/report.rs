// src/simulation/report.rs

use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::simulation::csv::save_curves_csv;
use crate::simulation::SimulationCurves;

pub const CURVES_FILE: &str = "curves.csv";
pub const OUTAGE_FILE: &str = "outage_prob_values.txt";
pub const RATE_FILE: &str = "achievable_rate_values.txt";

/// 曲線を固定小数点で `[v0 v1 ...]` 形式に整形する
pub fn format_values(values: &[f64]) -> String {
    let body: Vec<String> = values.iter().map(|v| format!("{:.6}", v)).collect();
    format!("[{}]", body.join(" "))
}

/// アウテージ確率の出力（システム、プライマリ、セカンダリ）
pub fn write_outage_summary<W: Write>(
    writer: &mut W,
    curves: &SimulationCurves,
) -> Result<(), std::io::Error> {
    writeln!(writer, "SNR (dB): {}", format_values(&curves.snr_db))?;
    writeln!(writer)?;
    writeln!(writer, "Outage probability system: {}", format_values(&curves.out_prob_system.mean))?;
    writeln!(writer)?;
    writeln!(writer, "Outage probability primary user: {}", format_values(&curves.out_prob_primary.mean))?;
    writeln!(writer)?;
    writeln!(writer, "Outage probability secondary user: {}", format_values(&curves.out_prob_secondary.mean))?;
    Ok(())
}

/// 達成レートの出力（システム、プライマリ、セカンダリ）
pub fn write_rate_summary<W: Write>(
    writer: &mut W,
    curves: &SimulationCurves,
) -> Result<(), std::io::Error> {
    writeln!(writer, "SNR (dB): {}", format_values(&curves.snr_db))?;
    writeln!(writer)?;
    writeln!(writer, "Average achievable rate of the system: {}", format_values(&curves.rate_system.mean))?;
    writeln!(writer)?;
    writeln!(writer, "Average achievable rate of the primary user: {}", format_values(&curves.rate_primary.mean))?;
    writeln!(writer)?;
    writeln!(writer, "Average achievable rate of the secondary user: {}", format_values(&curves.rate_secondary.mean))?;
    Ok(())
}

fn save_with<F>(path: &Path, curves: &SimulationCurves, write: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut BufWriter<File>, &SimulationCurves) -> Result<(), std::io::Error>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write(&mut writer, curves)?;
    writer.flush()?;
    Ok(())
}

/// CSV と 2 つのテキスト出力を `output_dir` に保存する（ディレクトリは必要なら作成）
///
/// # 戻り値
/// - 書き込んだファイルのパス
pub fn save_reports(output_dir: &Path, curves: &SimulationCurves) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    fs::create_dir_all(output_dir)?;

    // 曲線 CSV
    let csv_path = output_dir.join(CURVES_FILE);
    save_curves_csv(&csv_path, curves)?;

    // テキスト出力
    let outage_path = output_dir.join(OUTAGE_FILE);
    save_with(&outage_path, curves, write_outage_summary)?;

    let rate_path = output_dir.join(RATE_FILE);
    save_with(&rate_path, curves, write_rate_summary)?;

    Ok(vec![csv_path, outage_path, rate_path])
}

/// 実行完了後に主要な曲線をログ出力する
pub fn log_summary(curves: &SimulationCurves) {
    log::info!("Outage probability system: {}", format_values(&curves.out_prob_system.mean));
    log::info!("Average achievable rate of the system: {}", format_values(&curves.rate_system.mean));
    log::info!("Achievable rate of the primary user: {}", format_values(&curves.rate_primary.mean));
    log::info!("Achievable rate of the secondary user: {}", format_values(&curves.rate_secondary.mean));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::SimulationState;

    #[test]
    fn test_format_values() {
        assert_eq!(format_values(&[0.5, 1.0]), "[0.500000 1.000000]");
        assert_eq!(format_values(&[]), "[]");
    }

    #[test]
    fn test_summaries_name_every_curve() {
        let mut state = SimulationState::new(1);
        state.trials = 1;
        let curves = state.finish(0, vec![10.0], vec![10.0]);

        let mut outage = Vec::new();
        write_outage_summary(&mut outage, &curves).unwrap();
        let outage = String::from_utf8(outage).unwrap();
        assert!(outage.contains("Outage probability system: [0.000000]"));
        assert!(outage.contains("primary user"));
        assert!(outage.contains("secondary user"));

        let mut rate = Vec::new();
        write_rate_summary(&mut rate, &curves).unwrap();
        let rate = String::from_utf8(rate).unwrap();
        assert!(rate.starts_with("SNR (dB): [10.000000]"));
        assert!(rate.contains("Average achievable rate of the secondary user"));
    }
}
