// src/simulation/csv.rs

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::simulation::SimulationCurves;

/// CSV ファイルを作成し、全曲線を書き込む
pub fn save_curves_csv(path: &Path, curves: &SimulationCurves) -> Result<(), Box<dyn Error>> {
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_curves_csv(&mut writer, curves)?;
    writer.flush()?;
    Ok(())
}

/// ヘッダと SNR 点ごとの行を書き込む
pub fn write_curves_csv<W: Write>(
    writer: &mut W,
    curves: &SimulationCurves,
) -> Result<(), std::io::Error> {
    write_csv_header(writer, curves)?;
    for index in 0..curves.snr_db.len() {
        writer.write_all(create_csv_row(curves, index).as_bytes())?;
    }
    Ok(())
}

/// CSV ヘッダの出力（SNR 列、6 平均、6 標準誤差の順）
pub fn write_csv_header<W: Write>(
    writer: &mut W,
    curves: &SimulationCurves,
) -> Result<(), std::io::Error> {
    let mut header = String::from("snr_db,snr_linear");

    for (name, _) in curves.named() {
        header.push_str(&format!(",{}", name));
    }
    for (name, _) in curves.named() {
        header.push_str(&format!(",{}_stderr", name));
    }

    header.push('\n');
    writer.write_all(header.as_bytes())?;
    Ok(())
}

/// SNR 点 `index` の CSV 行の作成
pub fn create_csv_row(curves: &SimulationCurves, index: usize) -> String {
    let mut row = format!("{},{}", curves.snr_db[index], curves.snr_linear[index]);

    for (_, curve) in curves.named() {
        row.push_str(&format!(",{}", curve.mean[index]));
    }
    for (_, curve) in curves.named() {
        row.push_str(&format!(",{}", curve.standard_error[index]));
    }

    row.push('\n');
    row
}
