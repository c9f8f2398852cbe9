// src/config/scenario.rs

use serde::Deserialize;

use crate::math::ConfigError;

/// 実行設定（試行回数、SNR 点、乱数シード、ワーカー数）
#[derive(Debug, Deserialize, Clone)]
pub struct Scenario {
    pub trials: usize,          // モンテカルロ試行回数
    pub snr_db: SnrSweep,       // 送信 SNR（dB）
    pub seed: Option<u64>,      // 省略時は実行ごとに生成
    pub workers: Option<usize>, // 省略時は rayon の既定値
}

/// 範囲指定から展開できる SNR 点数の上限
pub const MAX_SWEEP_POINTS: usize = 100_000;

/// SNR 動作点（dB）。列挙または等差範囲で指定する
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum SnrSweep {
    Values(Vec<f64>),
    Range {
        start_db: f64,
        stop_db: f64,
        step_db: f64,
    },
}

/// コマンドラインから与えるシナリオの上書き値
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScenarioOverrides {
    pub seed: Option<u64>,
    pub trials: Option<usize>,
    pub workers: Option<usize>,
}

impl ScenarioOverrides {
    /// 指定された値だけをシナリオに書き込む（検証は読み込み側で行う）
    pub fn apply(&self, scenario: &mut Scenario) {
        if let Some(seed) = self.seed {
            scenario.seed = Some(seed);
        }
        if let Some(trials) = self.trials {
            scenario.trials = trials;
        }
        if let Some(workers) = self.workers {
            scenario.workers = Some(workers);
        }
    }
}

impl SnrSweep {
    /// スイープを dB 値の列に展開する
    ///
    /// `stop_db` が刻みに一致する場合は含める。点数が `MAX_SWEEP_POINTS` を
    /// 超える範囲は展開せずにエラーとする。
    pub fn to_db(&self) -> Result<Vec<f64>, ConfigError> {
        match self {
            SnrSweep::Values(values) => Ok(values.clone()),
            SnrSweep::Range {
                start_db,
                stop_db,
                step_db,
            } => {
                for value in [*start_db, *stop_db, *step_db] {
                    if !value.is_finite() {
                        return Err(ConfigError::NonFiniteSweepValue(value));
                    }
                }
                if *step_db <= 0.0 {
                    return Err(ConfigError::NonPositiveSweepStep(*step_db));
                }
                if stop_db < start_db {
                    return Err(ConfigError::EmptySweep);
                }
                // 点数は f64 のまま上限と比較する
                let points = ((stop_db - start_db) / step_db + 1e-9).floor() + 1.0;
                if !(points <= MAX_SWEEP_POINTS as f64) {
                    return Err(ConfigError::SweepTooLarge {
                        points,
                        limit: MAX_SWEEP_POINTS,
                    });
                }
                let count = points as usize;
                Ok((0..count)
                    .map(|i| start_db + i as f64 * step_db)
                    .collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_includes_stop() {
        let sweep = SnrSweep::Range {
            start_db: 10.0,
            stop_db: 60.0,
            step_db: 2.0,
        };
        let db = sweep.to_db().unwrap();
        assert_eq!(db.len(), 26);
        assert_eq!(db[0], 10.0);
        assert_eq!(db[25], 60.0);
    }

    #[test]
    fn test_range_stop_between_steps() {
        let sweep = SnrSweep::Range {
            start_db: 0.0,
            stop_db: 5.0,
            step_db: 2.0,
        };
        assert_eq!(sweep.to_db().unwrap(), vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_range_rejects_bad_step() {
        let sweep = SnrSweep::Range {
            start_db: 0.0,
            stop_db: 5.0,
            step_db: 0.0,
        };
        assert_eq!(sweep.to_db(), Err(ConfigError::NonPositiveSweepStep(0.0)));
    }

    #[test]
    fn test_range_rejects_overflowing_point_count() {
        let sweep = SnrSweep::Range {
            start_db: 0.0,
            stop_db: 1e300,
            step_db: 1e-300,
        };
        assert!(matches!(
            sweep.to_db(),
            Err(ConfigError::SweepTooLarge {
                limit: MAX_SWEEP_POINTS,
                ..
            })
        ));
    }

    #[test]
    fn test_range_rejects_too_fine_step() {
        let sweep = SnrSweep::Range {
            start_db: 10.0,
            stop_db: 60.0,
            step_db: 1e-9,
        };
        match sweep.to_db() {
            Err(ConfigError::SweepTooLarge { points, .. }) => assert!(points > 1e10),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_range_at_point_limit() {
        let sweep = SnrSweep::Range {
            start_db: 0.0,
            stop_db: (MAX_SWEEP_POINTS - 1) as f64,
            step_db: 1.0,
        };
        assert_eq!(sweep.to_db().unwrap().len(), MAX_SWEEP_POINTS);

        let over = SnrSweep::Range {
            start_db: 0.0,
            stop_db: MAX_SWEEP_POINTS as f64,
            step_db: 1.0,
        };
        assert!(matches!(over.to_db(), Err(ConfigError::SweepTooLarge { .. })));
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let mut scenario: Scenario =
            serde_yaml::from_str("trials: 10\nseed: 3\nsnr_db: [0.0]\n").unwrap();
        ScenarioOverrides {
            trials: Some(500),
            workers: Some(4),
            ..Default::default()
        }
        .apply(&mut scenario);
        assert_eq!(scenario.trials, 500);
        assert_eq!(scenario.seed, Some(3));
        assert_eq!(scenario.workers, Some(4));

        ScenarioOverrides::default().apply(&mut scenario);
        assert_eq!(scenario.trials, 500);
    }

    #[test]
    fn test_deserialize_both_forms() {
        let listed: Scenario =
            serde_yaml::from_str("trials: 10\nsnr_db: [0.0, 3.0, 6.0]\n").unwrap();
        assert_eq!(listed.snr_db, SnrSweep::Values(vec![0.0, 3.0, 6.0]));
        assert_eq!(listed.seed, None);

        let ranged: Scenario = serde_yaml::from_str(
            "trials: 10\nseed: 7\nworkers: 2\nsnr_db: { start_db: 10, stop_db: 20, step_db: 5 }\n",
        )
        .unwrap();
        assert_eq!(ranged.snr_db.to_db().unwrap(), vec![10.0, 15.0, 20.0]);
        assert_eq!(ranged.seed, Some(7));
        assert_eq!(ranged.workers, Some(2));
    }
}
