//! Benchmark dataset loading
//!
//! Reads the per-configuration timing summary CSVs produced by the benchmark
//! suite and assembles them into per-mode chart series. File names encode the
//! run configuration; each file holds a header row and a single data row of
//! six comma-separated floating-point values.

use crate::{
    error::{AppError, Result},
    models::{ModeDataset, PhaseTimings},
    types::{ProtocolMode, RunConfig, BITSIZES},
};
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};

/// Number of CSV fields in one timing summary row
const TIMING_FIELD_COUNT: usize = 6;

/// File name for one run's timing summary, e.g.
/// `times_dealers_2_guards_3_bitsize_512_mode_TDRA2.csv`
pub fn data_file_name(config: &RunConfig, bitsize: u32, mode: ProtocolMode) -> String {
    format!(
        "times_dealers_{}_guards_{}_bitsize_{}_mode_{}.csv",
        config.dealers, config.guards, bitsize, mode
    )
}

/// Full path of one run's timing summary inside the data directory
pub fn data_file_path(data_dir: &Path, config: &RunConfig, bitsize: u32, mode: ProtocolMode) -> PathBuf {
    data_dir.join(data_file_name(config, bitsize, mode))
}

/// Number of CSV files expected per mode
pub fn expected_file_count() -> usize {
    BITSIZES.len() * crate::defaults::DEFAULT_GUARD_COUNTS.len()
}

/// Expected files for a mode that are absent from the data directory
pub fn missing_files(data_dir: &Path, mode: ProtocolMode) -> Vec<PathBuf> {
    let mut missing = Vec::new();
    for bitsize in BITSIZES {
        for config in mode.run_configs() {
            let path = data_file_path(data_dir, &config, bitsize, mode);
            if !path.is_file() {
                missing.push(path);
            }
        }
    }
    missing
}

/// Read one timing summary file: skip the header row, parse the first data
/// row positionally as six floating-point fields
pub fn read_phase_timings(path: &Path) -> Result<PhaseTimings> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::csv(format!("{}: {}", path.display(), e)))?;

    let record = reader
        .records()
        .next()
        .ok_or_else(|| AppError::dataset(format!("{}: no data row after header", path.display())))?
        .map_err(|e| AppError::csv(format!("{}: {}", path.display(), e)))?;

    if record.len() < TIMING_FIELD_COUNT {
        return Err(AppError::dataset(format!(
            "{}: expected {} fields, found {}",
            path.display(),
            TIMING_FIELD_COUNT,
            record.len()
        )));
    }

    let field = |idx: usize| -> Result<f64> {
        record[idx].trim().parse::<f64>().map_err(|e| {
            AppError::parse(format!(
                "{}: field {} ('{}'): {}",
                path.display(),
                idx,
                &record[idx],
                e
            ))
        })
    };

    Ok(PhaseTimings {
        token_mean_ms: field(0)?,
        token_std_ms: field(1)?,
        access_mean_ms: field(2)?,
        access_std_ms: field(3)?,
        total_mean_ms: field(4)?,
        total_std_ms: field(5)?,
    })
}

/// Load the complete dataset for one protocol mode: for each bit size, the
/// four run configurations in their fixed order. Any missing or malformed
/// file aborts the load.
pub fn load_mode_dataset(data_dir: &Path, mode: ProtocolMode) -> Result<ModeDataset> {
    let mut dataset = ModeDataset::new(mode);

    for bitsize in BITSIZES {
        for config in mode.run_configs() {
            let path = data_file_path(data_dir, &config, bitsize, mode);
            if !path.is_file() {
                return Err(AppError::dataset(format!(
                    "Missing timing file {}",
                    path.display()
                )));
            }
            let timings = read_phase_timings(&path)?;
            dataset
                .series
                .get_mut(&bitsize)
                .ok_or_else(|| {
                    AppError::internal(format!("no series preallocated for bitsize {}", bitsize))
                })?
                .push(&config, &timings);
        }
    }

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_timing_file(dir: &Path, name: &str, row: &str) {
        let content = format!("token,token_std,access,access_std,total,total_std\n{}\n", row);
        fs::write(dir.join(name), content).unwrap();
    }

    fn populate_mode(dir: &Path, mode: ProtocolMode) {
        for bitsize in BITSIZES {
            for config in mode.run_configs() {
                write_timing_file(
                    dir,
                    &data_file_name(&config, bitsize, mode),
                    "120.0,4.5,80.0,3.0,250.0,6.0",
                );
            }
        }
    }

    #[test]
    fn test_file_name_convention() {
        assert_eq!(
            data_file_name(&RunConfig::new(2, 3), 512, ProtocolMode::Tdra2),
            "times_dealers_2_guards_3_bitsize_512_mode_TDRA2.csv"
        );
        assert_eq!(
            data_file_name(&RunConfig::new(1, 8), 1024, ProtocolMode::Tra2),
            "times_dealers_1_guards_8_bitsize_1024_mode_TRA2.csv"
        );
    }

    #[test]
    fn test_expected_file_count() {
        assert_eq!(expected_file_count(), 8);
    }

    #[test]
    fn test_read_phase_timings() {
        let dir = TempDir::new().unwrap();
        write_timing_file(dir.path(), "t.csv", "120.0,4.5,80.0,3.0,250.0,6.0");
        let timings = read_phase_timings(&dir.path().join("t.csv")).unwrap();
        assert_eq!(timings.token_mean_ms, 120.0);
        assert_eq!(timings.access_std_ms, 3.0);
        assert_eq!(timings.total_mean_ms, 250.0);
        assert_eq!(timings.communication_mean_ms(), 50.0);
    }

    #[test]
    fn test_read_rejects_short_row() {
        let dir = TempDir::new().unwrap();
        write_timing_file(dir.path(), "short.csv", "1.0,2.0,3.0");
        let err = read_phase_timings(&dir.path().join("short.csv")).unwrap_err();
        assert_eq!(err.category(), "DATASET");
    }

    #[test]
    fn test_read_rejects_non_numeric_field() {
        let dir = TempDir::new().unwrap();
        write_timing_file(dir.path(), "bad.csv", "1.0,2.0,x,4.0,5.0,6.0");
        let err = read_phase_timings(&dir.path().join("bad.csv")).unwrap_err();
        assert_eq!(err.category(), "PARSE");
    }

    #[test]
    fn test_read_rejects_header_only_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("empty.csv"), "a,b,c,d,e,f\n").unwrap();
        let err = read_phase_timings(&dir.path().join("empty.csv")).unwrap_err();
        assert_eq!(err.category(), "DATASET");
    }

    #[test]
    fn test_load_mode_dataset_fixed_order() {
        let dir = TempDir::new().unwrap();
        populate_mode(dir.path(), ProtocolMode::Tdra2);

        let dataset = load_mode_dataset(dir.path(), ProtocolMode::Tdra2).unwrap();
        assert_eq!(dataset.bar_count(), 4);
        assert_eq!(
            dataset.labels(),
            &["2D / 3G", "3D / 5G", "4D / 6G", "5D / 8G"]
        );

        // Both bitsize series carry the same bar count and order
        let s512 = dataset.series_for(512).unwrap();
        let s1024 = dataset.series_for(1024).unwrap();
        assert_eq!(s512.len(), s1024.len());
        assert_eq!(s512.labels, s1024.labels);
    }

    #[test]
    fn test_load_tra2_uses_single_dealer_files() {
        let dir = TempDir::new().unwrap();
        populate_mode(dir.path(), ProtocolMode::Tra2);

        let dataset = load_mode_dataset(dir.path(), ProtocolMode::Tra2).unwrap();
        assert_eq!(
            dataset.labels(),
            &["1D / 3G", "1D / 5G", "1D / 6G", "1D / 8G"]
        );
    }

    #[test]
    fn test_load_aborts_on_missing_file() {
        let dir = TempDir::new().unwrap();
        populate_mode(dir.path(), ProtocolMode::Ara2);
        // Remove one file from the grid
        fs::remove_file(dir.path().join(data_file_name(
            &RunConfig::new(4, 6),
            1024,
            ProtocolMode::Ara2,
        )))
        .unwrap();

        let err = load_mode_dataset(dir.path(), ProtocolMode::Ara2).unwrap_err();
        assert_eq!(err.category(), "DATASET");
        assert!(err.to_string().contains("bitsize_1024_mode_ARA2"));
    }

    #[test]
    fn test_missing_files_report() {
        let dir = TempDir::new().unwrap();
        assert_eq!(missing_files(dir.path(), ProtocolMode::Tra2).len(), 8);
        populate_mode(dir.path(), ProtocolMode::Tra2);
        assert!(missing_files(dir.path(), ProtocolMode::Tra2).is_empty());
    }

    proptest! {
        #[test]
        fn prop_file_name_is_deterministic(d in 1u32..100, g in 1u32..100, b in prop::sample::select(vec![512u32, 1024])) {
            let config = RunConfig::new(d, g);
            let a = data_file_name(&config, b, ProtocolMode::Ara2);
            let b_name = data_file_name(&config, b, ProtocolMode::Ara2);
            prop_assert_eq!(&a, &b_name);
            prop_assert!(a.starts_with("times_dealers_"));
            prop_assert!(a.ends_with("_mode_ARA2.csv"));
        }
    }
}
