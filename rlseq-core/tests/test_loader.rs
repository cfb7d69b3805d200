use rlseq_core::{
    BatchConfig, BatchLoader, ExperienceDataset, Trajectory, TrajectoryDataset, TrajectoryRecord,
};
use tempdir::TempDir;

fn record(id: i64, action_len: usize) -> TrajectoryRecord {
    Trajectory::new(
        vec![id; 2],
        vec![id; action_len],
        vec![0.0; action_len],
        vec![0.0; action_len],
        vec![0.0; action_len],
    )
    .unwrap()
    .into()
}

fn dataset(n: usize) -> TrajectoryDataset {
    TrajectoryDataset::new((0..n).map(|i| record(i as i64, i + 1)).collect())
}

#[test]
fn test_epoch_yields_num_batches() {
    let _ = env_logger::builder().is_test(true).try_init();

    let dataset = dataset(7);
    let config = BatchConfig::default().batch_size(3).pad_token_id(-1);
    let loader = BatchLoader::new(&dataset, &config).unwrap();

    assert_eq!(loader.num_batches(), 3);
    let batches: Vec<_> = loader.epoch().collect();
    assert_eq!(batches.len(), 3);
    for batch in &batches {
        assert_eq!(batch.len(), 3);
    }
}

#[test]
fn test_last_batch_wraps_to_first_records() {
    let dataset = dataset(4);
    let config = BatchConfig::default().batch_size(3).pad_token_id(-1);
    let loader = BatchLoader::new(&dataset, &config).unwrap();
    let batches: Vec<_> = loader.epoch().collect();

    // Second group is [3, 0, 1]; record ids show up in the first column.
    let last = &batches[1];
    assert_eq!(last.input_ids.row(0).to_vec(), vec![3, 3]);
    assert_eq!(last.input_ids.row(1).to_vec(), vec![0, 0]);
    assert_eq!(last.input_ids.row(2).to_vec(), vec![1, 1]);
}

#[test]
fn test_epochs_are_repeatable() {
    let dataset = dataset(5);
    let config = BatchConfig::default().batch_size(2);
    let loader = BatchLoader::new(&dataset, &config).unwrap();
    let first: Vec<_> = loader.epoch().collect();
    let second: Vec<_> = loader.epoch().collect();
    assert_eq!(first, second);
}

#[test]
fn test_empty_dataset_yields_no_batches() {
    let dataset = TrajectoryDataset::new(vec![]);
    assert!(dataset.is_empty());
    let loader = BatchLoader::new(&dataset, &BatchConfig::default()).unwrap();
    assert_eq!(loader.num_batches(), 0);
    assert_eq!(loader.epoch().count(), 0);
}

#[test]
fn test_dataset_access() {
    let dataset = dataset(3);
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.get(2).unwrap().input_ids(), &[2, 2]);
    assert!(dataset.get(3).is_none());
    assert_eq!(dataset.iter().count(), 3);
}

#[test]
fn test_config_yaml_round_trip() {
    let config = BatchConfig::default()
        .batch_size(16)
        .pad_token_id(50256)
        .shuffle_seed(Some(1));

    let dir = TempDir::new("rlseq").unwrap();
    let path = dir.path().join("batch.yaml");
    config.save(&path).unwrap();
    assert_eq!(BatchConfig::load(&path).unwrap(), config);
}
