use rlseq_core::{collate, Trajectory, TrajectoryRecord, VisionTrajectory};

const PAD: i64 = 99;

fn text(input_ids: Vec<i64>, actions: Vec<i64>) -> TrajectoryRecord {
    let n = actions.len();
    Trajectory::new(
        input_ids,
        actions,
        vec![-0.5; n],
        vec![0.25; n],
        vec![1.0; n],
    )
    .unwrap()
    .into()
}

fn vision(input_ids: Vec<i64>, actions: Vec<i64>, image_ids: Vec<i64>) -> TrajectoryRecord {
    let n = actions.len();
    VisionTrajectory::new(
        input_ids,
        actions,
        vec![-0.5; n],
        vec![0.25; n],
        vec![1.0; n],
        image_ids,
    )
    .unwrap()
    .into()
}

#[test]
fn test_shapes_and_pad_positions() {
    let records = vec![text(vec![1, 2], vec![10, 11, 12]), text(vec![3], vec![20, 21, 22, 23, 24])];
    let batch = collate(&records, PAD).unwrap();

    // Each field is padded to its own maximum length.
    assert_eq!(batch.input_ids.dim(), (2, 2));
    assert_eq!(batch.actions.dim(), (2, 5));
    assert_eq!(batch.logprobs.dim(), (2, 5));
    assert_eq!(batch.values.dim(), (2, 5));
    assert_eq!(batch.rewards.dim(), (2, 5));
    assert!(batch.image_ids.is_none());

    assert_eq!(batch.actions.row(0).to_vec(), vec![10, 11, 12, PAD, PAD]);
    assert_eq!(batch.actions.row(1).to_vec(), vec![20, 21, 22, 23, 24]);
    assert_eq!(batch.input_ids.row(1).to_vec(), vec![3, PAD]);
}

#[test]
fn test_float_fields_zero_padded() {
    let records = vec![text(vec![1], vec![10]), text(vec![2], vec![20, 21, 22])];
    let batch = collate(&records, PAD).unwrap();

    assert_eq!(batch.logprobs.row(0).to_vec(), vec![-0.5, 0.0, 0.0]);
    assert_eq!(batch.values.row(0).to_vec(), vec![0.25, 0.0, 0.0]);
    assert_eq!(batch.rewards.row(0).to_vec(), vec![1.0, 0.0, 0.0]);
}

#[test]
fn test_text_only_batch_has_no_image_ids() {
    let records = vec![text(vec![1], vec![2]), text(vec![3], vec![4])];
    assert!(collate(&records, PAD).unwrap().image_ids.is_none());
}

#[test]
fn test_vision_batch_includes_image_ids() {
    let records = vec![
        vision(vec![1], vec![2], vec![7, 8, 9]),
        vision(vec![3], vec![4], vec![5]),
    ];
    let image_ids = collate(&records, PAD).unwrap().image_ids.unwrap();
    assert_eq!(image_ids.dim(), (2, 3));
    assert_eq!(image_ids.row(0).to_vec(), vec![7, 8, 9]);
    assert_eq!(image_ids.row(1).to_vec(), vec![5, 0, 0]);
}

#[test]
fn test_mixed_batch_pads_text_records_with_zeros() {
    let records = vec![text(vec![1], vec![2]), vision(vec![3], vec![4], vec![7, 8])];
    let image_ids = collate(&records, PAD).unwrap().image_ids.unwrap();

    // A text record contributes a zero-length sequence, so its row is
    // entirely the fill value.
    assert_eq!(image_ids.dim(), (2, 2));
    assert_eq!(image_ids.row(0).to_vec(), vec![0, 0]);
    assert_eq!(image_ids.row(1).to_vec(), vec![7, 8]);
}

#[test]
fn test_record_order_preserved() {
    let records = vec![text(vec![5], vec![50]), text(vec![6], vec![60])];
    let batch = collate(&records, PAD).unwrap();
    assert_eq!(batch.input_ids.row(0).to_vec(), vec![5]);
    assert_eq!(batch.input_ids.row(1).to_vec(), vec![6]);
}

#[test]
fn test_collation_is_idempotent() {
    let records = vec![
        text(vec![1, 2, 3], vec![10, 11]),
        vision(vec![4], vec![20, 21, 22], vec![30]),
    ];
    let a = collate(&records, PAD).unwrap();
    let b = collate(&records, PAD).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_empty_batch_rejected() {
    assert!(collate(&[], PAD).is_err());
}

#[test]
fn test_length_mismatch_rejected_at_construction() {
    let result = Trajectory::new(vec![1], vec![10, 11], vec![-0.5], vec![0.0, 0.0], vec![1.0, 1.0]);
    assert!(result.is_err());

    let result = VisionTrajectory::new(
        vec![1],
        vec![10],
        vec![-0.5],
        vec![0.0],
        vec![1.0, 1.0],
        vec![7],
    );
    assert!(result.is_err());
}
