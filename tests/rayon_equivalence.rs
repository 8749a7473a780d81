#![cfg(feature = "rayon")]

use postrank::{Classifier, Detector, LabelTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_detector_output(rng: &mut StdRng, rows: usize) -> Vec<f32> {
    let mut raw = Vec::with_capacity(rows * 84);
    for _ in 0..rows {
        let top = rng.random_range(0.0f32..0.7);
        let left = rng.random_range(0.0f32..0.7);
        raw.extend([top, left, top + 0.25, left + 0.25]);
        for _ in 0..80 {
            raw.push(rng.random_range(0.0f32..1.0) * rng.random_range(0.0f32..1.0));
        }
    }
    raw
}

#[test]
fn parallel_detection_batch_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(11);
    let outputs: Vec<Vec<f32>> = (0..16)
        .map(|i| random_detector_output(&mut rng, 40 + i))
        .collect();
    let views: Vec<&[f32]> = outputs.iter().map(Vec::as_slice).collect();

    let detector = Detector::coco();
    let parallel = detector.detect_batch(&views);
    assert_eq!(parallel.len(), views.len());
    for (raw, result) in views.iter().zip(parallel) {
        assert_eq!(result.unwrap(), detector.detect(raw).unwrap());
    }
}

#[test]
fn parallel_classification_batch_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(12);
    let labels: LabelTable = (0..1000).map(|i| format!("class{i}")).collect();
    let classifier = Classifier::new(labels);

    let outputs: Vec<Vec<f32>> = (0..8)
        .map(|_| (0..1000).map(|_| rng.random_range(0.0f32..1.0)).collect())
        .collect();
    let views: Vec<&[f32]> = outputs.iter().map(Vec::as_slice).collect();

    let parallel = classifier.classify_batch(&views);
    for (scores, result) in views.iter().zip(parallel) {
        assert_eq!(result.unwrap(), classifier.classify(scores).unwrap());
    }
}
