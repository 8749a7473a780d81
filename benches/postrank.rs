use criterion::{criterion_group, criterion_main, Criterion};
use postrank::{Classifier, ClassifyConfig, Detector, LabelTable};
use std::hint::black_box;

/// YOLOv4 at 416x416 emits 10647 candidate rows.
const YOLO_ROWS: usize = 10_647;

fn make_detector_output(rows: usize) -> Vec<f32> {
    let mut raw = Vec::with_capacity(rows * 84);
    for i in 0..rows {
        let top = ((i * 13) % 600) as f32 / 1000.0;
        let left = ((i * 29) % 600) as f32 / 1000.0;
        raw.extend([top, left, top + 0.3, left + 0.3]);
        for class in 0..80 {
            let value = ((i * 7 + class * 31) % 1000) as f32 / 1000.0;
            raw.push(value * value * value);
        }
    }
    raw
}

fn make_classifier_output(len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| ((i * 7919) % len) as f32 / len as f32)
        .collect()
}

fn bench_postrank(c: &mut Criterion) {
    let detector = Detector::coco();
    let raw = make_detector_output(YOLO_ROWS);
    c.bench_function("detect_yolo_416", |b| {
        b.iter(|| black_box(detector.detect(black_box(&raw)).unwrap()));
    });

    let batch: Vec<Vec<f32>> = (0..8).map(|_| raw.clone()).collect();
    let views: Vec<&[f32]> = batch.iter().map(Vec::as_slice).collect();
    c.bench_function("detect_yolo_416_batch8", |b| {
        b.iter(|| black_box(detector.detect_batch(black_box(&views))));
    });

    let labels: LabelTable = (0..1000).map(|i| format!("class{i}")).collect();
    let classifier = Classifier::new(labels)
        .with_config(ClassifyConfig { top: 5 })
        .unwrap();
    let scores = make_classifier_output(1000);
    c.bench_function("classify_top5_of_1000", |b| {
        b.iter(|| black_box(classifier.classify(black_box(&scores)).unwrap()));
    });
}

criterion_group!(benches, bench_postrank);
criterion_main!(benches);
