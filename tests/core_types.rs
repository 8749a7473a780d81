use postrank::{BoundingBox, BoxLayout, PixelRect, PostRankError, ScoreBuffer, BOX_COORDS};

#[test]
fn score_buffer_rejects_partial_rows() {
    let data = [0.0f32; 10];

    let err = ScoreBuffer::detections(&data, 6).err().unwrap();
    assert_eq!(
        err,
        PostRankError::InvalidInputShape {
            len: 10,
            row_width: 6,
            reason: "buffer length is not a multiple of the row width",
        }
    );
}

#[test]
fn score_buffer_rejects_rows_without_classes() {
    let data = [0.0f32; 8];

    let err = ScoreBuffer::detections(&data, BOX_COORDS).err().unwrap();
    assert!(matches!(
        err,
        PostRankError::InvalidInputShape { row_width: 4, .. }
    ));
}

#[test]
fn score_buffer_exposes_rows() {
    let data: Vec<f32> = (0..12).map(|v| v as f32).collect();
    let view = ScoreBuffer::detections(&data, 6).unwrap();
    assert_eq!(view.num_rows(), 2);
    assert_eq!(view.num_classes(), 2);
    assert_eq!(view.row(0).unwrap(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(view.as_slice().len(), 12);
}

#[test]
fn empty_detection_buffer_has_no_rows() {
    let view = ScoreBuffer::detections(&[], 84).unwrap();
    assert_eq!(view.num_rows(), 0);
    assert_eq!(view.rows().count(), 0);
}

#[test]
fn bounding_box_enforces_ordering() {
    assert!(BoundingBox::new(0.1, 0.1, 0.5, 0.5).is_ok());

    let err = BoundingBox::new(0.5, 0.1, 0.5, 0.6).err().unwrap();
    assert_eq!(
        err,
        PostRankError::GeometryInvariantViolation {
            reason: "box top must be above bottom",
            value: 0.0,
        }
    );
}

#[test]
fn box_layouts_agree_on_the_same_region() {
    let a = BoxLayout::TopLeftBottomRight.read([0.1, 0.2, 0.6, 0.8]);
    let b = BoxLayout::LeftTopRightBottom.read([0.2, 0.1, 0.8, 0.6]);
    assert_eq!(a, b);
}

#[test]
fn pixel_projection_uses_image_size() {
    let bbox = BoundingBox::new(0.125, 0.25, 0.625, 0.75).unwrap();
    let rect = bbox.to_pixels(100, 64);
    assert_eq!(
        rect,
        PixelRect {
            x: 25,
            y: 8,
            width: 50,
            height: 32,
        }
    );
}

#[test]
fn errors_render_readable_messages() {
    let err = PostRankError::OutOfRange {
        name: "top",
        value: 1500.0,
        min: 0.0,
        max: 1000.0,
    };
    assert_eq!(err.to_string(), "top out of range: 1500 not in [0, 1000]");
}
