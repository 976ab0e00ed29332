use criterion::{black_box, criterion_group, criterion_main, Criterion};
use exif_view::format::{format_key, stringify_value};
use exif_view::{extract_with, FormattedMetadata, ImageProperties, JsonDecoder, RawValue};

const TAG_TREE: &str = r#"{
    "Image": {"Make": "Canon", "Model": "Canon EOS 5D Mark IV", "XResolution": 72, "YResolution": 72},
    "Photo": {
        "ExposureTime": 0.004,
        "FNumber": 2.8,
        "ISOSpeedRatings": 100,
        "DateTimeOriginal": "2024:06:01 18:42:10",
        "ComponentsConfiguration": {"type": "Buffer", "data": [1, 2, 3, 0]},
        "UserComment": {"type": "Buffer", "data": [65, 83, 67, 73, 73, 0, 0, 0, 104, 105]}
    },
    "GPSInfo": {"GPSLatitudeRef": "N", "GPSLatitude": [52, 22, 14.5], "GPSAltitude": 12.5}
}"#;

fn bench_formatting(c: &mut Criterion) {
    c.bench_function("format_key", |b| {
        b.iter(|| format_key(black_box("GPSDestBearingRef")))
    });

    let nested = RawValue::Sequence(vec![
        RawValue::Sequence(vec![52.0.into(), 22.0.into(), 14.5.into()]),
        RawValue::Bytes(b"hello\x00world".to_vec()),
        RawValue::from("text"),
    ]);
    c.bench_function("stringify_value nested", |b| {
        b.iter(|| stringify_value(black_box("key"), black_box(&nested)))
    });
}

fn bench_extract(c: &mut Criterion) {
    let properties = ImageProperties {
        format: Some("jpeg".to_string()),
        width: Some(6720),
        height: Some(4480),
    };

    c.bench_function("extract json tag tree", |b| {
        b.iter(|| {
            extract_with(
                &JsonDecoder,
                "IMG_0001.jpg",
                black_box(8_345_112),
                &properties,
                Some(black_box(TAG_TREE.as_bytes())),
            )
        })
    });

    let metadata = extract_with(
        &JsonDecoder,
        "IMG_0001.jpg",
        8_345_112,
        &properties,
        Some(TAG_TREE.as_bytes()),
    );
    c.bench_function("json dump", |b| {
        b.iter(|| FormattedMetadata::new(black_box(&metadata)).to_json_pretty())
    });
}

criterion_group!(benches, bench_formatting, bench_extract);
criterion_main!(benches);
