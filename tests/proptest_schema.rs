//! Property tests for JSON round-trips over generated datasets.

use chrono::NaiveDate;
use cocoset::json::CocoJson;
use cocoset::schema::{
    Image, ImageCaptioningAnnotation, ImageCaptioningDataset, Info, ObjectDetectionAnnotation,
    ObjectDetectionCategory, ObjectDetectionDataset,
};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config
}

prop_compose! {
    fn arb_image()(
        width in 1u32..=4096,
        height in 1u32..=4096,
        file_name in "[a-z]{1,12}\\.jpg",
    ) -> Image {
        Image::new(0u64, width, height, file_name)
    }
}

prop_compose! {
    fn arb_annotation()(
        image_id in 1u64..=100,
        category_id in 1u64..=100,
        x in 0.0..1000.0f64,
        y in 0.0..1000.0f64,
        w in 0.0..1000.0f64,
        h in 0.0..1000.0f64,
        area in 0.0..1_000_000.0f64,
        iscrowd in 0u8..=1,
        polygon in prop::collection::vec(0.0..1000.0f64, 0..12),
    ) -> ObjectDetectionAnnotation {
        ObjectDetectionAnnotation::new(0u64, image_id, category_id, (x, y, w, h), area, iscrowd)
            .with_segmentation(vec![polygon])
    }
}

prop_compose! {
    fn arb_category()(
        name in "[a-z]{1,12}",
        supercategory in "[a-z]{1,12}",
    ) -> ObjectDetectionCategory {
        ObjectDetectionCategory::new(0u64, name, supercategory)
    }
}

fn arb_detection_dataset() -> impl Strategy<Value = ObjectDetectionDataset> {
    (
        prop::collection::vec(arb_image(), 1..8),
        prop::collection::vec(arb_category(), 1..8),
        prop::collection::vec(arb_annotation(), 1..16),
    )
        .prop_map(|(mut images, mut categories, mut annotations)| {
            // Sequential IDs keep the generated lists self-consistent
            // without a uniqueness filter.
            for (index, image) in images.iter_mut().enumerate() {
                image.id = (index as u64 + 1).into();
            }
            for (index, category) in categories.iter_mut().enumerate() {
                category.id = (index as u64 + 1).into();
            }
            for (index, annotation) in annotations.iter_mut().enumerate() {
                annotation.id = (index as u64 + 1).into();
            }
            ObjectDetectionDataset {
                info: Info::default(),
                images,
                licenses: Vec::new(),
                annotations,
                categories,
            }
        })
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn detection_dataset_roundtrips_exactly(dataset in arb_detection_dataset()) {
        let json = dataset.to_json().expect("serialize");
        let restored = ObjectDetectionDataset::from_json(&json).expect("parse");
        prop_assert_eq!(restored, dataset);
    }

    #[test]
    fn caption_roundtrips_preserve_arbitrary_text(
        id in 1u64..=1000,
        image_id in 1u64..=1000,
        caption in ".{0,64}",
    ) {
        let dataset = ImageCaptioningDataset {
            annotations: vec![ImageCaptioningAnnotation::new(id, image_id, caption)],
            ..Default::default()
        };
        let restored = ImageCaptioningDataset::from_json(&dataset.to_json().expect("serialize"))
            .expect("parse");
        prop_assert_eq!(restored, dataset);
    }

    #[test]
    fn valid_dates_roundtrip_to_the_same_day(
        year in 1970i32..=2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .expect("valid date")
            .and_hms_opt(0, 0, 0)
            .expect("midnight");
        let info = Info { date_created: Some(date), ..Default::default() };

        let restored = Info::from_json(&info.to_json().expect("serialize")).expect("parse");
        prop_assert_eq!(restored.date_created, Some(date));
    }
}
