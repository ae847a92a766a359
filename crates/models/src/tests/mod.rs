use serde_json::json;

use crate::{LevelData, PixelData};

#[test]
fn pixel_data_uses_mask_index_key() {
    let value = json!({
        "width": 2,
        "height": 2,
        "maskIndex": 3,
        "pixels": [{"x": 0, "y": -1, "color": "#fff"}]
    });
    let data: PixelData = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(data.mask_index, 3);
    assert_eq!(data.pixels[0].y, -1);
    assert_eq!(serde_json::to_value(&data).unwrap(), value);
}

#[test]
fn unknown_fields_are_dropped_on_reserialisation() {
    let data: PixelData = serde_json::from_value(json!({
        "width": 1,
        "height": 1,
        "maskIndex": 0,
        "pixels": [],
        "author": "someone"
    }))
    .unwrap();
    let out = serde_json::to_value(&data).unwrap();
    assert!(out.get("author").is_none());
}

#[test]
fn wrong_shape_is_rejected() {
    // missing maskIndex
    let missing = json!({"width": 1, "height": 1, "pixels": []});
    assert!(serde_json::from_value::<PixelData>(missing).is_err());

    // fractional integer
    let fractional = json!({"width": 1.5, "height": 1, "maskIndex": 0, "pixels": []});
    assert!(serde_json::from_value::<PixelData>(fractional).is_err());

    // pixel colour must be a string
    let bad_color = json!({"width": 1, "height": 1, "maskIndex": 0, "pixels": [{"x": 0, "y": 0, "color": 7}]});
    assert!(serde_json::from_value::<PixelData>(bad_color).is_err());
}

#[test]
fn level_embeds_full_sprites() {
    let level: LevelData = serde_json::from_value(json!({
        "characters": [
            {"index": 0, "name": "hero", "data": {"width": 1, "height": 1, "maskIndex": 0, "pixels": [{"x": 0, "y": 0, "color": "red"}]}},
            {"index": 0, "name": "hero", "data": {"width": 4, "height": 4, "maskIndex": 1, "pixels": []}}
        ]
    }))
    .unwrap();
    // duplicate indices and names are kept as-is
    assert_eq!(level.characters.len(), 2);
    assert_eq!(level.characters[0].data.pixels[0].color, "red");
    assert_eq!(level.characters[1].data.width, 4);
}
