use lifelines::core::{StorySequence, Theme};

#[test]
fn backend_payload_deserializes_into_the_data_model() {
    let payload = r#"{
        "events": [
            {
                "year": 2018,
                "event": "They met at a summer fair.",
                "distance": 3,
                "emotion_score": 10,
                "phase": "beginning"
            },
            {
                "year": 2021,
                "event": "Jobs pulled them to different cities.",
                "distance": 60,
                "emotion_score": 5
            },
            {
                "year": 2024,
                "event": "They found their way back.",
                "distance": 0,
                "emotion_score": 9,
                "phase": "reunion"
            }
        ],
        "is_special": true,
        "theme": "destiny"
    }"#;

    let story: StorySequence = serde_json::from_str(payload).expect("payload parses");
    assert_eq!(story.len(), 3);
    assert!(story.is_special);
    assert_eq!(story.theme, Theme::Destiny);

    let first = &story.events[0];
    assert_eq!(first.year, 2018);
    assert_eq!(first.text, "They met at a summer fair.");
    assert_eq!(first.distance, 3.0);
    assert_eq!(first.emotion_score, 10.0);
    assert_eq!(first.phase.as_deref(), Some("beginning"));

    assert_eq!(story.events[1].phase, None);
    assert_eq!(story.last_event().expect("non-empty").distance, 0.0);
}

#[test]
fn default_theme_parses_lowercase() {
    let payload = r#"{ "events": [], "is_special": false, "theme": "default" }"#;
    let story: StorySequence = serde_json::from_str(payload).expect("payload parses");
    assert_eq!(story.theme, Theme::Default);
    assert!(story.is_empty());
}

#[test]
fn round_trip_preserves_wire_field_names() {
    let payload = r#"{"events":[{"year":2020,"event":"x","distance":1.0,"emotion_score":2.0}],"is_special":false,"theme":"default"}"#;
    let story: StorySequence = serde_json::from_str(payload).expect("payload parses");
    let serialized = serde_json::to_string(&story).expect("serializes");
    assert_eq!(serialized, payload);
}

#[test]
fn out_of_range_values_are_admitted_and_clamped_at_use() {
    let payload = r#"{
        "events": [
            { "year": 2020, "event": "x", "distance": 150, "emotion_score": -2 }
        ],
        "is_special": false,
        "theme": "default"
    }"#;
    let story: StorySequence = serde_json::from_str(payload).expect("payload parses");
    let event = &story.events[0];
    assert!(event.is_out_of_range());
    assert_eq!(event.clamped_distance(), 100.0);
    assert_eq!(event.clamped_emotion_score(), 0.0);
}
