use dynjson::Document;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct VideoMetadata {
    creator: String,
    format: String,
}

const DATA: &[u8] = br#"{
    "videos": [
        {
            "title": "My video!",
            "tags": ["drama", "romantic"],
            "seconds": 513,
            "metadata": null
        },
        {
            "title": "Another one!",
            "tags": ["comedy"],
            "seconds": 123,
            "metadata": {
                "creator": "benjamin",
                "format": "mp4"
            }
        }
    ]
}"#;

#[test]
fn test_video_catalog_walkthrough() {
    let content = Document::from_slice(DATA).unwrap();

    let videos = content.get_object_array(&["videos"]).unwrap();
    assert_eq!(videos.len(), 2);

    let first = &videos[0];
    assert_eq!(first.get_string(&["title"]).unwrap(), "My video!");
    assert_eq!(
        first.get_string_array(&["tags"]).unwrap(),
        vec!["drama", "romantic"]
    );
    assert_eq!(first.get_number(&["seconds"]).unwrap(), 513.0);
    assert!(!first.is_valid(&["metadata"]));

    let second = &videos[1];
    assert_eq!(second.get_string(&["title"]).unwrap(), "Another one!");
    assert_eq!(second.get_string_array(&["tags"]).unwrap(), vec!["comedy"]);
    assert_eq!(second.get_number(&["seconds"]).unwrap(), 123.0);
    assert!(second.is_valid(&["metadata"]));

    let metadata: VideoMetadata = second
        .get_object(&["metadata"])
        .unwrap()
        .decode_into()
        .unwrap();
    assert_eq!(
        metadata,
        VideoMetadata {
            creator: "benjamin".to_string(),
            format: "mp4".to_string(),
        }
    );
}

#[test]
fn test_metadata_guarded_by_is_valid() {
    let content = Document::from_slice(DATA).unwrap();

    let mut decoded = Vec::new();
    for video in content.get_object_array(&["videos"]).unwrap() {
        if video.is_valid(&["metadata"]) {
            let metadata: VideoMetadata =
                video.get_object(&["metadata"]).unwrap().decode_into().unwrap();
            decoded.push(metadata);
        }
    }

    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].creator, "benjamin");
}
