//! Content building end to end: ordering, encoding, and error behavior

use base64::{Engine as _, engine::general_purpose::STANDARD};
use polyllm::{
    Attachments, ContentBuilder, ContentError, ContentPart, MessageContent,
};

use crate::common::fixtures::{FakeFetcher, path_of, temp_attachment};

fn builder(fetcher: FakeFetcher) -> ContentBuilder {
    ContentBuilder::with_fetcher(Box::new(fetcher))
}

#[test]
fn text_only_content_round_trips() {
    let content = builder(FakeFetcher::empty())
        .build(Some("Hello there"), &Attachments::default())
        .unwrap();

    assert_eq!(content.parts(), &[ContentPart::text("Hello there")]);
    match content.into_message_content() {
        Some(MessageContent::Text(text)) => assert_eq!(text, "Hello there"),
        other => panic!("expected bare string content, got {other:?}"),
    }
}

#[test]
fn empty_text_and_no_attachments_is_absent_content() {
    let fetcher = FakeFetcher::empty();
    let builder = builder(fetcher);

    for text in [None, Some("")] {
        let content = builder.build(text, &Attachments::default()).unwrap();
        assert!(content.is_empty());
        assert_eq!(content.into_wire_parts(), None);
    }
}

#[test]
fn remote_image_is_referenced_without_any_io() {
    let fetcher = FakeFetcher::empty();
    let call_log = fetcher.call_log();

    let content = builder(fetcher)
        .build(
            Some("Describe this"),
            &Attachments::default().with_image("https://ex.com/a.png"),
        )
        .unwrap();

    assert_eq!(
        content.parts(),
        &[
            ContentPart::text("Describe this"),
            ContentPart::image_url("https://ex.com/a.png"),
        ]
    );
    // The image path never touches the fetcher
    assert!(call_log.lock().unwrap().is_empty());
}

#[test]
fn local_image_bytes_survive_base64_round_trip() {
    let raw = b"\x89PNG\r\n\x1a\nfake image body";
    let file = temp_attachment(".png", raw);

    let content = builder(FakeFetcher::empty())
        .build(None, &Attachments::default().with_image(path_of(&file)))
        .unwrap();

    match &content.parts()[0] {
        ContentPart::Image { source } => {
            assert_eq!(source.media_type, "image/png");
            assert_eq!(STANDARD.decode(&source.data).unwrap(), raw.to_vec());
        }
        other => panic!("expected inline image, got {other:?}"),
    }
}

#[test]
fn local_audio_formats_follow_extensions() {
    let mp3 = temp_attachment(".mp3", b"mp3 body");
    let content = builder(FakeFetcher::empty())
        .build(None, &Attachments::default().with_audio(path_of(&mp3)))
        .unwrap();
    match &content.parts()[0] {
        ContentPart::Audio { audio } => assert_eq!(audio.format, "mp3"),
        other => panic!("expected audio part, got {other:?}"),
    }

    let bare = temp_attachment("", b"wav body");
    let content = builder(FakeFetcher::empty())
        .build(None, &Attachments::default().with_audio(path_of(&bare)))
        .unwrap();
    match &content.parts()[0] {
        ContentPart::Audio { audio } => assert_eq!(audio.format, "wav"),
        other => panic!("expected audio part, got {other:?}"),
    }
}

#[test]
fn local_wav_clip_is_inlined_as_single_part() {
    let raw = b"RIFFfake-wav-bytes";
    let file = temp_attachment(".wav", raw);

    let content = builder(FakeFetcher::empty())
        .build(None, &Attachments::default().with_audio(path_of(&file)))
        .unwrap();

    assert_eq!(content.len(), 1);
    match &content.parts()[0] {
        ContentPart::Audio { audio } => {
            assert_eq!(audio.data, STANDARD.encode(raw));
            assert_eq!(audio.format, "wav");
        }
        other => panic!("expected audio part, got {other:?}"),
    }
}

#[test]
fn remote_audio_is_downloaded_through_the_fetcher() {
    let url = "https://ex.com/media/clip.mp3";
    let content = builder(FakeFetcher::serving(url, b"remote clip"))
        .build(None, &Attachments::default().with_audio(url))
        .unwrap();

    match &content.parts()[0] {
        ContentPart::Audio { audio } => {
            assert_eq!(audio.format, "mp3");
            assert_eq!(STANDARD.decode(&audio.data).unwrap(), b"remote clip".to_vec());
        }
        other => panic!("expected audio part, got {other:?}"),
    }
}

#[test]
fn mixed_attachments_resolve_in_declaration_order() {
    let image = temp_attachment(".jpeg", b"jpeg body");
    let url = "https://ex.com/clip.wav";

    let content = builder(FakeFetcher::serving(url, b"clip"))
        .build(
            Some("both kinds"),
            &Attachments::default()
                .with_image(vec![path_of(&image), "https://ex.com/b.png".to_string()])
                .with_audio(url),
        )
        .unwrap();

    let parts = content.parts();
    assert_eq!(parts.len(), 4);
    assert!(matches!(&parts[0], ContentPart::Text { text } if text == "both kinds"));
    assert!(matches!(&parts[1], ContentPart::Image { source } if source.media_type == "image/jpeg"));
    assert_eq!(parts[2], ContentPart::image_url("https://ex.com/b.png"));
    assert!(matches!(&parts[3], ContentPart::Audio { .. }));
}

#[test]
fn missing_image_file_fails_with_read_error() {
    let err = builder(FakeFetcher::empty())
        .build(
            Some("text that would otherwise succeed"),
            &Attachments::default().with_image("/nonexistent/missing.png"),
        )
        .unwrap_err();

    match err {
        ContentError::AttachmentRead { source, .. } => {
            assert_eq!(source, "/nonexistent/missing.png");
        }
        other => panic!("expected AttachmentRead, got {other:?}"),
    }
}

#[test]
fn failed_remote_audio_fetch_fails_the_build() {
    let fetcher = FakeFetcher::empty();
    let err = builder(fetcher)
        .build(None, &Attachments::default().with_audio("https://ex.com/gone.mp3"))
        .unwrap_err();

    match err {
        ContentError::AttachmentFetch { source, detail, .. } => {
            assert_eq!(source, "https://ex.com/gone.mp3");
            assert!(detail.contains("404") || detail.contains("no fixture"));
        }
        other => panic!("expected AttachmentFetch, got {other:?}"),
    }
}
