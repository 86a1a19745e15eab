//! Built content through the per-provider wire mappings

use base64::{Engine as _, engine::general_purpose::STANDARD};
use polyllm::core::providers::anthropic::{AnthropicContentBlock, to_anthropic_blocks};
use polyllm::core::providers::openai::{OpenAIContentPart, to_openai_content, to_openai_part};
use polyllm::{Attachments, ClientError, ContentBuilder, user_message_with_content};

use crate::common::fixtures::{FakeFetcher, path_of, temp_attachment};

fn builder() -> ContentBuilder {
    ContentBuilder::with_fetcher(Box::new(FakeFetcher::empty()))
}

#[test]
fn text_only_content_collapses_for_openai() {
    let content = builder()
        .build(Some("just text"), &Attachments::default())
        .unwrap();

    let value = to_openai_content(content).unwrap().unwrap();
    assert_eq!(value, serde_json::json!("just text"));
}

#[test]
fn empty_content_is_absent_for_both_families() {
    let content = builder().build(None, &Attachments::default()).unwrap();
    assert!(to_openai_content(content.clone()).unwrap().is_none());
    assert!(to_anthropic_blocks(content).unwrap().is_none());
}

#[test]
fn local_image_maps_to_openai_data_url() {
    let raw = b"jpeg-ish bytes";
    let file = temp_attachment(".jpeg", raw);

    let content = builder()
        .build(None, &Attachments::default().with_image(path_of(&file)))
        .unwrap();

    let parts = content.into_wire_parts().unwrap();
    let mapped = to_openai_part(parts.into_iter().next().unwrap()).unwrap();
    match mapped {
        OpenAIContentPart::ImageUrl { image_url } => {
            let expected = format!("data:image/jpeg;base64,{}", STANDARD.encode(raw));
            assert_eq!(image_url.url, expected);
        }
        other => panic!("expected image_url part, got {other:?}"),
    }
}

#[test]
fn local_image_maps_to_anthropic_base64_block() {
    let raw = b"png-ish bytes";
    let file = temp_attachment(".png", raw);

    let content = builder()
        .build(Some("look"), &Attachments::default().with_image(path_of(&file)))
        .unwrap();

    let blocks = to_anthropic_blocks(content).unwrap().unwrap();
    assert_eq!(blocks.len(), 2);
    match &blocks[1] {
        AnthropicContentBlock::Image { source } => {
            assert_eq!(source.source_type, "base64");
            assert_eq!(source.media_type, "image/png");
            assert_eq!(STANDARD.decode(&source.data).unwrap(), raw.to_vec());
        }
        other => panic!("expected image block, got {other:?}"),
    }
}

#[test]
fn remote_image_reference_is_rejected_by_anthropic_mapping() {
    let content = builder()
        .build(
            None,
            &Attachments::default().with_image("https://ex.com/a.png"),
        )
        .unwrap();

    let err = to_anthropic_blocks(content).unwrap_err();
    assert!(matches!(err, ClientError::UnsupportedContent { provider: "anthropic", .. }));
}

#[test]
fn audio_maps_to_openai_input_audio() {
    let raw = b"wav bytes";
    let file = temp_attachment(".wav", raw);

    let content = builder()
        .build(None, &Attachments::default().with_audio(path_of(&file)))
        .unwrap();

    let parts = content.into_wire_parts().unwrap();
    let json =
        serde_json::to_value(to_openai_part(parts.into_iter().next().unwrap()).unwrap()).unwrap();
    assert_eq!(json["type"], "input_audio");
    assert_eq!(json["input_audio"]["format"], "wav");
    assert_eq!(
        STANDARD
            .decode(json["input_audio"]["data"].as_str().unwrap())
            .unwrap(),
        raw.to_vec()
    );
}

#[test]
fn built_content_slots_into_a_chat_message() {
    let content = builder()
        .build(
            Some("Describe this"),
            &Attachments::default().with_image("https://ex.com/a.png"),
        )
        .unwrap();

    let message = user_message_with_content(content);
    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(json["role"], "user");
    assert_eq!(json["content"][0]["type"], "text");
    assert_eq!(json["content"][1]["type"], "image_url");
    assert_eq!(
        json["content"][1]["image_url"]["url"],
        "https://ex.com/a.png"
    );
}
