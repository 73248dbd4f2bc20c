use crate::{render, render_with_options, RenderOptions};
use mailsmith_editor::{BlockKind, BlockProps, EditSession};
use mailsmith_model::{
    ButtonGridProps, ButtonItem, ButtonStyle, Document, ImageItem, SingleButtonProps,
    TextSectionProps, TwoColumnImagesProps,
};

fn fixed_options() -> RenderOptions {
    RenderOptions {
        copyright_year: 2024,
        ..Default::default()
    }
}

#[test]
fn test_render_empty_document() {
    let html = render(&Document::empty());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.trim_end().ends_with("</html>"));
    assert!(html.contains("email-container"));
}

#[test]
fn test_render_is_deterministic() {
    let mut session = EditSession::new("determinism");
    session.add_block(BlockKind::TextSection, None);
    session.add_block(BlockKind::ButtonGrid, None);

    let options = fixed_options();
    let first = render_with_options(session.document(), &options);
    let second = render_with_options(session.document(), &options);
    assert_eq!(first, second);
}

#[test]
fn test_fresh_session_round_trip() {
    let mut session = EditSession::new("round-trip");
    let id = session.add_block(BlockKind::TextSection, None);
    session.update_block(
        &id,
        BlockProps::TextSection(TextSectionProps {
            text: Some("Hello".into()),
            ..Default::default()
        }),
    );

    let html = render_with_options(session.document(), &fixed_options());

    // "Hello" lands between the header fragment (brand logo) and the footer
    // fragment (legal line)
    let header_at = html.find("logo1.png").expect("header fragment present");
    let text_at = html.find("Hello").expect("text fragment present");
    let footer_at = html
        .find("All rights reserved")
        .expect("footer fragment present");
    assert!(header_at < text_at);
    assert!(text_at < footer_at);
}

#[test]
fn test_blocks_render_in_list_order() {
    let mut session = EditSession::new("ordering");
    let first = session.add_block(BlockKind::TextSection, None);
    let second = session.add_block(BlockKind::TextSection, None);
    session.update_block(
        &first,
        BlockProps::TextSection(TextSectionProps {
            text: Some("Alpha".into()),
            ..Default::default()
        }),
    );
    session.update_block(
        &second,
        BlockProps::TextSection(TextSectionProps {
            text: Some("Beta".into()),
            ..Default::default()
        }),
    );

    let html = render(session.document());
    assert!(html.find("Alpha").unwrap() < html.find("Beta").unwrap());
}

#[test]
fn test_button_grid_per_index_defaults() {
    let mut doc = Document::empty();
    doc.blocks.push(mailsmith_model::ContentBlock::new(
        "grid-1".into(),
        BlockProps::ButtonGrid(ButtonGridProps {
            button_count: Some(3),
            buttons: vec![
                ButtonItem {
                    text: Some("Join the club".into()),
                    url: None,
                },
                // cleared text slot falls back to the per-index default
                ButtonItem {
                    text: Some("".into()),
                    url: None,
                },
            ],
            ..Default::default()
        }),
    ));

    let html = render(&doc);
    assert!(html.contains("Join the club"));
    assert!(html.contains("Button 2"));
    assert!(html.contains("Button 3"));
}

#[test]
fn test_missing_properties_fall_back_to_defaults() {
    let mut doc = Document::empty();
    doc.blocks.push(mailsmith_model::ContentBlock::new(
        "text-1".into(),
        BlockProps::TextSection(TextSectionProps::default()),
    ));

    let html = render(&doc);
    assert!(html.contains("Text content goes here"));
    assert!(html.contains("font-size: 17px"));
    assert!(html.contains("line-height: 1.8"));
    assert!(html.contains("letter-spacing: 2px"));
    assert!(html.contains("text-align: center"));
}

#[test]
fn test_cleared_values_fall_back_like_missing_ones() {
    // clearing a property-panel control stores "" or 0, not a removed key
    let mut doc = Document::empty();
    doc.blocks.push(mailsmith_model::ContentBlock::new(
        "text-1".into(),
        BlockProps::TextSection(TextSectionProps {
            text: Some("".into()),
            font_size: Some(0),
            line_height: Some(0.0),
            letter_spacing: Some("".into()),
            ..Default::default()
        }),
    ));

    let html = render(&doc);
    assert!(html.contains("Text content goes here"));
    assert!(html.contains("font-size: 17px"));
    assert!(html.contains("line-height: 1.8"));
    assert!(html.contains("letter-spacing: 2px"));
    assert!(!html.contains("font-size: 0px"));
}

#[test]
fn test_blank_image_url_falls_back_to_placeholder() {
    let mut doc = Document::empty();
    doc.blocks.push(mailsmith_model::ContentBlock::new(
        "cols-1".into(),
        BlockProps::TwoColumnImages(TwoColumnImagesProps {
            images: vec![ImageItem {
                url: Some("".into()),
                alt: Some("".into()),
            }],
            ..Default::default()
        }),
    ));

    let html = render(&doc);
    assert!(html.contains("/placeholder.jpg"));
    assert!(html.contains("Image 1"));
    assert!(!html.contains("src=\"\""));
}

#[test]
fn test_single_button_outlined_defaults() {
    let mut doc = Document::empty();
    doc.blocks.push(mailsmith_model::ContentBlock::new(
        "btn-1".into(),
        BlockProps::SingleButton(SingleButtonProps::default()),
    ));

    let html = render(&doc);
    assert!(html.contains("Click Here To Join"));
    assert!(html.contains("min-width: 200px"));
    assert!(html.contains("border-width: 1px; border-style: solid; border-color: #000000;"));
}

#[test]
fn test_single_button_underlined_rule() {
    let mut doc = Document::empty();
    doc.blocks.push(mailsmith_model::ContentBlock::new(
        "btn-1".into(),
        BlockProps::SingleButton(SingleButtonProps {
            button_style: Some(ButtonStyle::Underlined),
            ..Default::default()
        }),
    ));

    let html = render(&doc);
    assert!(html.contains("border-bottom: 1px solid;"));
    assert!(html.contains("visibility: hidden;"));
}

#[test]
fn test_unknown_block_renders_diagnostic() {
    let mut doc = Document::empty();
    doc.blocks.push(mailsmith_model::ContentBlock::new(
        "x-1".into(),
        BlockProps::Unknown {
            kind: "marquee".into(),
        },
    ));

    let html = render(&doc);
    assert!(html.contains("Unknown component type: marquee"));
    // a bad block never corrupts the rest of the output
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_user_text_is_escaped() {
    let mut doc = Document::empty();
    doc.blocks.push(mailsmith_model::ContentBlock::new(
        "text-1".into(),
        BlockProps::TextSection(TextSectionProps {
            text: Some("Fish <&> Chips".into()),
            ..Default::default()
        }),
    ));

    let html = render(&doc);
    assert!(html.contains("Fish &lt;&amp;&gt; Chips"));
    assert!(!html.contains("Fish <&> Chips"));
}

#[test]
fn test_footer_copyright_year_and_company() {
    let mut session = EditSession::new("footer");
    let footer_id = session.document().footer.as_ref().unwrap().id.clone();
    session.update_block(
        &footer_id,
        BlockProps::Footer(mailsmith_model::FooterProps {
            company_name: Some("Acme".into()),
            ..Default::default()
        }),
    );

    let html = render_with_options(session.document(), &fixed_options());
    assert!(html.contains("&copy; 2024 Acme. All rights reserved."));
    assert!(html.contains("Privacy Policy"));
    assert!(html.contains("Unsubscribe"));
}

#[test]
fn test_footer_service_cards_keep_table_skeleton() {
    let session = EditSession::new("footer-cards");
    let html = render_with_options(session.document(), &fixed_options());

    // each service card is its own 155px table: icon cell, spacer, label
    assert!(html.contains("width=\"155\""));
    assert!(html.contains("height=\"45\""));
    assert!(html.contains("height=\"15\""));
    assert!(html.contains("Delivery Information"));
    assert!(html.contains("Call &amp; Shop"));
}

#[test]
fn test_compact_output() {
    let mut session = EditSession::new("compact");
    session.add_block(BlockKind::TextSection, None);

    let html = render_with_options(
        session.document(),
        &RenderOptions {
            pretty: false,
            copyright_year: 2024,
            ..Default::default()
        },
    );
    assert!(!html.contains("\n  "));
}

#[test]
fn test_no_modern_layout_primitives() {
    let mut session = EditSession::new("layout");
    for kind in BlockKind::ALL {
        session.add_block(kind, None);
    }

    let html = render(session.document());
    assert!(!html.contains("display: flex"));
    assert!(!html.contains("display: grid"));
    assert!(html.contains("cellpadding=\"0\""));
}
