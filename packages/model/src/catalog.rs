//! # Block Catalog
//!
//! Default property bags for every block kind.
//!
//! Freshly added blocks get the full default record for their kind, so they
//! render sensibly without ever reaching the generator's fallbacks. The
//! fallbacks still exist independently for blocks decoded from partial or
//! older documents.

use crate::blocks::*;

/// Placeholder image used by every image slot until the user uploads one
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

/// Default brand logo shown by a fresh brand header
pub const DEFAULT_LOGO_URL: &str =
    "https://link.email.lkbennett.com/custloads/816689973/vce/logo1.png";

impl BlockProps {
    /// Catalog defaults for a block kind, total over [`BlockKind`].
    ///
    /// Returns the same literal record on every call.
    pub fn defaults(kind: BlockKind) -> BlockProps {
        match kind {
            BlockKind::BrandHeader => BlockProps::BrandHeader(BrandHeaderProps {
                logo_url: Some(DEFAULT_LOGO_URL.to_string()),
                logo_width: Some(218),
                logo_alt: Some("LK Bennett London".to_string()),
                background_color: Some("#ffffff".to_string()),
                border_color: Some("#000000".to_string()),
                border_height: Some(3),
                spacing_top: Some(30),
                spacing_bottom: Some(30),
            }),
            BlockKind::HeaderBanner => BlockProps::HeaderBanner(HeaderBannerProps {
                title: Some("Header Title".to_string()),
                background_color: Some("#f8f9fa".to_string()),
                text_color: Some("#000000".to_string()),
                font_size: Some(35),
                font_weight: Some("normal".to_string()),
                line_height: Some(1.0),
                letter_spacing: Some("2px".to_string()),
                ..Default::default()
            }),
            BlockKind::TextSection => BlockProps::TextSection(TextSectionProps {
                text: Some("Sample text content".to_string()),
                background_color: Some("#ffffff".to_string()),
                text_color: Some("#000000".to_string()),
                font_size: Some(17),
                font_weight: Some("normal".to_string()),
                text_align: Some(TextAlign::Center),
                line_height: Some(1.8),
                letter_spacing: Some("2px".to_string()),
                ..Default::default()
            }),
            BlockKind::FullWidthImage => BlockProps::FullWidthImage(FullWidthImageProps {
                image_url: Some(PLACEHOLDER_IMAGE.to_string()),
                image_alt: Some("Full width image".to_string()),
                background_color: Some("#ffffff".to_string()),
                ..Default::default()
            }),
            BlockKind::TwoColumnImages => BlockProps::TwoColumnImages(TwoColumnImagesProps {
                images: vec![
                    ImageItem {
                        url: Some(PLACEHOLDER_IMAGE.to_string()),
                        alt: Some("Image 1".to_string()),
                    },
                    ImageItem {
                        url: Some(PLACEHOLDER_IMAGE.to_string()),
                        alt: Some("Image 2".to_string()),
                    },
                ],
                spacing: Some(8),
                background_color: Some("#ffffff".to_string()),
                ..Default::default()
            }),
            BlockKind::ThreeColumnImages => BlockProps::ThreeColumnImages(ThreeColumnImagesProps {
                images: vec![
                    ImageItem {
                        url: Some(PLACEHOLDER_IMAGE.to_string()),
                        alt: Some("Image 1".to_string()),
                    },
                    ImageItem {
                        url: Some(PLACEHOLDER_IMAGE.to_string()),
                        alt: Some("Image 2".to_string()),
                    },
                    ImageItem {
                        url: Some(PLACEHOLDER_IMAGE.to_string()),
                        alt: Some("Image 3".to_string()),
                    },
                ],
                spacing: Some(8),
                background_color: Some("#ffffff".to_string()),
                ..Default::default()
            }),
            BlockKind::HeroBanner => BlockProps::HeroBanner(HeroBannerProps {
                image_url: Some(PLACEHOLDER_IMAGE.to_string()),
                title: Some("Hero Title".to_string()),
                subtitle: Some("Hero subtitle text".to_string()),
                overlay_color: Some("rgba(0,0,0,0.3)".to_string()),
                font_size: Some(35),
                subtitle_font_size: Some(17),
                font_weight: Some("normal".to_string()),
                line_height: Some(1.0),
                letter_spacing: Some("2px".to_string()),
                button_text: Some("Button".to_string()),
                button_style: Some(ButtonStyle::Outlined),
                button_color: Some("#000000".to_string()),
                button_text_color: Some("#ffffff".to_string()),
                background_color: Some("#ffffff".to_string()),
                text_color: Some("#ffffff".to_string()),
                ..Default::default()
            }),
            BlockKind::ImageTextSection => BlockProps::ImageTextSection(ImageTextSectionProps {
                image_url: Some(PLACEHOLDER_IMAGE.to_string()),
                image_alt: Some("Image".to_string()),
                title: Some("Section Title".to_string()),
                text: Some("Section text content goes here".to_string()),
                font_size: Some(17),
                font_weight: Some("normal".to_string()),
                line_height: Some(1.8),
                letter_spacing: Some("2px".to_string()),
                text_align: Some(TextAlign::Left),
                button_text: Some("Button".to_string()),
                button_style: Some(ButtonStyle::Outlined),
                button_color: Some("#1a82e2".to_string()),
                button_text_color: Some("#ffffff".to_string()),
                background_color: Some("#ffffff".to_string()),
                text_color: Some("#000000".to_string()),
                ..Default::default()
            }),
            BlockKind::ButtonGrid => BlockProps::ButtonGrid(ButtonGridProps {
                button_count: Some(3),
                spacing: Some(8),
                background_color: Some("#ffffff".to_string()),
                button_style: Some(ButtonStyle::Outlined),
                button_color: Some("#000000".to_string()),
                button_text_color: Some("#000000".to_string()),
                font_size: Some(17),
                font_weight: Some("normal".to_string()),
                line_height: Some(1.8),
                letter_spacing: Some("1.5px".to_string()),
                buttons: vec![
                    ButtonItem {
                        text: Some("Button 1".to_string()),
                        url: None,
                    },
                    ButtonItem {
                        text: Some("Button 2".to_string()),
                        url: None,
                    },
                    ButtonItem {
                        text: Some("Button 3".to_string()),
                        url: None,
                    },
                ],
                ..Default::default()
            }),
            BlockKind::SingleButton => BlockProps::SingleButton(SingleButtonProps {
                button_text: Some("Click Here To Join".to_string()),
                button_url: Some("#".to_string()),
                button_style: Some(ButtonStyle::Outlined),
                button_color: Some("#000000".to_string()),
                button_text_color: Some("#000000".to_string()),
                font_size: Some(17),
                font_weight: Some("normal".to_string()),
                line_height: Some(1.8),
                letter_spacing: Some("1.5px".to_string()),
                background_color: Some("#ffffff".to_string()),
                ..Default::default()
            }),
            BlockKind::Footer => BlockProps::Footer(FooterProps {
                company_name: Some("Your Company".to_string()),
                background_color: Some("#f8f9fa".to_string()),
                text_color: Some("#666666".to_string()),
                link_color: Some("#1a82e2".to_string()),
                privacy_url: Some("#".to_string()),
                unsubscribe_url: Some("#".to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_stable() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockProps::defaults(kind), BlockProps::defaults(kind));
        }
    }

    #[test]
    fn test_defaults_match_their_kind() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockProps::defaults(kind).kind(), Some(kind));
        }
    }

    #[test]
    fn test_defaults_are_non_empty() {
        for kind in BlockKind::ALL {
            let encoded = BlockProps::defaults(kind).encode();
            let object = encoded.as_object().expect("defaults encode to an object");
            assert!(
                object.values().any(|v| !v.is_null()),
                "{kind} defaults carry no values"
            );
        }
    }

    #[test]
    fn test_single_button_defaults() {
        match BlockProps::defaults(BlockKind::SingleButton) {
            BlockProps::SingleButton(p) => {
                assert_eq!(p.button_style, Some(ButtonStyle::Outlined));
                assert_eq!(p.font_size, Some(17));
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }
}
