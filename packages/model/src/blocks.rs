//! # Block Model
//!
//! Typed property records for every supported email block.
//!
//! Each block kind carries its own record where every field is optional;
//! a missing field always resolves to that kind's documented default at
//! render time. Partially-specified blocks (freshly added, or decoded from
//! an older document) must still render, so there is no required field
//! anywhere in this module.

use serde::{Deserialize, Serialize};

/// Closed enumeration of the supported block kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    BrandHeader,
    HeaderBanner,
    TextSection,
    FullWidthImage,
    TwoColumnImages,
    ThreeColumnImages,
    HeroBanner,
    ImageTextSection,
    ButtonGrid,
    SingleButton,
    Footer,
}

impl BlockKind {
    /// All kinds, in catalog order
    pub const ALL: [BlockKind; 11] = [
        BlockKind::BrandHeader,
        BlockKind::HeaderBanner,
        BlockKind::TextSection,
        BlockKind::FullWidthImage,
        BlockKind::TwoColumnImages,
        BlockKind::ThreeColumnImages,
        BlockKind::HeroBanner,
        BlockKind::ImageTextSection,
        BlockKind::ButtonGrid,
        BlockKind::SingleButton,
        BlockKind::Footer,
    ];

    /// Wire tag for this kind (kebab-case, matching serialized documents)
    pub fn tag(&self) -> &'static str {
        match self {
            BlockKind::BrandHeader => "brand-header",
            BlockKind::HeaderBanner => "header-banner",
            BlockKind::TextSection => "text-section",
            BlockKind::FullWidthImage => "full-width-image",
            BlockKind::TwoColumnImages => "two-column-images",
            BlockKind::ThreeColumnImages => "three-column-images",
            BlockKind::HeroBanner => "hero-banner",
            BlockKind::ImageTextSection => "image-text-section",
            BlockKind::ButtonGrid => "button-grid",
            BlockKind::SingleButton => "single-button",
            BlockKind::Footer => "footer",
        }
    }

    pub fn from_tag(tag: &str) -> Option<BlockKind> {
        BlockKind::ALL.iter().copied().find(|k| k.tag() == tag)
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Button rendering style shared across button-bearing blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Outlined,
    Underlined,
    Filled,
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// One image slot of a multi-image block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageItem {
    pub url: Option<String>,
    pub alt: Option<String>,
}

/// One button slot of a multi-button block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonItem {
    pub text: Option<String>,
    pub url: Option<String>,
}

/// Merge `Some` fields of a patch record into a target record, field-wise.
/// `None` in the patch means "keep the prior value".
macro_rules! merge_fields {
    ($dst:expr, $src:expr, { $($field:ident),* $(,)? }) => {
        $(
            if $src.$field.is_some() {
                $dst.$field = $src.$field.clone();
            }
        )*
    };
}

/// Merge item lists index-wise: patch entries overlay existing entries at
/// the same position, growing the target list when the patch is longer.
fn merge_buttons(dst: &mut Vec<ButtonItem>, src: &[ButtonItem]) {
    for (i, item) in src.iter().enumerate() {
        if dst.len() <= i {
            dst.push(ButtonItem::default());
        }
        merge_fields!(dst[i], item, { text, url });
    }
}

fn merge_images(dst: &mut Vec<ImageItem>, src: &[ImageItem]) {
    for (i, item) in src.iter().enumerate() {
        if dst.len() <= i {
            dst.push(ImageItem::default());
        }
        merge_fields!(dst[i], item, { url, alt });
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandHeaderProps {
    pub logo_url: Option<String>,
    pub logo_width: Option<u32>,
    pub logo_alt: Option<String>,
    pub background_color: Option<String>,
    pub border_color: Option<String>,
    pub border_height: Option<u32>,
    pub spacing_top: Option<u32>,
    pub spacing_bottom: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderBannerProps {
    pub title: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub padding: Option<u32>,
    pub border_radius: Option<u32>,
    pub border_width: Option<u32>,
    pub border_color: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<u32>,
    pub font_weight: Option<String>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextSectionProps {
    pub text: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub padding: Option<u32>,
    pub border_radius: Option<u32>,
    pub border_width: Option<u32>,
    pub border_color: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<u32>,
    pub font_weight: Option<String>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub text_align: Option<TextAlign>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FullWidthImageProps {
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub background_color: Option<String>,
    pub padding: Option<u32>,
    pub border_radius: Option<u32>,
    pub border_width: Option<u32>,
    pub border_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TwoColumnImagesProps {
    pub images: Vec<ImageItem>,
    pub spacing: Option<u32>,
    pub background_color: Option<String>,
    pub padding: Option<u32>,
    pub border_radius: Option<u32>,
    pub border_width: Option<u32>,
    pub border_color: Option<String>,
    pub show_buttons: Option<bool>,
    pub button_style: Option<ButtonStyle>,
    pub buttons: Vec<ButtonItem>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
    pub font_size: Option<u32>,
    pub font_weight: Option<String>,
    pub letter_spacing: Option<String>,
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreeColumnImagesProps {
    pub images: Vec<ImageItem>,
    pub spacing: Option<u32>,
    pub background_color: Option<String>,
    pub padding: Option<u32>,
    pub border_radius: Option<u32>,
    pub border_width: Option<u32>,
    pub border_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroBannerProps {
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub overlay_color: Option<String>,
    pub font_size: Option<u32>,
    pub subtitle_font_size: Option<u32>,
    pub font_weight: Option<String>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<String>,
    pub button_text: Option<String>,
    pub button_style: Option<ButtonStyle>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
    pub subtitle_underlined: Option<bool>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageTextSectionProps {
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub font_size: Option<u32>,
    pub font_weight: Option<String>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<String>,
    pub text_align: Option<TextAlign>,
    pub button_text: Option<String>,
    pub button_style: Option<ButtonStyle>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonGridProps {
    pub button_count: Option<u32>,
    pub spacing: Option<u32>,
    pub padding: Option<u32>,
    pub buttons: Vec<ButtonItem>,
    pub button_style: Option<ButtonStyle>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
    pub font_size: Option<u32>,
    pub font_weight: Option<String>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<String>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SingleButtonProps {
    pub button_text: Option<String>,
    pub button_url: Option<String>,
    pub button_style: Option<ButtonStyle>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
    pub font_size: Option<u32>,
    pub font_weight: Option<String>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<String>,
    pub font_family: Option<String>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterProps {
    pub company_name: Option<String>,
    pub link_color: Option<String>,
    pub privacy_url: Option<String>,
    pub unsubscribe_url: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
}

/// Typed property payload for a block
///
/// One variant per [`BlockKind`], plus [`BlockProps::Unknown`] for type tags
/// this build does not recognize. Unknown blocks survive decode and render
/// as a visible diagnostic fragment instead of aborting anything.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockProps {
    BrandHeader(BrandHeaderProps),
    HeaderBanner(HeaderBannerProps),
    TextSection(TextSectionProps),
    FullWidthImage(FullWidthImageProps),
    TwoColumnImages(TwoColumnImagesProps),
    ThreeColumnImages(ThreeColumnImagesProps),
    HeroBanner(HeroBannerProps),
    ImageTextSection(ImageTextSectionProps),
    ButtonGrid(ButtonGridProps),
    SingleButton(SingleButtonProps),
    Footer(FooterProps),
    Unknown { kind: String },
}

impl BlockProps {
    /// Wire tag for this payload
    pub fn tag(&self) -> &str {
        match self {
            BlockProps::BrandHeader(_) => BlockKind::BrandHeader.tag(),
            BlockProps::HeaderBanner(_) => BlockKind::HeaderBanner.tag(),
            BlockProps::TextSection(_) => BlockKind::TextSection.tag(),
            BlockProps::FullWidthImage(_) => BlockKind::FullWidthImage.tag(),
            BlockProps::TwoColumnImages(_) => BlockKind::TwoColumnImages.tag(),
            BlockProps::ThreeColumnImages(_) => BlockKind::ThreeColumnImages.tag(),
            BlockProps::HeroBanner(_) => BlockKind::HeroBanner.tag(),
            BlockProps::ImageTextSection(_) => BlockKind::ImageTextSection.tag(),
            BlockProps::ButtonGrid(_) => BlockKind::ButtonGrid.tag(),
            BlockProps::SingleButton(_) => BlockKind::SingleButton.tag(),
            BlockProps::Footer(_) => BlockKind::Footer.tag(),
            BlockProps::Unknown { kind } => kind,
        }
    }

    /// Kind of this payload, if it is a recognized one
    pub fn kind(&self) -> Option<BlockKind> {
        match self {
            BlockProps::Unknown { .. } => None,
            other => BlockKind::from_tag(other.tag()),
        }
    }

    /// Whether this payload occupies the header singleton slot
    pub fn is_header(&self) -> bool {
        matches!(self, BlockProps::BrandHeader(_))
    }

    /// Whether this payload occupies the footer singleton slot
    pub fn is_footer(&self) -> bool {
        matches!(self, BlockProps::Footer(_))
    }

    /// Decode from a wire tag and a raw JSON property object.
    ///
    /// This is the single decode boundary: unrecognized tags become
    /// [`BlockProps::Unknown`], and malformed property objects degrade to an
    /// empty record (every field at its default) rather than failing.
    pub fn decode(tag: &str, props: serde_json::Value) -> BlockProps {
        fn record<T: serde::de::DeserializeOwned + Default>(props: serde_json::Value) -> T {
            serde_json::from_value(props).unwrap_or_default()
        }

        match BlockKind::from_tag(tag) {
            Some(BlockKind::BrandHeader) => BlockProps::BrandHeader(record(props)),
            Some(BlockKind::HeaderBanner) => BlockProps::HeaderBanner(record(props)),
            Some(BlockKind::TextSection) => BlockProps::TextSection(record(props)),
            Some(BlockKind::FullWidthImage) => BlockProps::FullWidthImage(record(props)),
            Some(BlockKind::TwoColumnImages) => BlockProps::TwoColumnImages(record(props)),
            Some(BlockKind::ThreeColumnImages) => BlockProps::ThreeColumnImages(record(props)),
            Some(BlockKind::HeroBanner) => BlockProps::HeroBanner(record(props)),
            Some(BlockKind::ImageTextSection) => BlockProps::ImageTextSection(record(props)),
            Some(BlockKind::ButtonGrid) => BlockProps::ButtonGrid(record(props)),
            Some(BlockKind::SingleButton) => BlockProps::SingleButton(record(props)),
            Some(BlockKind::Footer) => BlockProps::Footer(record(props)),
            None => BlockProps::Unknown {
                kind: tag.to_string(),
            },
        }
    }

    /// Encode the property payload as a raw JSON object
    pub fn encode(&self) -> serde_json::Value {
        fn object<T: Serialize>(record: &T) -> serde_json::Value {
            serde_json::to_value(record).unwrap_or(serde_json::Value::Null)
        }

        match self {
            BlockProps::BrandHeader(p) => object(p),
            BlockProps::HeaderBanner(p) => object(p),
            BlockProps::TextSection(p) => object(p),
            BlockProps::FullWidthImage(p) => object(p),
            BlockProps::TwoColumnImages(p) => object(p),
            BlockProps::ThreeColumnImages(p) => object(p),
            BlockProps::HeroBanner(p) => object(p),
            BlockProps::ImageTextSection(p) => object(p),
            BlockProps::ButtonGrid(p) => object(p),
            BlockProps::SingleButton(p) => object(p),
            BlockProps::Footer(p) => object(p),
            BlockProps::Unknown { .. } => serde_json::Value::Null,
        }
    }

    /// Wire shape of a standalone payload: `{ type, props }`
    fn to_raw(&self) -> RawProps {
        RawProps {
            kind: self.tag().to_string(),
            props: self.encode(),
        }
    }

    /// Merge a partial payload into this one, field-wise.
    ///
    /// `None` fields of the patch keep the prior value. A patch of a
    /// different variant is ignored: a block's kind is immutable after
    /// creation, so there is no type-migration path through merge.
    pub fn merge(&mut self, patch: &BlockProps) {
        match (self, patch) {
            (BlockProps::BrandHeader(dst), BlockProps::BrandHeader(src)) => {
                merge_fields!(dst, src, {
                    logo_url, logo_width, logo_alt, background_color,
                    border_color, border_height, spacing_top, spacing_bottom,
                });
            }
            (BlockProps::HeaderBanner(dst), BlockProps::HeaderBanner(src)) => {
                merge_fields!(dst, src, {
                    title, background_color, text_color, padding,
                    border_radius, border_width, border_color, font_family,
                    font_size, font_weight, line_height, letter_spacing,
                });
            }
            (BlockProps::TextSection(dst), BlockProps::TextSection(src)) => {
                merge_fields!(dst, src, {
                    text, background_color, text_color, padding,
                    border_radius, border_width, border_color, font_family,
                    font_size, font_weight, italic, underline, text_align,
                    line_height, letter_spacing,
                });
            }
            (BlockProps::FullWidthImage(dst), BlockProps::FullWidthImage(src)) => {
                merge_fields!(dst, src, {
                    image_url, image_alt, background_color, padding,
                    border_radius, border_width, border_color,
                });
            }
            (BlockProps::TwoColumnImages(dst), BlockProps::TwoColumnImages(src)) => {
                merge_fields!(dst, src, {
                    spacing, background_color, padding, border_radius,
                    border_width, border_color, show_buttons, button_style,
                    button_color, button_text_color, font_size, font_weight,
                    letter_spacing, font_family,
                });
                merge_images(&mut dst.images, &src.images);
                merge_buttons(&mut dst.buttons, &src.buttons);
            }
            (BlockProps::ThreeColumnImages(dst), BlockProps::ThreeColumnImages(src)) => {
                merge_fields!(dst, src, {
                    spacing, background_color, padding, border_radius,
                    border_width, border_color,
                });
                merge_images(&mut dst.images, &src.images);
            }
            (BlockProps::HeroBanner(dst), BlockProps::HeroBanner(src)) => {
                merge_fields!(dst, src, {
                    image_url, title, subtitle, overlay_color, font_size,
                    subtitle_font_size, font_weight, line_height,
                    letter_spacing, button_text, button_style, button_color,
                    button_text_color, subtitle_underlined, background_color,
                    text_color, font_family,
                });
            }
            (BlockProps::ImageTextSection(dst), BlockProps::ImageTextSection(src)) => {
                merge_fields!(dst, src, {
                    image_url, image_alt, title, text, font_size, font_weight,
                    line_height, letter_spacing, text_align, button_text,
                    button_style, button_color, button_text_color,
                    background_color, text_color, font_family,
                });
            }
            (BlockProps::ButtonGrid(dst), BlockProps::ButtonGrid(src)) => {
                merge_fields!(dst, src, {
                    button_count, spacing, padding, button_style,
                    button_color, button_text_color, font_size, font_weight,
                    line_height, letter_spacing, background_color,
                });
                merge_buttons(&mut dst.buttons, &src.buttons);
            }
            (BlockProps::SingleButton(dst), BlockProps::SingleButton(src)) => {
                merge_fields!(dst, src, {
                    button_text, button_url, button_style, button_color,
                    button_text_color, font_size, font_weight, line_height,
                    letter_spacing, font_family, background_color,
                });
            }
            (BlockProps::Footer(dst), BlockProps::Footer(src)) => {
                merge_fields!(dst, src, {
                    company_name, link_color, privacy_url, unsubscribe_url,
                    background_color, text_color,
                });
            }
            _ => {}
        }
    }
}

/// Tagged wire form for a standalone [`BlockProps`] value
#[derive(Serialize, Deserialize)]
struct RawProps {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    props: serde_json::Value,
}

impl Serialize for BlockProps {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_raw().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BlockProps {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawProps::deserialize(deserializer)?;
        Ok(BlockProps::decode(&raw.kind, raw.props))
    }
}
