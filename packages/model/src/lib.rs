//! # Mailsmith Model
//!
//! Data model for the email composition engine.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: catalog + typed blocks + document    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: commands + pure reducer + history   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: document → email HTML        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The model is a plain value type: documents are cloned and replaced
//! wholesale by the editor, never shared mutably, so there is no locking
//! anywhere in the core.

mod blocks;
mod catalog;
mod document;
mod id_generator;

pub use blocks::{
    BlockKind, BlockProps, BrandHeaderProps, ButtonGridProps, ButtonItem, ButtonStyle,
    FooterProps, FullWidthImageProps, HeaderBannerProps, HeroBannerProps, ImageItem,
    ImageTextSectionProps, SingleButtonProps, TextAlign, TextSectionProps,
    ThreeColumnImagesProps, TwoColumnImagesProps,
};
pub use catalog::{DEFAULT_LOGO_URL, PLACEHOLDER_IMAGE};
pub use document::{ContentBlock, Document};
pub use id_generator::{session_seed, IdGenerator};
