use chrono::Datelike;
use mailsmith_model::{
    BlockProps, BrandHeaderProps, ButtonGridProps, ButtonItem, ButtonStyle, ContentBlock,
    Document, FooterProps, FullWidthImageProps, HeaderBannerProps, HeroBannerProps, ImageItem,
    ImageTextSectionProps, SingleButtonProps, TextAlign, TextSectionProps,
    ThreeColumnImagesProps, TwoColumnImagesProps, DEFAULT_LOGO_URL, PLACEHOLDER_IMAGE,
};
use tracing::warn;

/// Logical pixel width of the centered email container
pub const CONTAINER_WIDTH: u32 = 650;

/// Default serif stack used across the catalog
const FONT_SERIF: &str = "Georgia, 'Times New Roman', Times, serif";

/// Options for HTML rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Pretty print (indentation + newlines)
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Year stamped into the footer copyright line
    pub copyright_year: i32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            copyright_year: chrono::Utc::now().year(),
        }
    }
}

struct Context {
    options: RenderOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: RenderOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            for _ in 0..self.depth {
                self.buffer.push_str(&self.options.indent);
            }
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Render a document with default options
pub fn render(document: &Document) -> String {
    render_with_options(document, &RenderOptions::default())
}

/// Render a document to a complete, self-contained HTML email
pub fn render_with_options(document: &Document, options: &RenderOptions) -> String {
    let mut ctx = Context::new(options.clone());

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    render_head(&mut ctx);

    ctx.add_line("<body style=\"margin: 0; padding: 0; background-color: #f8f9fa;\">");
    ctx.indent();
    ctx.add_line("<table width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"background-color: #f8f9fa;\">");
    ctx.indent();
    ctx.add_line("<tr>");
    ctx.indent();
    ctx.add_line("<td align=\"center\" style=\"padding: 20px 0;\">");
    ctx.indent();
    ctx.add_line(&format!(
        "<table class=\"email-container\" width=\"{CONTAINER_WIDTH}\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"background-color: #ffffff;\">"
    ));
    ctx.indent();
    ctx.add_line("<tr>");
    ctx.indent();
    ctx.add_line("<td style=\"padding: 0;\">");
    ctx.indent();

    // Header first, footer last, regardless of edit order
    for block in document.iter_all() {
        render_block(block, &mut ctx);
    }

    ctx.dedent();
    ctx.add_line("</td>");
    ctx.dedent();
    ctx.add_line("</tr>");
    ctx.dedent();
    ctx.add_line("</table>");
    ctx.dedent();
    ctx.add_line("</td>");
    ctx.dedent();
    ctx.add_line("</tr>");
    ctx.dedent();
    ctx.add_line("</table>");
    ctx.dedent();
    ctx.add_line("</body>");
    ctx.add_line("</html>");

    ctx.get_output()
}

fn render_head(ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line("<title>Email</title>");
    ctx.add_line("<style>");
    ctx.indent();
    ctx.add_line(&format!(
        "body {{ margin: 0; padding: 0; font-family: {FONT_SERIF}; line-height: 1.6; color: #000000; }}"
    ));
    ctx.add_line("table { border-collapse: collapse; }");
    ctx.add_line("img { border: 0; display: block; max-width: 100%; }");
    ctx.add_line(&format!(
        ".email-container {{ max-width: {CONTAINER_WIDTH}px; margin: 0 auto; background-color: #ffffff; }}"
    ));
    ctx.add_line(&format!(
        "@media only screen and (max-width: {CONTAINER_WIDTH}px) {{ .email-container {{ width: 100% !important; }} .responsive-column {{ width: 100% !important; display: block !important; }} }}"
    ));
    ctx.dedent();
    ctx.add_line("</style>");
    ctx.dedent();
    ctx.add_line("</head>");
}

/// Render one block's fragment. A single bad block degrades to a visible
/// diagnostic; the rest of the document always renders.
fn render_block(block: &ContentBlock, ctx: &mut Context) {
    match &block.props {
        BlockProps::BrandHeader(p) => render_brand_header(p, ctx),
        BlockProps::HeaderBanner(p) => render_header_banner(p, ctx),
        BlockProps::TextSection(p) => render_text_section(p, ctx),
        BlockProps::FullWidthImage(p) => render_full_width_image(p, ctx),
        BlockProps::TwoColumnImages(p) => render_two_column_images(p, ctx),
        BlockProps::ThreeColumnImages(p) => render_three_column_images(p, ctx),
        BlockProps::HeroBanner(p) => render_hero_banner(p, ctx),
        BlockProps::ImageTextSection(p) => render_image_text_section(p, ctx),
        BlockProps::ButtonGrid(p) => render_button_grid(p, ctx),
        BlockProps::SingleButton(p) => render_single_button(p, ctx),
        BlockProps::Footer(p) => render_footer(p, ctx),
        BlockProps::Unknown { kind } => {
            warn!(kind = %kind, "rendering diagnostic fragment for unknown block");
            ctx.add_line(&format!(
                "<div>Unknown component type: {}</div>",
                esc(kind)
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// Shared fallbacks

fn esc(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// Empty strings and zeroes read as absent: clearing a control in the
// property panel stores a falsy value, and it must fall back the same way
// a missing key does.

fn or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    match value.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => default,
    }
}

fn or_esc(value: &Option<String>, default: &str) -> String {
    esc(or(value, default))
}

fn num(value: Option<u32>, default: u32) -> u32 {
    match value {
        Some(n) if n > 0 => n,
        _ => default,
    }
}

fn float(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(n) if n != 0.0 => n,
        _ => default,
    }
}

/// `border-width/style/color` triple the way every bordered block emits it:
/// a zero/absent width renders an explicit none-border, not an omission.
fn border_css(width: Option<u32>, color: &Option<String>) -> String {
    match width {
        Some(w) if w > 0 => format!(
            "border-width: {w}px; border-style: solid; border-color: {};",
            or_esc(color, "#cccccc")
        ),
        _ => format!(
            "border-width: 0; border-style: none; border-color: {};",
            or_esc(color, "#cccccc")
        ),
    }
}

/// Border face of a button for the outlined/underlined/filled matrix
fn button_border(style: ButtonStyle, edge_color: &str) -> String {
    match style {
        ButtonStyle::Outlined => format!(
            "border-width: 1px; border-style: solid; border-color: {edge_color};"
        ),
        ButtonStyle::Underlined => format!(
            "border-width: 0 0 1px 0; border-style: solid; border-color: {edge_color};"
        ),
        ButtonStyle::Filled => {
            "border-width: 0; border-style: none; border-color: transparent;".to_string()
        }
    }
}

fn button_background(style: ButtonStyle, fill: &Option<String>, default_fill: &str) -> String {
    match style {
        ButtonStyle::Filled => or_esc(fill, default_fill),
        _ => "transparent".to_string(),
    }
}

fn image_at(images: &[ImageItem], index: usize) -> (String, String) {
    let item = images.get(index);
    let url = item
        .and_then(|i| i.url.as_deref())
        .filter(|u| !u.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE);
    let alt = match item.and_then(|i| i.alt.as_deref()).filter(|a| !a.is_empty()) {
        Some(alt) => alt.to_string(),
        None => format!("Image {}", index + 1),
    };
    (esc(url), esc(&alt))
}

fn button_text_at<'a>(buttons: &'a [ButtonItem], index: usize) -> Option<&'a str> {
    buttons
        .get(index)
        .and_then(|b| b.text.as_deref())
        .filter(|t| !t.is_empty())
}

fn align(value: Option<TextAlign>, default: TextAlign) -> &'static str {
    value.unwrap_or(default).css()
}

// ---------------------------------------------------------------------------
// Block renderers

fn render_brand_header(p: &BrandHeaderProps, ctx: &mut Context) {
    let bg = or_esc(&p.background_color, "#ffffff");

    ctx.add_line(&format!(
        "<table width=\"{CONTAINER_WIDTH}\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">"
    ));
    ctx.indent();
    ctx.add_line("<tbody>");
    ctx.indent();
    ctx.add_line(&format!(
        "<tr><td height=\"{}\" bgcolor=\"{bg}\"></td></tr>",
        num(p.spacing_top, 30)
    ));
    ctx.add_line(&format!(
        "<tr><td height=\"{}\" bgcolor=\"{}\"></td></tr>",
        num(p.border_height, 3),
        or_esc(&p.border_color, "#000000")
    ));
    ctx.add_line(&format!(
        "<tr><td height=\"{}\"></td></tr>",
        num(p.spacing_bottom, 30)
    ));
    ctx.add_line(&format!("<tr><td bgcolor=\"{bg}\">"));
    ctx.indent();
    ctx.add_line("<table cellpadding=\"0\" cellspacing=\"0\" width=\"100%\">");
    ctx.indent();
    ctx.add_line("<tbody><tr>");
    ctx.indent();
    ctx.add_line("<td width=\"20\"></td>");
    ctx.add_line("<td align=\"center\">");
    ctx.indent();
    ctx.add_line("<a href=\"#\" target=\"_blank\" style=\"text-decoration: none; font-weight: normal; color: #000000;\" rel=\"noreferrer\">");
    ctx.indent();
    ctx.add_line(&format!(
        "<img src=\"{}\" alt=\"{}\" style=\"display: block; width: {}px; border: 0;\" />",
        or_esc(&p.logo_url, DEFAULT_LOGO_URL),
        or_esc(&p.logo_alt, "LK Bennett London"),
        num(p.logo_width, 218)
    ));
    ctx.dedent();
    ctx.add_line("</a>");
    ctx.dedent();
    ctx.add_line("</td>");
    ctx.add_line("<td width=\"20\"></td>");
    ctx.dedent();
    ctx.add_line("</tr></tbody>");
    ctx.dedent();
    ctx.add_line("</table>");
    ctx.dedent();
    ctx.add_line("</td></tr>");
    ctx.add_line(&format!(
        "<tr><td height=\"{}\"></td></tr>",
        num(p.spacing_bottom, 30)
    ));
    ctx.dedent();
    ctx.add_line("</tbody>");
    ctx.dedent();
    ctx.add_line("</table>");
}

fn render_header_banner(p: &HeaderBannerProps, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<div style=\"background-color: {}; color: {}; padding: {}px; border-radius: {}px; {} font-family: {}; text-align: center;\">",
        or_esc(&p.background_color, "#f8f9fa"),
        or_esc(&p.text_color, "#000000"),
        num(p.padding, 16),
        num(p.border_radius, 0),
        border_css(p.border_width, &p.border_color),
        or_esc(&p.font_family, FONT_SERIF),
    ));
    ctx.indent();
    ctx.add_line(&format!(
        "<h2 style=\"font-size: {}px; font-weight: {}; line-height: {}; letter-spacing: {};\">{}</h2>",
        num(p.font_size, 35),
        or_esc(&p.font_weight, "normal"),
        float(p.line_height, 1.0),
        or_esc(&p.letter_spacing, "2px"),
        or_esc(&p.title, "Header Title"),
    ));
    ctx.dedent();
    ctx.add_line("</div>");
}

fn render_text_section(p: &TextSectionProps, ctx: &mut Context) {
    let text_align = align(p.text_align, TextAlign::Center);

    ctx.add_line(&format!(
        "<div style=\"background-color: {}; color: {}; padding: {}px; border-radius: {}px; {} font-family: {}; text-align: {text_align};\">",
        or_esc(&p.background_color, "#ffffff"),
        or_esc(&p.text_color, "#000000"),
        num(p.padding, 16),
        num(p.border_radius, 0),
        border_css(p.border_width, &p.border_color),
        or_esc(&p.font_family, FONT_SERIF),
    ));
    ctx.indent();
    ctx.add_line(&format!(
        "<p style=\"font-size: {}px; font-weight: {}; font-style: {}; text-decoration: {}; text-align: {text_align}; line-height: {}; letter-spacing: {}; white-space: pre-wrap;\">{}</p>",
        num(p.font_size, 17),
        or_esc(&p.font_weight, "normal"),
        if p.italic.unwrap_or(false) { "italic" } else { "normal" },
        if p.underline.unwrap_or(false) { "underline" } else { "none" },
        float(p.line_height, 1.8),
        or_esc(&p.letter_spacing, "2px"),
        or_esc(&p.text, "Text content goes here"),
    ));
    ctx.dedent();
    ctx.add_line("</div>");
}

fn render_full_width_image(p: &FullWidthImageProps, ctx: &mut Context) {
    let radius = num(p.border_radius, 0);

    ctx.add_line(&format!(
        "<div style=\"padding: {}px; border-radius: {radius}px; {} overflow: hidden; width: 100%;\">",
        num(p.padding, 0),
        border_css(p.border_width, &p.border_color),
    ));
    ctx.indent();
    ctx.add_line(&format!(
        "<img src=\"{}\" alt=\"{}\" style=\"border-radius: {radius}px; width: 100%;\" />",
        or_esc(&p.image_url, PLACEHOLDER_IMAGE),
        or_esc(&p.image_alt, "Full width image"),
    ));
    ctx.dedent();
    ctx.add_line("</div>");
}

fn render_column_button(p: &TwoColumnImagesProps, index: usize, ctx: &mut Context) {
    let style = p.button_style.unwrap_or(ButtonStyle::Outlined);
    let default_text = if index == 0 { "Shop Now" } else { "Learn More" };
    let text = match button_text_at(&p.buttons, index) {
        Some(text) => esc(text),
        None => default_text.to_string(),
    };
    let color = match style {
        ButtonStyle::Filled => or_esc(&p.button_text_color, "#ffffff"),
        _ => or_esc(&p.button_text_color, "#000000"),
    };

    ctx.add_line(&format!(
        "<button style=\"background-color: {}; color: {color}; width: 100%; height: auto; min-height: 48px; font-family: {}; font-size: {}px; font-weight: {}; letter-spacing: {}; {} padding: 12px 24px; text-decoration: none;\">{text}</button>",
        button_background(style, &p.button_color, "#4285F4"),
        or_esc(&p.font_family, FONT_SERIF),
        num(p.font_size, 17),
        or_esc(&p.font_weight, "normal"),
        or_esc(&p.letter_spacing, "1.5px"),
        button_border(style, "#000000"),
    ));
}

fn render_two_column_images(p: &TwoColumnImagesProps, ctx: &mut Context) {
    let spacing = num(p.spacing, 8);
    let show_buttons = p.show_buttons.unwrap_or(false);

    ctx.add_line(&format!(
        "<table width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"padding: {}px; border-radius: {}px; {}\">",
        num(p.padding, 0),
        num(p.border_radius, 0),
        border_css(p.border_width, &p.border_color),
    ));
    ctx.indent();
    ctx.add_line("<tr>");
    ctx.indent();
    for index in 0..2 {
        let (url, alt) = image_at(&p.images, index);
        ctx.add_line(&format!(
            "<td width=\"50%\" class=\"responsive-column\" style=\"padding: {}px;\">",
            spacing / 2
        ));
        ctx.indent();
        ctx.add_line(&format!(
            "<img src=\"{url}\" alt=\"{alt}\" style=\"width: 100%; height: auto;\" />"
        ));
        if show_buttons {
            render_column_button(p, index, ctx);
        }
        ctx.dedent();
        ctx.add_line("</td>");
    }
    ctx.dedent();
    ctx.add_line("</tr>");
    ctx.dedent();
    ctx.add_line("</table>");
}

fn render_three_column_images(p: &ThreeColumnImagesProps, ctx: &mut Context) {
    let spacing = num(p.spacing, 8);

    ctx.add_line(&format!(
        "<table width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"padding: {}px; border-radius: {}px; {}\">",
        num(p.padding, 0),
        num(p.border_radius, 0),
        border_css(p.border_width, &p.border_color),
    ));
    ctx.indent();
    ctx.add_line("<tr>");
    ctx.indent();
    for index in 0..3 {
        let (url, alt) = image_at(&p.images, index);
        ctx.add_line(&format!(
            "<td width=\"33.33%\" class=\"responsive-column\" style=\"padding: {}px;\">",
            spacing / 2
        ));
        ctx.indent();
        ctx.add_line(&format!(
            "<img src=\"{url}\" alt=\"{alt}\" style=\"width: 100%; height: auto;\" />"
        ));
        ctx.dedent();
        ctx.add_line("</td>");
    }
    ctx.dedent();
    ctx.add_line("</tr>");
    ctx.dedent();
    ctx.add_line("</table>");
}

fn render_hero_banner(p: &HeroBannerProps, ctx: &mut Context) {
    let style = p.button_style.unwrap_or(ButtonStyle::Outlined);
    let letter_spacing = or_esc(&p.letter_spacing, "2px");

    ctx.add_line(&format!(
        "<div style=\"position: relative; padding: 32px; text-align: center; background-image: url({}); background-size: cover; background-position: center; color: {}; min-height: 200px; font-family: {};\">",
        or_esc(&p.image_url, PLACEHOLDER_IMAGE),
        or_esc(&p.text_color, "#ffffff"),
        or_esc(&p.font_family, FONT_SERIF),
    ));
    ctx.indent();
    ctx.add_line(&format!(
        "<div style=\"position: absolute; top: 0; left: 0; right: 0; bottom: 0; background-color: {};\"></div>",
        or_esc(&p.overlay_color, "rgba(0,0,0,0.3)"),
    ));
    ctx.add_line("<div style=\"position: relative; z-index: 10;\">");
    ctx.indent();
    ctx.add_line(&format!(
        "<h1 style=\"font-weight: {}; line-height: {}; letter-spacing: {letter_spacing}; font-size: {}px; margin-bottom: 8px;\">{}</h1>",
        or_esc(&p.font_weight, "normal"),
        float(p.line_height, 1.0),
        num(p.font_size, 35),
        or_esc(&p.title, "Hero Title"),
    ));
    let underlined = p.subtitle_underlined.unwrap_or(false);
    ctx.add_line(&format!(
        "<p style=\"font-size: {}px; line-height: {}; letter-spacing: {letter_spacing}; text-decoration: {}; text-underline-offset: {}; margin-bottom: 16px;\">{}</p>",
        num(p.subtitle_font_size, 17),
        float(p.line_height, 1.8),
        if underlined { "underline" } else { "none" },
        if underlined { "5px" } else { "auto" },
        or_esc(&p.subtitle, "Hero subtitle text"),
    ));
    ctx.add_line(&format!(
        "<button style=\"background-color: {}; color: {}; letter-spacing: 1.5px; padding: {}; font-family: {}; {} border-radius: 4px;\">{}</button>",
        button_background(style, &p.button_color, "#000000"),
        or_esc(&p.button_text_color, "#ffffff"),
        if style == ButtonStyle::Underlined { "15px 24px 5px" } else { "15px 24px" },
        or_esc(&p.font_family, FONT_SERIF),
        button_border(style, "#ffffff"),
        or_esc(&p.button_text, "Button"),
    ));
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</div>");
}

fn render_image_text_section(p: &ImageTextSectionProps, ctx: &mut Context) {
    let style = p.button_style.unwrap_or(ButtonStyle::Outlined);
    let line_height = float(p.line_height, 1.8);
    let letter_spacing = or_esc(&p.letter_spacing, "2px");

    ctx.add_line("<table width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">");
    ctx.indent();
    ctx.add_line("<tr>");
    ctx.indent();
    ctx.add_line("<td width=\"33.33%\" valign=\"top\" class=\"responsive-column\">");
    ctx.indent();
    ctx.add_line(&format!(
        "<img src=\"{}\" alt=\"{}\" style=\"width: 100%; height: auto;\" />",
        or_esc(&p.image_url, PLACEHOLDER_IMAGE),
        or_esc(&p.image_alt, "Image"),
    ));
    ctx.dedent();
    ctx.add_line("</td>");
    ctx.add_line(&format!(
        "<td width=\"66.67%\" valign=\"top\" class=\"responsive-column\" style=\"padding: 16px; color: {}; text-align: {}; font-family: {};\">",
        or_esc(&p.text_color, "#000000"),
        align(p.text_align, TextAlign::Left),
        or_esc(&p.font_family, FONT_SERIF),
    ));
    ctx.indent();
    ctx.add_line(&format!(
        "<h3 style=\"font-size: 18px; font-weight: bold; margin-bottom: 8px; line-height: {line_height}; letter-spacing: {letter_spacing};\">{}</h3>",
        or_esc(&p.title, "Section Title"),
    ));
    ctx.add_line(&format!(
        "<p style=\"font-size: {}px; font-weight: {}; line-height: {line_height}; letter-spacing: {letter_spacing};\">{}</p>",
        num(p.font_size, 17),
        or_esc(&p.font_weight, "normal"),
        or_esc(&p.text, "Section text content goes here"),
    ));
    ctx.add_line(&format!(
        "<button style=\"background-color: {}; color: {}; letter-spacing: 1.5px; padding: {}; font-family: {}; {} margin-top: 12px; border-radius: 4px;\">{}</button>",
        button_background(style, &p.button_color, "#1a82e2"),
        match style {
            ButtonStyle::Filled => or_esc(&p.button_text_color, "#ffffff"),
            _ => or_esc(&p.button_text_color, "#000000"),
        },
        if style == ButtonStyle::Underlined { "15px 24px 5px" } else { "8px 16px" },
        or_esc(&p.font_family, FONT_SERIF),
        button_border(style, "#000000"),
        or_esc(&p.button_text, "Button"),
    ));
    ctx.dedent();
    ctx.add_line("</td>");
    ctx.dedent();
    ctx.add_line("</tr>");
    ctx.dedent();
    ctx.add_line("</table>");
}

fn render_button_grid(p: &ButtonGridProps, ctx: &mut Context) {
    let style = p.button_style.unwrap_or(ButtonStyle::Outlined);
    let count = num(p.button_count, 3) as usize;
    let edge = or_esc(&p.button_color, "#000000");

    ctx.add_line(&format!(
        "<table width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"padding: {}px;\">",
        num(p.padding, 16)
    ));
    ctx.indent();
    ctx.add_line("<tbody>");
    ctx.indent();
    for index in 0..count {
        let text = match button_text_at(&p.buttons, index) {
            Some(text) => esc(text),
            None => format!("Button {}", index + 1),
        };

        ctx.add_line("<tr>");
        ctx.indent();
        ctx.add_line(&format!(
            "<td style=\"padding-bottom: {}px;\">",
            num(p.spacing, 8)
        ));
        ctx.indent();
        ctx.add_line("<table width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\"><tr><td align=\"center\">");
        ctx.indent();
        ctx.add_line(&format!(
            "<button style=\"background-color: {}; color: {}; width: 100%; height: auto; min-height: 48px; font-size: {}px; font-weight: {}; line-height: {}; letter-spacing: {}; {} padding: {}; text-decoration: none; white-space: pre-wrap;\">{text}</button>",
            button_background(style, &p.button_color, "#000000"),
            match style {
                ButtonStyle::Filled => or_esc(&p.button_text_color, "#ffffff"),
                _ => or_esc(&p.button_text_color, "#000000"),
            },
            num(p.font_size, 17),
            or_esc(&p.font_weight, "normal"),
            float(p.line_height, 1.8),
            or_esc(&p.letter_spacing, "1.5px"),
            button_border(style, &edge),
            if style == ButtonStyle::Underlined { "12px 24px 5px" } else { "12px 24px" },
        ));
        ctx.dedent();
        ctx.add_line("</td></tr></table>");
        ctx.dedent();
        ctx.add_line("</td>");
        ctx.dedent();
        ctx.add_line("</tr>");
    }
    ctx.dedent();
    ctx.add_line("</tbody>");
    ctx.dedent();
    ctx.add_line("</table>");
}

fn render_single_button(p: &SingleButtonProps, ctx: &mut Context) {
    let style = p.button_style.unwrap_or(ButtonStyle::Outlined);
    let text = or_esc(&p.button_text, "Click Here To Join");
    let font_family = or_esc(&p.font_family, FONT_SERIF);
    let font_size = num(p.font_size, 17);
    let font_weight = or_esc(&p.font_weight, "normal");
    let letter_spacing = or_esc(&p.letter_spacing, "1.5px");

    ctx.add_line("<div style=\"padding: 16px; text-align: center;\">");
    ctx.indent();
    ctx.add_line("<div style=\"display: inline-block; position: relative; text-align: center;\">");
    ctx.indent();

    // The underlined face draws its own rule below; the button itself only
    // carries a border when outlined
    let border = match style {
        ButtonStyle::Outlined => {
            "border-width: 1px; border-style: solid; border-color: #000000;"
        }
        _ => "border-width: 0; border-style: none; border-color: transparent;",
    };
    ctx.add_line(&format!(
        "<button style=\"background-color: {}; color: {}; font-family: {font_family}; font-size: {font_size}px; font-weight: {font_weight}; line-height: {}; letter-spacing: {letter_spacing}; padding: 12px 24px; {border} text-decoration: none; min-width: 200px; white-space: pre-wrap;\">{text}</button>",
        button_background(style, &p.button_color, "#000000"),
        match style {
            ButtonStyle::Filled => or_esc(&p.button_text_color, "#ffffff"),
            _ => or_esc(&p.button_text_color, "#000000"),
        },
        float(p.line_height, 1.8),
    ));

    if style == ButtonStyle::Underlined {
        // Hidden span sizes the rule to the button text width
        ctx.add_line(&format!(
            "<div style=\"position: absolute; bottom: 0; left: 50%; transform: translateX(-50%); width: auto; border-bottom: 1px solid; border-color: {}; margin-top: 5px; padding: 0;\">",
            or_esc(&p.button_color, "#000000"),
        ));
        ctx.indent();
        ctx.add_line(&format!(
            "<span style=\"visibility: hidden; font-family: {font_family}; font-size: {font_size}px; font-weight: {font_weight}; letter-spacing: {letter_spacing}; white-space: pre-wrap; display: inline-block; padding: 0;\">{text}</span>"
        ));
        ctx.dedent();
        ctx.add_line("</div>");
    }

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</div>");
}

const FOOTER_NAV_LINKS: [&str; 4] = ["New In", "Dresses", "Shoes", "Bags"];
const FOOTER_SERVICE_LINKS: [&str; 4] = [
    "Delivery Information",
    "Pay With Klarna",
    "Call &amp; Shop",
    "Returns &amp; Refunds",
];
const FOOTER_SOCIAL_LINKS: [&str; 4] = ["Instagram", "Facebook", "Pinterest", "Twitter"];

/// One 155px service card: icon cell, spacer, label. The original ships an
/// inline SVG in the icon cell; a text glyph stands in, same skeleton.
fn render_service_card(label: &str, ctx: &mut Context) {
    ctx.add_line("<td align=\"left\" style=\"vertical-align: top;\">");
    ctx.indent();
    ctx.add_line("<table cellpadding=\"0\" cellspacing=\"0\" width=\"155\"><tbody>");
    ctx.indent();
    ctx.add_line("<tr><td height=\"45\" align=\"center\" style=\"vertical-align: middle;\">");
    ctx.indent();
    ctx.add_line("<a href=\"#\" target=\"_blank\" style=\"text-decoration: none; font-weight: normal; color: #000000;\" rel=\"noreferrer\"><span style=\"font-size: 30px; line-height: 1;\">&#9679;</span></a>");
    ctx.dedent();
    ctx.add_line("</td></tr>");
    ctx.add_line("<tr><td height=\"15\"></td></tr>");
    ctx.add_line("<tr><td align=\"center\" style=\"line-height: 1.2;\">");
    ctx.indent();
    ctx.add_line(&format!(
        "<a href=\"#\" target=\"_blank\" style=\"color: #000000; text-decoration: none; font-weight: normal;\" rel=\"noreferrer\"><span style=\"font-family: 'Lato', Arial, Helvetica, sans-serif; font-size: 12px; color: #000000; font-weight: normal; line-height: 1.2;\">{label}</span></a>"
    ));
    ctx.dedent();
    ctx.add_line("</td></tr>");
    ctx.add_line("<tr><td height=\"35\"></td></tr>");
    ctx.dedent();
    ctx.add_line("</tbody></table>");
    ctx.dedent();
    ctx.add_line("</td>");
}

fn render_footer(p: &FooterProps, ctx: &mut Context) {
    let link_color = or_esc(&p.link_color, "#1a82e2");

    ctx.add_line("<!-- Footer -->");
    ctx.add_line(&format!(
        "<table width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" style=\"max-width: {CONTAINER_WIDTH}px; margin: 0 auto;\">"
    ));
    ctx.indent();
    ctx.add_line("<tbody>");
    ctx.indent();

    // Top black navigation bar
    ctx.add_line("<tr><td bgcolor=\"#000000\">");
    ctx.indent();
    ctx.add_line("<table cellpadding=\"0\" cellspacing=\"0\" width=\"100%\"><tbody><tr>");
    ctx.indent();
    ctx.add_line("<td align=\"center\" style=\"padding: 15px; background: #000000;\">");
    ctx.indent();
    ctx.add_line("<table cellpadding=\"0\" cellspacing=\"0\"><tbody><tr>");
    ctx.indent();
    for (i, label) in FOOTER_NAV_LINKS.iter().enumerate() {
        if i > 0 {
            ctx.add_line("<td width=\"80\"></td>");
        }
        ctx.add_line("<td align=\"left\" style=\"line-height: 1.2; vertical-align: top;\">");
        ctx.indent();
        ctx.add_line(&format!(
            "<a href=\"#\" target=\"_blank\" style=\"color: #ffffff; text-decoration: none; font-weight: normal;\" rel=\"noreferrer\"><span style=\"font-family: Georgia, Times, serif; font-size: 14px; color: #ffffff; line-height: 1.2;\">{label}</span></a>"
        ));
        ctx.dedent();
        ctx.add_line("</td>");
    }
    ctx.dedent();
    ctx.add_line("</tr></tbody></table>");
    ctx.dedent();
    ctx.add_line("</td>");
    ctx.dedent();
    ctx.add_line("</tr></tbody></table>");
    ctx.dedent();
    ctx.add_line("</td></tr>");

    // Spacer
    ctx.add_line("<tr><td height=\"30\"></td></tr>");

    // Service cards, two column groups of two
    ctx.add_line("<tr><td bgcolor=\"#ffffff\">");
    ctx.indent();
    ctx.add_line("<table cellpadding=\"0\" cellspacing=\"0\" width=\"100%\"><tbody><tr>");
    ctx.indent();
    for (i, pair) in FOOTER_SERVICE_LINKS.chunks(2).enumerate() {
        if i > 0 {
            ctx.add_line("<th width=\"10\" style=\"padding: 0; margin: 0; border: 0; font-weight: normal; vertical-align: top;\"></th>");
        }
        ctx.add_line("<th align=\"left\" style=\"padding: 0; margin: 0; border: 0; font-weight: normal; vertical-align: top;\">");
        ctx.indent();
        ctx.add_line("<table cellpadding=\"0\" cellspacing=\"0\" width=\"100%\"><tbody><tr>");
        ctx.indent();
        for (j, label) in pair.iter().enumerate() {
            if j > 0 {
                ctx.add_line("<td width=\"10\"></td>");
            }
            render_service_card(label, ctx);
        }
        ctx.dedent();
        ctx.add_line("</tr></tbody></table>");
        ctx.dedent();
        ctx.add_line("</th>");
    }
    ctx.dedent();
    ctx.add_line("</tr></tbody></table>");
    ctx.dedent();
    ctx.add_line("</td></tr>");

    // Social links
    ctx.add_line("<tr><td bgcolor=\"#ffffff\">");
    ctx.indent();
    ctx.add_line("<table cellpadding=\"0\" cellspacing=\"0\" width=\"100%\"><tbody>");
    ctx.indent();
    ctx.add_line("<tr><td height=\"30\"></td></tr>");
    ctx.add_line("<tr><td align=\"center\">");
    ctx.indent();
    ctx.add_line("<table cellpadding=\"0\" cellspacing=\"0\"><tbody><tr>");
    ctx.indent();
    for (i, label) in FOOTER_SOCIAL_LINKS.iter().enumerate() {
        if i > 0 {
            ctx.add_line("<td width=\"20\"></td>");
        }
        ctx.add_line(&format!(
            "<td width=\"40\" align=\"center\"><a href=\"#\" target=\"_blank\" style=\"text-decoration: none; color: #000000; font-family: Georgia, Times, serif; font-size: 12px;\">{label}</a></td>"
        ));
    }
    ctx.dedent();
    ctx.add_line("</tr></tbody></table>");
    ctx.dedent();
    ctx.add_line("</td></tr>");
    ctx.add_line("<tr><td height=\"30\"></td></tr>");
    ctx.dedent();
    ctx.add_line("</tbody></table>");
    ctx.dedent();
    ctx.add_line("</td></tr>");

    // Legal footer
    ctx.add_line(&format!(
        "<tr><td bgcolor=\"{}\" style=\"padding: 30px 20px; text-align: center; color: {}; font-family: Arial, sans-serif; font-size: 12px;\">",
        or_esc(&p.background_color, "#f8f9fa"),
        or_esc(&p.text_color, "#666666"),
    ));
    ctx.indent();
    ctx.add_line(&format!(
        "<p style=\"margin: 0 0 10px 0;\">&copy; {} {}. All rights reserved.</p>",
        ctx.options.copyright_year,
        or_esc(&p.company_name, "Your Company"),
    ));
    ctx.add_line(&format!(
        "<p style=\"margin: 0 0 10px 0;\"><a href=\"{}\" style=\"color: {link_color}; text-decoration: underline;\">Privacy Policy</a> | <a href=\"{}\" style=\"color: {link_color}; text-decoration: underline;\">Unsubscribe</a></p>",
        or_esc(&p.privacy_url, "#"),
        or_esc(&p.unsubscribe_url, "#"),
    ));
    ctx.add_line(&format!(
        "<p style=\"margin: 0;\">If you have any questions, please contact us at <a href=\"mailto:support@example.com\" style=\"color: {link_color}; text-decoration: underline;\">support@example.com</a></p>"
    ));
    ctx.dedent();
    ctx.add_line("</td></tr>");

    ctx.dedent();
    ctx.add_line("</tbody>");
    ctx.dedent();
    ctx.add_line("</table>");
}
