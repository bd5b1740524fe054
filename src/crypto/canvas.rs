//! Off-screen drawing surface used for fingerprinting.
//!
//! Text is laid out with the fonts installed on the machine, so the pixels
//! (and therefore the encoded image) depend on the environment.

use crate::config::FingerprintSettings;
use crate::config::constants::DATA_URL_PREFIX;
use crate::error::{DeviceIdError, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use resvg::{tiny_skia, usvg};
use std::sync::Arc;

/// Fonts available for rendering
pub type FontDatabase = Arc<usvg::fontdb::Database>;

/// Load every font installed on the system
pub fn system_fonts() -> FontDatabase {
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    tracing::debug!("Loaded {} system font faces", fontdb.len());
    Arc::new(fontdb)
}

/// Draw the configured text and return the surface as a PNG data URL
pub fn render_data_url(settings: &FingerprintSettings, fonts: FontDatabase) -> Result<String> {
    let png = render_png(settings, fonts)?;
    Ok(format!("{}{}", DATA_URL_PREFIX, STANDARD.encode(png)))
}

/// Draw the configured text and encode the surface as PNG
pub fn render_png(settings: &FingerprintSettings, fonts: FontDatabase) -> Result<Vec<u8>> {
    let svg = surface_svg(settings);

    let options = usvg::Options {
        font_family: settings.font_family.clone(),
        font_size: settings.font_size,
        languages: vec!["en".to_string()],
        fontdb: fonts,
        ..usvg::Options::default()
    };

    let tree = usvg::Tree::from_str(&svg, &options)
        .map_err(|e| DeviceIdError::render(format!("Failed to parse surface: {}", e)))?;

    let Some(mut pixmap) = tiny_skia::Pixmap::new(settings.width, settings.height) else {
        return Err(DeviceIdError::render(format!(
            "Cannot allocate a {}x{} surface",
            settings.width, settings.height
        )));
    };

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| DeviceIdError::render(format!("Failed to encode surface: {}", e)))
}

/// Surface description: transparent background, black text anchored at its
/// top edge.
fn surface_svg(settings: &FingerprintSettings) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}">"#,
            r#"<text x="{x}" y="{y}" font-family="{family}" font-size="{size}" "#,
            r##"dominant-baseline="text-before-edge" fill="#000000">{text}</text>"##,
            "</svg>"
        ),
        w = settings.width,
        h = settings.height,
        x = settings.x,
        y = settings.y,
        family = escape_xml(&settings.font_family),
        size = settings.font_size,
        text = escape_xml(&settings.text),
    )
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
        assert_eq!(escape_xml("UniqueDeviceFingerprint"), "UniqueDeviceFingerprint");
    }

    #[test]
    fn test_surface_svg_contains_text() {
        let svg = surface_svg(&FingerprintSettings::default());

        assert!(svg.contains(r#"width="300" height="150""#));
        assert!(svg.contains(">UniqueDeviceFingerprint</text>"));
        assert!(svg.contains(r#"font-family="Arial""#));
        assert!(svg.contains(r##"dominant-baseline="text-before-edge" fill="#000000">"##));
        assert!(svg.ends_with("</text></svg>"));
    }

    #[test]
    fn test_render_png_dimensions() {
        let settings = FingerprintSettings::default();
        let png = render_png(&settings, system_fonts()).unwrap();

        assert_eq!(&png[..8], &PNG_SIGNATURE);
        // IHDR: width and height follow the chunk length and type
        assert_eq!(&png[16..20], &300u32.to_be_bytes());
        assert_eq!(&png[20..24], &150u32.to_be_bytes());
    }

    #[test]
    fn test_render_data_url_prefix() {
        let url = render_data_url(&FingerprintSettings::default(), system_fonts()).unwrap();
        assert!(url.starts_with("data:image/png;base64,iVBORw0KGgo"));
    }
}
