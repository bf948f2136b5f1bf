//! Configuration constants for webfont kit detection.
//!
//! File names are relative to the kit root unless noted otherwise.

/// Fonts.com multi-font kit listing (one `<font>` row per style).
pub const FONT_LIST_XML: &str = "fontlist.xml";

/// Directory holding the font binaries named in `fontlist.xml`.
pub const FONT_LIST_FONT_DIR: &str = "Fonts";

/// Monotype (Fonts.com, Linotype) demo page.
pub const DEMO_ASYNC_HTML: &str = "demo-async.htm";

/// Monotype (Fonts.com, Linotype) stylesheet.
pub const DEMO_ASYNC_CSS: &str = "demo-async.css";

/// Monotype tracking script shipped with multi-font kits.
pub const MTI_TRACKING_SCRIPT: &str = "mtiFontTrackingCode.js";

/// Heading that marks a Fonts.com demo page.
pub const FONTS_COM_BANNER: &str = r#"<h1 class="demo">Fonts.com Web fonts</h1>"#;

/// Heading that marks a Linotype demo page.
pub const LINOTYPE_BANNER: &str = r#"<h1 class="demo">Linotype.com Web Fonts</h1>"#;

/// Font Squirrel generator settings file.
pub const FONT_SQUIRREL_CONFIG: &str = "generator_config.txt";

/// First line of a Font Squirrel generator settings file.
pub const FONT_SQUIRREL_BANNER: &str = "# Font Squirrel Font-face Generator Configuration File";

/// Stylesheet name used by Font Squirrel and Transfonter.
pub const STYLESHEET_CSS: &str = "stylesheet.css";

/// Copyright link found in FontShop (FontFont) specimen pages.
pub const FONT_SHOP_COPYRIGHT_LINK: &str =
    r#"<link rel="copyright" href="http://www.fontfont.com/""#;

/// MyFonts stylesheet.
pub const MY_FONTS_CSS: &str = "MyFontsWebfontsKit/MyFontsWebfontsKit.css";

/// MyFonts specimen page.
pub const MY_FONTS_HTML: &str = "MyFontsWebfontsKit/StartHere.html";

/// Marker inside the MyFonts license comment.
pub const MY_FONTS_BUILD_ID: &str = "MyFonts Webfont Build ID";

/// Transfonter demo page.
pub const TRANSFONTER_HTML: &str = "demo.html";

/// Title of a Transfonter demo page.
pub const TRANSFONTER_TITLE: &str = "<title>Transfonter demo</title>";

/// Kit format versions recorded on the generated fonts.
pub const FONT_SQUIRREL_KIT_VERSION: &str = "2017";
pub const FONT_SHOP_KIT_VERSION: &str = "2013";
pub const TRANSFONTER_KIT_VERSION: &str = "0";

/// Label used for the style whose name equals its family name.
pub const REGULAR_LABEL: &str = "Regular";

/// Default height of the font preview image.
pub const IMAGE_HEIGHT: &str = "25px";
