//! Vendor kit fixtures written into temporary directories.

use std::{
    fs::{create_dir_all, read_to_string, write},
    path::Path,
};

use tempfile::tempdir;
use webfont_kit_core::{
    Error, FontProvider, FontVariation, KitCode, KitKind, detect_kit_kind, generate_meta,
};

fn write_kit(dir: &Path, files: &[(&str, &str)]) {
    for (name, body) in files {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            create_dir_all(parent).expect("create kit dir");
        }
        write(&path, body).expect("write kit file");
    }
}

const MONOTYPE_LICENSE: &str = "/*\nThis CSS resource incorporates links to font software which is the valuable copyrighted\nproperty of Monotype Imaging and/or its suppliers.\n*/";

const MONOTYPE_TRACKER: &str = "var MTIProjectId='6fc2ae63-066d-4f3c-84da-3076aa2d1b6c';\n (function() {\n        var mtiTracking = document.createElement('script');\n   })();";

fn monotype_demo_page(banner: &str, family: &str, display: &str) -> String {
    format!(
        "<html>\r\n<head>\r\n<script type=\"text/javascript\">\r\n{tracker}\r\n</script>\r\n</head>\r\n<body>\r\n\
         {banner}\r\n<pre>{license}</pre>\r\n\
         <div class=\"fontdisplay\">\r\n    <div style=\"font-family:'{family}';\"> {display} </div>\r\n</div>\r\n\
         </body>\r\n</html>\r\n",
        tracker = MONOTYPE_TRACKER.replace('\n', "\r\n"),
        license = MONOTYPE_LICENSE.replace('\n', "\r\n"),
    )
}

const FONTS_COM_CSS: &str = "@import url(//fast.fonts.net/t/1.css?apiType=css&projectid=6fc2ae63);\r\n\
@font-face{\r\n\
font-family:\"Tabula ITC W01 Book\";\r\n\
src:url(\"Fonts/fcccbee8.eot?#iefix\");\r\n\
src:url(\"Fonts/fcccbee8.eot?#iefix\") format(\"eot\"),url(\"Fonts/043503c4.woff\") format(\"woff\"),url(\"Fonts/9682b901.ttf\") format(\"truetype\"),url(\"Fonts/92ab452d.svg#92ab452d\") format(\"svg\");\r\n\
}\r\n";

#[test]
fn fonts_com_single_font() {
    let tmp = tempdir().expect("tempdir");
    let page = monotype_demo_page(
        r#"<h1 class="demo">Fonts.com Web fonts</h1>"#,
        "Tabula ITC W01 Book",
        "ITC Tabula™ W01 Book",
    );
    write_kit(tmp.path(), &[("demo-async.htm", &page), ("demo-async.css", FONTS_COM_CSS)]);

    assert_eq!(detect_kit_kind(tmp.path()).unwrap(), Some(KitKind::FontsCom));

    let metas = generate_meta(tmp.path()).expect("meta");
    assert_eq!(metas.len(), 1);
    let meta = &metas[0];
    assert_eq!(meta.dir, tmp.path());
    assert_eq!(
        meta.files,
        [
            "demo-async.css",
            "Fonts/fcccbee8.eot",
            "Fonts/043503c4.woff",
            "Fonts/9682b901.ttf",
            "Fonts/92ab452d.svg",
        ]
    );

    let font = &meta.font;
    assert_eq!(font.display_name, "ITC Tabula™ W01 Book");
    assert_eq!(font.font_family, "Tabula ITC W01 Book");
    assert_eq!(font.font_provider, FontProvider::FontsCom);
    assert_eq!(font.font_provider_web_site, "fonts.com");
    assert_eq!(font.kit_version, None);
    assert_eq!(font.selected_variation, None);
    assert_eq!(
        font.variations,
        [FontVariation::new("ITC Tabula™ W01 Book", "Tabula ITC W01 Book")]
    );

    let import = font.import.as_ref().expect("import");
    assert_eq!(
        import.code,
        KitCode {
            license_text: Some(MONOTYPE_LICENSE.into()),
            tracker_script: Some(MONOTYPE_TRACKER.into()),
        }
    );
    assert_eq!(import.url_base, "");
}

const FONT_LIST_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<fonts>
  <font CssFamilyName="Toyota Type Semibold" displayName="Toyota Type Semibold" FamilyName="Toyota Type" FontStretch="normal" FontStyle="normal" FontWeight="600" psName="ToyotaType-Semibold" eot="aaa.eot" svg="aaa.svg" ttf="aaa.ttf" woff="aaa.woff" woff2="aaa.woff2" />
  <font CssFamilyName="Toyota Type" displayName="Toyota Type Regular" FamilyName="Toyota Type" FontStretch="normal" FontStyle="normal" FontWeight="400" psName="ToyotaType-Regular" eot="bbb.eot" svg="bbb.svg" ttf="bbb.ttf" woff="bbb.woff" woff2="bbb.woff2" />
  <font CssFamilyName="Toyota Type Book" displayName="Toyota Type Book" FamilyName="Toyota Type" FontStretch="normal" FontStyle="normal" FontWeight="300" psName="ToyotaType-Book" eot="aaa.eot" svg="ccc.svg" ttf="ccc.ttf" woff="ccc.woff" woff2="ccc.woff2" />
</fonts>
"#;

#[test]
fn fonts_com_multi_font() {
    let tmp = tempdir().expect("tempdir");
    let page = monotype_demo_page(
        r#"<h1 class="demo">Fonts.com Web fonts</h1>"#,
        "Toyota Type",
        "Toyota Type",
    );
    write_kit(
        tmp.path(),
        &[
            ("fontlist.xml", FONT_LIST_XML),
            ("demo-async.htm", &page),
            (
                "demo-async.css",
                "@font-face{font-family:\"Toyota Type\";src:url(\"Fonts/bbb.woff\");}",
            ),
            ("mtiFontTrackingCode.js", "// tracking"),
        ],
    );

    assert_eq!(detect_kit_kind(tmp.path()).unwrap(), Some(KitKind::FontsComMulti));

    let metas = generate_meta(tmp.path()).expect("meta");
    assert_eq!(metas.len(), 1);
    let meta = &metas[0];
    assert_eq!(
        meta.files,
        [
            "demo-async.css",
            "mtiFontTrackingCode.js",
            "Fonts/aaa.eot",
            "Fonts/aaa.svg",
            "Fonts/aaa.ttf",
            "Fonts/aaa.woff",
            "Fonts/aaa.woff2",
            "Fonts/bbb.eot",
            "Fonts/bbb.svg",
            "Fonts/bbb.ttf",
            "Fonts/bbb.woff",
            "Fonts/bbb.woff2",
            "Fonts/ccc.svg",
            "Fonts/ccc.ttf",
            "Fonts/ccc.woff",
            "Fonts/ccc.woff2",
        ]
    );

    let font = &meta.font;
    assert_eq!(font.display_name, "Toyota Type");
    assert_eq!(font.font_family, "Toyota Type");
    assert_eq!(
        font.variations,
        [
            FontVariation::new("Semibold", "Toyota Type Semibold"),
            FontVariation::new("Regular", "Toyota Type"),
            FontVariation::new("Book", "Toyota Type Book"),
        ]
    );
    let code = &font.import.as_ref().expect("import").code;
    assert_eq!(code.license_text.as_deref(), Some(MONOTYPE_LICENSE));
}

#[test]
fn font_list_wins_over_other_markers() {
    let tmp = tempdir().expect("tempdir");
    write_kit(
        tmp.path(),
        &[
            ("fontlist.xml", FONT_LIST_XML),
            ("generator_config.txt", "# Font Squirrel Font-face Generator Configuration File\n"),
        ],
    );

    assert_eq!(detect_kit_kind(tmp.path()).unwrap(), Some(KitKind::FontsComMulti));
}

const FONT_SQUIRREL_CONFIG: &str =
    "# Font Squirrel Font-face Generator Configuration File\n# Upload this file to the generator to recreate the settings\n# you used to create these fonts.\n\n{\"mode\":\"optimal\"}\n";

#[test]
fn font_squirrel_single_font() {
    let tmp = tempdir().expect("tempdir");
    write_kit(
        tmp.path(),
        &[
            ("generator_config.txt", FONT_SQUIRREL_CONFIG),
            (
                "stylesheet.css",
                "/*! Generated by Font Squirrel (https://www.fontsquirrel.com) on June 1, 2017 */\n\n\
                 @font-face {\n    font-family: 'interstatelight';\n\
                 \x20   src: url('interstate-light-webfont.eot');\n\
                 \x20   src: url('interstate-light-webfont.eot?#iefix') format('embedded-opentype'),\n\
                 \x20        url('interstate-light-webfont.woff2') format('woff2'),\n\
                 \x20        url('interstate-light-webfont.woff') format('woff');\n\
                 \x20   font-weight: normal;\n    font-style: normal;\n\n}\n",
            ),
            ("interstate-light-demo.html", "<div id=\"header\">\n    Interstate Light\n</div>"),
            ("specimen_files/specimen_stylesheet.css", "body {}"),
        ],
    );

    assert_eq!(detect_kit_kind(tmp.path()).unwrap(), Some(KitKind::FontSquirrel));

    let metas = generate_meta(tmp.path()).expect("meta");
    assert_eq!(metas.len(), 1);
    assert_eq!(
        metas[0].files,
        [
            "stylesheet.css",
            "interstate-light-webfont.eot",
            "interstate-light-webfont.woff2",
            "interstate-light-webfont.woff",
        ]
    );

    let font = &metas[0].font;
    assert_eq!(font.display_name, "Interstate Light");
    assert_eq!(font.font_family, "interstatelight");
    assert_eq!(font.font_provider, FontProvider::FontSquirrel);
    assert_eq!(font.kit_version.as_deref(), Some("2017"));
    assert_eq!(font.import.as_ref().expect("import").code, KitCode::default());
}

#[test]
fn font_squirrel_multi_font() {
    let tmp = tempdir().expect("tempdir");
    write_kit(
        tmp.path(),
        &[
            ("generator_config.txt", FONT_SQUIRREL_CONFIG),
            (
                "stylesheet.css",
                "@font-face { font-family: 'jjbold_italic'; src: url('jj_bd_it-webfont.woff2') format('woff2'), url('jj_bd_it-webfont.woff') format('woff'); }\n\
                 @font-face { font-family: 'jjregular'; src: url('jj_rg-webfont.woff2') format('woff2'), url('jj_rg-webfont.woff') format('woff'); }\n",
            ),
            ("jj_bd_it-demo.html", r#"<div id="header">JJ Bold Italic</div>"#),
            ("jj_rg-demo.html", r#"<div id="header">JJ Regular</div>"#),
        ],
    );

    let metas = generate_meta(tmp.path()).expect("meta");
    let names: Vec<_> = metas.iter().map(|meta| meta.font.display_name.as_str()).collect();
    assert_eq!(names, ["JJ Bold Italic", "JJ Regular"]);
    assert_eq!(metas[1].files, ["stylesheet.css", "jj_rg-webfont.woff2", "jj_rg-webfont.woff"]);
    assert_eq!(metas[1].font.variations, [FontVariation::new("JJ Regular", "jjregular")]);
}

#[test]
fn font_squirrel_without_html_fails() {
    let tmp = tempdir().expect("tempdir");
    write_kit(
        tmp.path(),
        &[
            ("generator_config.txt", FONT_SQUIRREL_CONFIG),
            ("stylesheet.css", "@font-face { font-family: 'a'; src: url('a-webfont.woff'); }"),
        ],
    );

    let err = generate_meta(tmp.path()).unwrap_err();
    assert!(matches!(err, Error::MissingHtml), "{err}");
}

#[test]
fn font_shop_writes_stylesheets() {
    let tmp = tempdir().expect("tempdir");
    let page = |family: &str| {
        format!(
            "<html><head><link rel=\"copyright\" href=\"http://www.fontfont.com/\" title=\"Copyright\"></head>\
             <body><h2>{family}</h2></body></html>"
        )
    };
    write_kit(
        tmp.path(),
        &[
            ("320998/Dr Carbfred.html", &page("DrCarbfred")),
            ("320998/Dr CarbfredWeb.woff", "woff"),
            ("320998/Dr Bold.html", &page("DrBold")),
            ("320998/Dr BoldWeb.woff", "woff"),
        ],
    );

    assert_eq!(detect_kit_kind(tmp.path()).unwrap(), Some(KitKind::FontShop));

    let metas = generate_meta(tmp.path()).expect("meta");
    assert_eq!(metas.len(), 2);

    let kit_dir = tmp.path().join("320998");
    let meta = &metas[1];
    assert_eq!(meta.dir, kit_dir);
    assert_eq!(meta.files, ["Dr Carbfred.css", "Dr CarbfredWeb.woff"]);
    assert_eq!(meta.font.display_name, "Dr Carbfred");
    assert_eq!(meta.font.font_family, "DrCarbfred");
    assert_eq!(meta.font.kit_version.as_deref(), Some("2013"));
    assert_eq!(metas[0].font.display_name, "Dr Bold");

    let css = read_to_string(kit_dir.join("Dr Carbfred.css")).expect("generated css");
    assert_eq!(
        css,
        "@font-face {\n  font-family: DrCarbfred;\n  src: url(\"Dr CarbfredWeb.woff\") format(\"woff\");\n}\n"
    );

    // Stylesheets are regenerated with the same content.
    assert_eq!(generate_meta(tmp.path()).expect("second run"), metas);
}

#[test]
fn font_shop_needs_a_single_sub_dir() {
    let tmp = tempdir().expect("tempdir");
    let page = r#"<link rel="copyright" href="http://www.fontfont.com/" title="Copyright"><h2>A</h2>"#;
    write_kit(tmp.path(), &[("one/A.html", page), ("two/B.html", page)]);

    assert_eq!(detect_kit_kind(tmp.path()).unwrap(), None);
}

#[test]
fn linotype_font() {
    let tmp = tempdir().expect("tempdir");
    let page = monotype_demo_page(
        r#"<h1 class="demo">Linotype.com Web Fonts</h1>"#,
        "Avenir LT W01 35 Light",
        "Avenir® 35 Light",
    );
    write_kit(
        tmp.path(),
        &[
            ("demo-async.htm", &page),
            (
                "demo-async.css",
                "@font-face{\nfont-family:\"Avenir LT W01 35 Light\";\nsrc:url(\"Fonts/edefe737.eot?#iefix\");\nsrc:url(\"Fonts/edefe737.eot?#iefix\") format(\"eot\"),url(\"Fonts/0078f486.woff2\") format(\"woff2\");\n}\n",
            ),
        ],
    );

    assert_eq!(detect_kit_kind(tmp.path()).unwrap(), Some(KitKind::Linotype));

    let metas = generate_meta(tmp.path()).expect("meta");
    assert_eq!(metas[0].files, ["demo-async.css", "Fonts/edefe737.eot", "Fonts/0078f486.woff2"]);
    assert_eq!(metas[0].font.display_name, "Avenir® 35 Light");
    assert_eq!(metas[0].font.font_provider_web_site, "linotype.com");
    assert!(metas[0].font.import.as_ref().expect("import").code.tracker_script.is_some());
}

const MY_FONTS_CSS: &str = "/**\n * @license\n * MyFonts Webfont Build ID 2853875, 2014-07-28T13:44:50-0400\n * \n * Webfont: Quire Sans Extra Light Italic by Monotype \n * © 2014 MyFonts Inc\n*/\n\n\n\
/* @import must be at top of file, otherwise CSS will not work */\n\
@import url(\"//hello.myfonts.net/count/2b8bf3\");\n\n\
@font-face {font-family: 'QuireSansW04-ExtraLightIt';src: url('webfonts/2B8BF3_0_0.eot');src: url('webfonts/2B8BF3_0_0.eot?#iefix') format('embedded-opentype'),url('webfonts/2B8BF3_0_0.woff') format('woff'),url('webfonts/2B8BF3_0_0.ttf') format('truetype');}\n";

#[test]
fn my_fonts_font() {
    let tmp = tempdir().expect("tempdir");
    write_kit(
        tmp.path(),
        &[
            ("MyFontsWebfontsKit/MyFontsWebfontsKit.css", MY_FONTS_CSS),
            (
                "MyFontsWebfontsKit/StartHere.html",
                "<span class=\"QuireSansW04-ExtraLightIt\" contenteditable=\"true\">\n  Quire Sans Extra Light Italic\n</span>",
            ),
        ],
    );

    assert_eq!(detect_kit_kind(tmp.path()).unwrap(), Some(KitKind::MyFonts));

    let metas = generate_meta(tmp.path()).expect("meta");
    assert_eq!(metas.len(), 1);
    assert_eq!(
        metas[0].files,
        [
            "MyFontsWebfontsKit/MyFontsWebfontsKit.css",
            "MyFontsWebfontsKit/webfonts/2B8BF3_0_0.eot",
            "MyFontsWebfontsKit/webfonts/2B8BF3_0_0.woff",
            "MyFontsWebfontsKit/webfonts/2B8BF3_0_0.ttf",
        ]
    );

    let font = &metas[0].font;
    assert_eq!(font.display_name, "Quire Sans Extra Light Italic");
    assert_eq!(font.font_family, "QuireSansW04-ExtraLightIt");
    assert_eq!(font.font_provider_web_site, "myfonts.com");

    let license = font.import.as_ref().expect("import").code.license_text.clone().expect("license");
    assert!(license.starts_with("/**\n * @license\n * MyFonts Webfont Build ID 2853875"));
    assert!(license.ends_with("© 2014 MyFonts Inc\n*/"));
}

#[test]
fn my_fonts_stylesheet_without_build_id_is_not_detected() {
    let tmp = tempdir().expect("tempdir");
    write_kit(tmp.path(), &[("MyFontsWebfontsKit/MyFontsWebfontsKit.css", "@font-face {}")]);

    assert_eq!(detect_kit_kind(tmp.path()).unwrap(), None);
}

const TRANSFONTER_CSS: &str = "@font-face {\n\tfont-family: 'Roboto Slab';\n\tsrc: url('RobotoSlab-Bold.eot');\n\tsrc: local('Roboto Slab Bold'), local('RobotoSlab-Bold'),\n\t\turl('RobotoSlab-Bold.eot?#iefix') format('embedded-opentype'),\n\t\turl('RobotoSlab-Bold.woff') format('woff');\n\tfont-weight: bold;\n\tfont-style: normal;\n}\n";

#[test]
fn transfonter_font() {
    let tmp = tempdir().expect("tempdir");
    write_kit(
        tmp.path(),
        &[
            (
                "demo.html",
                "<html><head><title>Transfonter demo</title></head>\
                 <body><h1>Roboto Slab Bold</h1></body></html>",
            ),
            ("stylesheet.css", TRANSFONTER_CSS),
        ],
    );

    assert_eq!(detect_kit_kind(tmp.path()).unwrap(), Some(KitKind::Transfonter));

    let metas = generate_meta(tmp.path()).expect("meta");
    assert_eq!(metas[0].files, ["stylesheet.css", "RobotoSlab-Bold.eot", "RobotoSlab-Bold.woff"]);
    assert_eq!(metas[0].font.display_name, "Roboto Slab Bold");
    assert_eq!(metas[0].font.font_family, "Roboto Slab");
    assert_eq!(metas[0].font.kit_version.as_deref(), Some("0"));
}

#[test]
fn transfonter_with_two_rules_is_ambiguous() {
    let tmp = tempdir().expect("tempdir");
    let css = format!("{TRANSFONTER_CSS}{}", TRANSFONTER_CSS.replace("Bold", "Light"));
    write_kit(
        tmp.path(),
        &[
            ("demo.html", "<title>Transfonter demo</title><h1>Roboto Slab</h1>"),
            ("stylesheet.css", &css),
        ],
    );

    let err = generate_meta(tmp.path()).unwrap_err();
    assert!(matches!(err, Error::Css(webfont_kit_css::Error::Ambiguous)), "{err}");
}

#[test]
fn unquoted_family_is_rejected() {
    let tmp = tempdir().expect("tempdir");
    write_kit(
        tmp.path(),
        &[
            ("demo.html", "<title>Transfonter demo</title><h1>Roboto Slab</h1>"),
            ("stylesheet.css", "@font-face { font-family: Roboto; src: url('a.woff'); }"),
        ],
    );

    let err = generate_meta(tmp.path()).unwrap_err();
    assert!(matches!(err, Error::MissingFontFamily), "{err}");
}

#[test]
fn empty_directory_is_unsupported() {
    let tmp = tempdir().expect("tempdir");

    assert_eq!(detect_kit_kind(tmp.path()).unwrap(), None);
    for kind in KitKind::ALL {
        assert!(!kind.detect(tmp.path()).unwrap(), "{kind} accepted an empty directory");
    }

    let err = generate_meta(tmp.path()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedKit { .. }), "{err}");
}

#[test]
fn repeated_runs_give_the_same_metadata() {
    let tmp = tempdir().expect("tempdir");
    write_kit(
        tmp.path(),
        &[
            ("demo.html", "<title>Transfonter demo</title><h1>Roboto Slab Bold</h1>"),
            ("stylesheet.css", TRANSFONTER_CSS),
        ],
    );

    assert_eq!(generate_meta(tmp.path()).unwrap(), generate_meta(tmp.path()).unwrap());
}

#[test]
fn latin1_my_fonts_page_is_detected() {
    let tmp = tempdir().expect("tempdir");
    write_kit(tmp.path(), &[("MyFontsWebfontsKit/MyFontsWebfontsKit.css", MY_FONTS_CSS)]);
    let mut page = b"<p>Caf\xe9 sample</p>\n".to_vec();
    page.extend_from_slice(
        b"<span class=\"QuireSansW04-ExtraLightIt\" contenteditable=\"true\">\
          Quire Sans Extra Light Italic</span>",
    );
    write(tmp.path().join("MyFontsWebfontsKit/StartHere.html"), page).expect("write page");

    assert_eq!(detect_kit_kind(tmp.path()).unwrap(), Some(KitKind::MyFonts));

    let metas = generate_meta(tmp.path()).expect("meta");
    assert_eq!(metas[0].font.display_name, "Quire Sans Extra Light Italic");
}

#[test]
fn latin1_linotype_page_is_detected() {
    let tmp = tempdir().expect("tempdir");
    let page = monotype_demo_page(
        r#"<h1 class="demo">Linotype.com Web Fonts</h1>"#,
        "Avenir LT W01 35 Light",
        "Avenir 35 Light",
    );
    let mut bytes = page.into_bytes();
    bytes.extend_from_slice(b"<p>Avenir\xae Next</p>\r\n");
    write(tmp.path().join("demo-async.htm"), bytes).expect("write page");
    write_kit(
        tmp.path(),
        &[(
            "demo-async.css",
            "@font-face{font-family:\"Avenir LT W01 35 Light\";src:url(\"Fonts/edefe737.woff2\");}",
        )],
    );

    assert_eq!(detect_kit_kind(tmp.path()).unwrap(), Some(KitKind::Linotype));

    let metas = generate_meta(tmp.path()).expect("meta");
    assert_eq!(metas[0].font.display_name, "Avenir 35 Light");
}

#[test]
fn unreadable_marker_aborts_detection() {
    let tmp = tempdir().expect("tempdir");
    create_dir_all(tmp.path().join("demo-async.htm")).expect("mkdir");

    let err = detect_kit_kind(tmp.path()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "{err}");
}

#[cfg(unix)]
#[test]
fn unreadable_kit_dir_aborts_detection() {
    use std::{
        fs::{Permissions, read_dir, set_permissions},
        os::unix::fs::PermissionsExt,
    };

    let tmp = tempdir().expect("tempdir");
    let page = r#"<link rel="copyright" href="http://www.fontfont.com/" title="Copyright"><h2>A</h2>"#;
    write_kit(tmp.path(), &[("320998/A.html", page)]);
    let kit_dir = tmp.path().join("320998");
    set_permissions(&kit_dir, Permissions::from_mode(0o000)).expect("chmod");

    // Permission bits do not apply to root.
    let result = read_dir(&kit_dir).is_err().then(|| detect_kit_kind(tmp.path()));
    set_permissions(&kit_dir, Permissions::from_mode(0o755)).expect("chmod");

    if let Some(result) = result {
        let err = result.unwrap_err();
        assert!(matches!(err, Error::Io { .. }), "{err}");
    }
}
