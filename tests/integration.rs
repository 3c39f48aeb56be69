// SPDX-License-Identifier: MPL-2.0
use product_gallery::config::{self, Config, GalleryConfig, GeneralConfig};
use product_gallery::gallery::{FormFlow, ImageCollection, PreviewImage, RawFile};
use product_gallery::i18n::fluent::I18n;
use product_gallery::ui::gallery_editor::Options;
use product_gallery::ui::theming::ThemeMode;
use tempfile::tempdir;

fn png(name: &str) -> RawFile {
    RawFile::new(name, "image/png", vec![0x89, b'P', b'N', b'G'])
}

fn pixel() -> PreviewImage {
    PreviewImage::from_rgba(1, 1, vec![0, 0, 0, 255])
}

fn labels(collection: &ImageCollection) -> Vec<&str> {
    collection.entries().iter().map(|e| e.label()).collect()
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Light,
        },
        ..Config::default()
    };
    config::save_to_path(&english, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("gallery-main-badge"), "MAIN");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Light,
        },
        ..Config::default()
    };
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn gallery_settings_round_trip_into_editor_options() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        gallery: GalleryConfig {
            placeholder_prefix: Some("/media/products/".to_string()),
            columns: Some(3),
            normalize_uploads: Some(false),
            ..GalleryConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");

    let options = Options::from_config(&loaded.gallery);
    assert_eq!(options.submission.placeholder_prefix, "/media/products/");
    assert_eq!(options.columns, 3);
    assert!(!options.submission.normalize_uploads);
}

#[test]
fn edit_flow_promote_then_remove_main() {
    let mut collection = ImageCollection::from_locators("img1.jpg,img2.jpg,img3.jpg");

    assert!(collection.promote_to_main(2));
    assert_eq!(collection.serialize(FormFlow::Edit, ""), "img3.jpg,img1.jpg,img2.jpg");

    collection.remove(0);
    assert_eq!(collection.main().map(|e| e.label()), Some("img1.jpg"));
    assert_eq!(collection.serialize(FormFlow::Edit, ""), "img1.jpg,img2.jpg");
}

#[test]
fn out_of_order_decodes_keep_selection_order() {
    let mut collection = ImageCollection::new();
    let requests = collection.ingest(vec![png("a.png"), png("b.png"), png("c.png")]);

    for request in requests.iter().rev() {
        collection.complete_decode(request.id, Ok(pixel()));
    }

    assert_eq!(labels(&collection), vec!["a.png", "b.png", "c.png"]);
    assert_eq!(collection.pending_decodes(), 0);
}

#[test]
fn create_flow_serializes_uploads_as_placeholders() {
    let mut collection = ImageCollection::new();
    collection.ingest(vec![png("front.png"), png("back.png")]);
    collection.promote_to_main(1);

    assert_eq!(
        collection.serialize(FormFlow::Create, "/static/images/"),
        "/static/images/back.png,/static/images/front.png"
    );
}

#[test]
fn edit_flow_field_excludes_pending_uploads() {
    let mut collection = ImageCollection::from_locators("stored.jpg");
    collection.ingest(vec![png("new.png")]);
    collection.promote_to_main(1);

    assert_eq!(collection.serialize(FormFlow::Edit, "/static/images/"), "stored.jpg");
}
