//! End-to-end batch pipeline: symbol set in, ordered artifacts and one
//! archive out.
//!
//! These run against an empty font store on purpose: an unresolvable font
//! family degrades every sign to background-only but must never abort the
//! batch or change the artifact count.

use sign_core::{StyleSettings, SYMBOL_COUNT, symbol_set};
use sign_export::{ARCHIVE_FILE_NAME, BatchExporter, archive};
use sign_text::FontStore;

#[test]
fn batch_produces_one_artifact_per_symbol_in_order() {
    let symbols = symbol_set();
    let mut exporter = BatchExporter::new();
    let mut store = FontStore::empty();

    let artifacts = exporter
        .export_all(&StyleSettings::default(), &mut store, &symbols, |_, _| {})
        .unwrap();

    assert_eq!(artifacts.len(), SYMBOL_COUNT);
    for (artifact, symbol) in artifacts.iter().zip(&symbols) {
        assert_eq!(artifact.file_name, format!("sign-{symbol}.png"));
        assert_eq!(artifact.mime, "image/png");
        assert_eq!(&artifact.bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
    assert_eq!(artifacts[0].file_name, "sign--9.png");
    assert_eq!(artifacts[110].file_name, "sign-L.png");
}

#[test]
fn progress_fires_synchronously_after_every_item() {
    let symbols = symbol_set().into_iter().take(10).collect::<Vec<_>>();
    let mut exporter = BatchExporter::new();
    let mut store = FontStore::empty();

    let mut calls = Vec::new();
    exporter
        .export_all(&StyleSettings::default(), &mut store, &symbols, |done, total| {
            calls.push((done, total));
        })
        .unwrap();

    assert_eq!(calls.len(), 10);
    assert_eq!(calls.first(), Some(&(1, 10)));
    assert_eq!(calls.last(), Some(&(10, 10)));
    assert!(calls.windows(2).all(|w| w[1].0 == w[0].0 + 1));
}

#[test]
fn finished_batch_zips_into_one_bundle() {
    // A short prefix of the set keeps this test quick; the container logic
    // is independent of the entry count.
    let symbols = symbol_set().into_iter().take(4).collect::<Vec<_>>();
    let mut exporter = BatchExporter::new();
    let mut store = FontStore::empty();

    let artifacts = exporter
        .export_all(&StyleSettings::default(), &mut store, &symbols, |_, _| {})
        .unwrap();
    let bundle = archive(&artifacts).unwrap();

    assert_eq!(&bundle[..4], b"PK\x03\x04");
    assert_eq!(ARCHIVE_FILE_NAME, "floor-sign-set.zip");
}

#[test]
fn identical_settings_produce_identical_artifacts() {
    let symbols = vec!["99".to_string()];
    let mut store = FontStore::empty();

    let mut first = BatchExporter::new();
    let a = first
        .export_all(&StyleSettings::default(), &mut store, &symbols, |_, _| {})
        .unwrap();
    let mut second = BatchExporter::new();
    let b = second
        .export_all(&StyleSettings::default(), &mut store, &symbols, |_, _| {})
        .unwrap();

    assert_eq!(a[0].bytes, b[0].bytes);
}
