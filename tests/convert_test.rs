//! Golden-file conversion tests.
//!
//! Each case converts a single extracted note body (the contents of one
//! `<note>` node of an export archive, already pulled out of its CDATA
//! wrapper) and compares the result byte-for-byte against the expected
//! HTML file.

use std::fs;

use chrono::{TimeZone, Utc};
use enexml::{FixedClock, ResourceDescriptor, SystemClock, convert_with_clock};
use pretty_assertions::assert_eq;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture(name: &str) -> String {
    let path = format!("{FIXTURES_DIR}/{name}");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"))
}

fn audio_resource() -> ResourceDescriptor {
    ResourceDescriptor {
        id: "9168ee833d03c5ea7c730ac6673978c1".to_string(),
        filename: "audio test".to_string(),
        mime: "audio/x-m4a".to_string(),
        size: 82011,
        title: "audio test".to_string(),
    }
}

/// Converts `<name>.enex` and checks the output against `<name>.html`.
fn assert_converts(name: &str, resources: &[ResourceDescriptor]) {
    let input = fixture(&format!("{name}.enex"));
    let expected = fixture(&format!("{name}.html"));

    let actual = convert_with_clock(&input, resources, &SystemClock)
        .unwrap_or_else(|e| panic!("conversion of {name} failed: {e}"));

    assert_eq!(actual, expected, "{name}");
}

#[test]
fn converts_checklist_list() {
    assert_converts("checklist-list", &[]);
}

#[test]
fn converts_inline_svg() {
    assert_converts("svg", &[]);
}

#[test]
fn converts_image_media_reference() {
    assert_converts(
        "en-media--image",
        &[ResourceDescriptor {
            id: "89ce7da62c6b2832929a6964237e98e9".to_string(),
            filename: String::new(),
            mime: "image/jpeg".to_string(),
            size: 50347,
            title: String::new(),
        }],
    );
}

#[test]
fn converts_audio_media_reference() {
    assert_converts("en-media--audio", &[audio_resource()]);
}

#[test]
fn converts_generic_attachment() {
    assert_converts(
        "attachment",
        &[ResourceDescriptor {
            id: "21ca2b948f222a38802940ec7e2e5de3".to_string(),
            filename: "attachment-1".to_string(),
            // Any non-image, non-audio MIME type lands on the generic rule.
            mime: "application/pdf".to_string(),
            size: 1000,
            title: String::new(),
        }],
    );
}

// The warning inserted for a missing resource embeds the conversion date,
// so this case pins the clock instead of using the wall clock.
#[test]
fn inserts_warning_when_resource_not_found() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2013, 10, 23, 0, 0, 0).unwrap());

    let input = fixture("missing-resource.enex");
    let expected = fixture("missing-resource.html");
    let actual = convert_with_clock(&input, &[], &clock).expect("conversion failed");

    assert_eq!(actual, expected);
}

#[test]
fn conversion_is_deterministic() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2013, 10, 23, 0, 0, 0).unwrap());
    let input = fixture("missing-resource.enex");

    let first = convert_with_clock(&input, &[], &clock).expect("conversion failed");
    let second = convert_with_clock(&input, &[], &clock).expect("conversion failed");

    assert_eq!(first, second);
}
