//! Conversion entry points.

use crate::clock::{Clock, SystemClock};
use crate::enex::parse_body;
use crate::error::Result;
use crate::html::render;
use crate::resource::{ResourceDescriptor, ResourceIndex};
use crate::transform::transform_body;

/// Convert one exported note body to sanitized HTML, using the real wall
/// clock for the missing-resource warning timestamp.
///
/// # Examples
///
/// ```
/// use enexml::convert;
///
/// let html = convert("<en-note><div>Hello <b>world</b></div></en-note>", &[]).unwrap();
/// assert_eq!(html, "<div>Hello <b>world</b></div>");
/// ```
pub fn convert(body: &str, resources: &[ResourceDescriptor]) -> Result<String> {
    convert_with_clock(body, resources, &SystemClock)
}

/// Convert one exported note body to sanitized HTML.
///
/// `resources` describes the attachments the body may reference by content
/// hash; only metadata is needed, never bytes. The conversion is atomic:
/// it returns the complete HTML string or an error, never partial output.
/// All state lives on the stack of this call, so independent conversions
/// can run in parallel without coordination.
pub fn convert_with_clock(
    body: &str,
    resources: &[ResourceDescriptor],
    clock: &dyn Clock,
) -> Result<String> {
    let nodes = parse_body(body)?;
    let index = ResourceIndex::new(resources);
    let transformed = transform_body(&nodes, &index, clock.now())?;
    Ok(render(&transformed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2013, 10, 23, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_convert_escapes_text() {
        let html = convert("<en-note><div>1 &lt; 2 &amp; 3</div></en-note>", &[]).unwrap();
        assert_eq!(html, "<div>1 &lt; 2 &amp; 3</div>");
    }

    #[test]
    fn test_convert_is_idempotent_with_fixed_clock() {
        let body = r#"<en-note><div><en-media hash="gone" type="image/png"/></div></en-note>"#;
        let clock = fixed_clock();

        let first = convert_with_clock(body, &[], &clock).unwrap();
        let second = convert_with_clock(body, &[], &clock).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("2013-10-23"));
    }

    #[test]
    fn test_convert_propagates_parse_errors() {
        assert!(convert("<en-note><div></en-note>", &[]).is_err());
    }
}
