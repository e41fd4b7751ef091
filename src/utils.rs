use chrono::{DateTime, Utc};

// Feed-supplied text ends up inside popup markup, so anything that could
// open or close a tag has to be neutralized here.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// The feed reports event times as epoch milliseconds; popups show them as a
// readable UTC string so the page does not depend on the build machine's zone.
pub fn format_event_time(time: &DateTime<Utc>) -> String {
    time.format("%a %b %-d, %Y %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("hi")</script>"#),
            "&lt;script&gt;alert(&quot;hi&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Tom & Jerry's"), "Tom &amp; Jerry&#39;s");
    }

    #[test]
    fn leaves_plain_text_untouched() {
        assert_eq!(escape_html("10km N of Testville"), "10km N of Testville");
    }

    #[test]
    fn formats_epoch_millis_as_utc() {
        let time = Utc.timestamp_millis_opt(1_700_000_000_000).single().unwrap();
        assert_eq!(format_event_time(&time), "Tue Nov 14, 2023 22:13:20 UTC");
    }
}
