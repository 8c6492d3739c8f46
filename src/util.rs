//! Small utility helpers used across modules.

/// Escape text for interpolation into an HTML page.
/// Covers the five characters that matter for attribute and body positions.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(ch),
    }
  }
  out
}

/// Normalize an optional form field: trim it, and treat blank as absent.
/// HTML selects submit empty strings for the "Any" choice.
pub fn non_blank(value: Option<String>) -> Option<String> {
  value
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escapes_markup_characters() {
    assert_eq!(escape_html(r#"<b>&"x"'</b>"#), "&lt;b&gt;&amp;&quot;x&quot;&#39;&lt;/b&gt;");
    assert_eq!(escape_html("two-sum"), "two-sum");
  }

  #[test]
  fn blank_fields_collapse_to_none() {
    assert_eq!(non_blank(None), None);
    assert_eq!(non_blank(Some("".into())), None);
    assert_eq!(non_blank(Some("   ".into())), None);
    assert_eq!(non_blank(Some(" easy ".into())), Some("easy".into()));
  }
}
