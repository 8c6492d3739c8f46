//! Inline HTML rendering for the suggestion form.
//!
//! Every outcome re-renders the same page: the form, the full topic list in
//! the dropdown, and an optional message banner. All user-derived text is
//! escaped before interpolation.

use crate::util::escape_html;

/// Render the suggestion page. `message` is the outcome of the previous
/// submission, if any; `topics` always receives the full fixed list.
pub fn page(message: Option<&str>, topics: &[&str]) -> String {
  let mut topic_options = String::new();
  for topic in topics {
    let t = escape_html(topic);
    topic_options.push_str(&format!("        <option value=\"{t}\">{t}</option>\n"));
  }

  let banner = match message {
    Some(m) => format!("<p class=\"message\">{}</p>", escape_html(m)),
    None => String::new(),
  };

  format!(
    r#"<!DOCTYPE html>
<html>
<head>
  <title>LeetCode Problem Suggester</title>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 40px; }}
    .suggest-form {{ max-width: 420px; margin: 0 auto; }}
    label {{ display: block; margin-top: 12px; }}
    input, select {{ width: 100%; padding: 8px; margin-top: 4px; }}
    button {{ width: 100%; padding: 10px; margin-top: 16px; background: #007bff; color: white; border: none; }}
    .message {{ max-width: 420px; margin: 0 auto 20px; padding: 12px; background: #f8f9fa; border-radius: 8px; }}
  </style>
</head>
<body>
  {banner}
  <div class="suggest-form">
    <h2>Suggest my next problem</h2>
    <form action="/suggest" method="POST">
      <label>LeetCode username
        <input type="text" name="username" placeholder="Username">
      </label>
      <label>Difficulty
        <select name="difficulty">
          <option value="">Any</option>
          <option value="easy">Easy</option>
          <option value="medium">Medium</option>
          <option value="hard">Hard</option>
        </select>
      </label>
      <label>Topic
        <select name="topic">
          <option value="">Any</option>
{topic_options}        </select>
      </label>
      <button type="submit">Suggest</button>
    </form>
  </div>
</body>
</html>
"#
  )
}
