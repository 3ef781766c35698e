//! Minimal HTML rendering of the two pages
//!
//! Enough markup to drive the demo from a browser: fieldsets with the
//! current value and the first error message per field. Styling is out of
//! scope.

use formling_forms::{FormSchema, Widget};
use formling_session::{Phase, RenderState};
use serde_json::Value;

/// Escape text for use in HTML content and attribute values
pub fn escape_html(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());
	for c in value.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

pub fn landing_page() -> String {
	"<!doctype html>\n<html><body>\n<h1>Home</h1>\n<p><a href=\"/detail\">Open the form</a></p>\n</body></html>\n"
		.to_string()
}

/// Render the detail form from the current session snapshot
///
/// The session token is stamped on the form element; a token change after
/// reset forces a full re-render on the client side.
pub fn detail_page(schema: &FormSchema, state: &RenderState) -> String {
	let mut html = String::from("<!doctype html>\n<html><body>\n");

	match state.phase {
		Phase::Submitting => html.push_str("<h1>Submitting the form</h1>\n"),
		Phase::LoadingDefaults => html.push_str("<h1>Loading initial values</h1>\n"),
		Phase::Revalidating => html.push_str("<h1>Reloading initial values</h1>\n"),
		Phase::Idle | Phase::Failed => {}
	}
	if let Some(failure) = &state.failure {
		html.push_str(&format!(
			"<p class=\"banner\">{} (retry below)</p>\n",
			escape_html(failure)
		));
	}

	html.push_str(&format!(
		"<form method=\"POST\" action=\"/detail\" data-token=\"{}\">\n",
		state.token
	));

	for field in schema.fields() {
		let name = field.name();
		let tokens = current_tokens(state, name);
		let legend = field.label().unwrap_or(name);

		html.push_str("<fieldset>\n");
		html.push_str(&format!("<legend>{}</legend>\n", escape_html(legend)));

		match field.widget() {
			Widget::TextInput => {
				html.push_str(&format!(
					"<input type=\"text\" name=\"{}\" value=\"{}\" />\n",
					escape_html(name),
					escape_html(tokens.first().map(String::as_str).unwrap_or(""))
				));
			}
			Widget::NumberInput => {
				html.push_str(&format!(
					"<input type=\"number\" name=\"{}\" value=\"{}\" />\n",
					escape_html(name),
					escape_html(tokens.first().map(String::as_str).unwrap_or(""))
				));
			}
			Widget::RadioSelect { choices } => {
				for (value, label) in choices {
					let checked = if tokens.iter().any(|t| t == value) {
						" checked"
					} else {
						""
					};
					html.push_str(&format!(
						"<label><input type=\"radio\" name=\"{}\" value=\"{}\"{} /> {}</label>\n",
						escape_html(name),
						escape_html(value),
						checked,
						escape_html(label)
					));
				}
			}
			Widget::Select { empty_label, choices } => {
				html.push_str(&format!("<select name=\"{}\">\n", escape_html(name)));
				html.push_str(&format!(
					"<option value=\"\">{}</option>\n",
					escape_html(empty_label)
				));
				for (value, label) in choices {
					let selected = if tokens.iter().any(|t| t == value) {
						" selected"
					} else {
						""
					};
					html.push_str(&format!(
						"<option value=\"{}\"{}>{}</option>\n",
						escape_html(value),
						selected,
						escape_html(label)
					));
				}
				html.push_str("</select>\n");
			}
			Widget::CheckboxMultiple { choices } => {
				for (value, label) in choices {
					let checked = if tokens.iter().any(|t| t == value) {
						" checked"
					} else {
						""
					};
					html.push_str(&format!(
						"<label><input type=\"checkbox\" name=\"{}\" value=\"{}\"{} /> {}</label>\n",
						escape_html(name),
						escape_html(value),
						checked,
						escape_html(label)
					));
				}
			}
		}

		if let Some(messages) = state.errors.as_ref().and_then(|e| e.get(name))
			&& let Some(first) = messages.first()
		{
			html.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(first)));
		}

		html.push_str("</fieldset>\n");
	}

	html.push_str("<button type=\"submit\">Submit</button>\n");
	html.push_str("<button type=\"submit\" formaction=\"/detail/reset\">Reset</button>\n");
	html.push_str("</form>\n</body></html>\n");
	html
}

/// Tokens to pre-fill a field with: the raw echo of a rejected submit when
/// present, otherwise the session values
fn current_tokens(state: &RenderState, name: &str) -> Vec<String> {
	if let Some(entered) = &state.entered
		&& let Some(tokens) = entered.get(name)
	{
		return tokens.clone();
	}
	match state.values.get(name) {
		None | Some(Value::Null) => Vec::new(),
		Some(Value::String(s)) => {
			if s.is_empty() {
				Vec::new()
			} else {
				vec![s.clone()]
			}
		}
		Some(Value::Number(n)) => vec![n.to_string()],
		Some(Value::Array(items)) => items
			.iter()
			.filter_map(|v| v.as_str().map(String::from))
			.collect(),
		Some(_) => Vec::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::detail_schema;
	use formling_session::FormSession;
	use std::collections::BTreeMap;

	fn idle_state() -> RenderState {
		FormSession::new(detail_schema().defaults()).render_state()
	}

	#[test]
	fn test_defaults_render_unchecked() {
		let html = detail_page(&detail_schema(), &idle_state());

		assert!(html.contains("name=\"user\" value=\"\""));
		assert!(html.contains("<option value=\"usa\">USA</option>"));
		assert!(!html.contains("checked"));
		assert!(html.contains("data-token=\"1\""));
	}

	#[test]
	fn test_errors_and_entered_values_render() {
		let mut state = idle_state();
		let mut errors = BTreeMap::new();
		errors.insert("gender".to_string(), vec!["please select".to_string()]);
		state.errors = Some(errors);

		let mut entered = BTreeMap::new();
		entered.insert("user".to_string(), vec!["Kim".to_string()]);
		entered.insert("agree".to_string(), vec!["1".to_string()]);
		state.entered = Some(entered);

		let html = detail_page(&detail_schema(), &state);
		assert!(html.contains("<p class=\"error\">please select</p>"));
		assert!(html.contains("name=\"user\" value=\"Kim\""));
		assert!(html.contains("value=\"1\" checked"));
	}

	#[test]
	fn test_escape_html() {
		assert_eq!(escape_html("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
	}
}
