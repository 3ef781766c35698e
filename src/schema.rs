//! The demo form: the five fields the detail page carries

use formling_forms::{ChoiceField, FormSchema, MultiChoiceField, NumberField, TextField};

/// Schema of the detail form
///
/// - `user`: optional free text
/// - `age`: optional number, at least 18 when present
/// - `gender`: required choice of male/female
/// - `country`: required choice of korea/usa, rendered as a select
/// - `agree`: both agreement boxes must be checked
pub fn detail_schema() -> FormSchema {
	FormSchema::new()
		.with_field(TextField::new("user").with_label("Name"))
		.with_field(
			NumberField::new("age")
				.with_label("Age")
				.with_min(18.0, "must be at least 18")
				.with_invalid_message("enter a number"),
		)
		.with_field(
			ChoiceField::new("gender", vec![("male", "Male"), ("female", "Female")])
				.with_label("Gender")
				.with_required_message("please select"),
		)
		.with_field(
			ChoiceField::new("country", vec![("korea", "Korea"), ("usa", "USA")])
				.with_label("Country")
				.with_required_message("please select")
				.select("please choose"),
		)
		.with_field(
			MultiChoiceField::new("agree", vec![("1", "Terms of service"), ("2", "Privacy policy")])
				.with_label("Agreements")
				.with_min_selected(2, "please select all"),
		)
}
