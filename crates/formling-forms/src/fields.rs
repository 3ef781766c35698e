pub mod choice_field;
pub mod multi_choice_field;
pub mod number_field;
pub mod text_field;

pub use choice_field::ChoiceField;
pub use multi_choice_field::MultiChoiceField;
pub use number_field::NumberField;
pub use text_field::TextField;
