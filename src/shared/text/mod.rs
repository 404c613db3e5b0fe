pub mod list_field;
