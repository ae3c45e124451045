pub mod settings_file;
pub mod text;
