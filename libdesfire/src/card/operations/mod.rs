pub mod file_settings;

pub use file_settings::get_file_settings;
