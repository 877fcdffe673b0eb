pub mod payload_file;
pub mod recommendations;
