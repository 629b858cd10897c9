pub mod menu_reader;
pub mod report_writer;
pub mod session_reader;
