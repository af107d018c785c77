pub mod event_reader;
pub mod view_writer;
