pub mod data_buffer;
