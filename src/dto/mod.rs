pub mod data_point;
