pub mod source_repository;
