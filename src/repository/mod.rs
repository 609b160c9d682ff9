pub mod http_source_repository_impl;
