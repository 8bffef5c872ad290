pub mod row_service;
