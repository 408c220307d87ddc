pub mod csv_parser;
pub mod flow_log_parser;
pub mod parser;
