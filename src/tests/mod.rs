mod flow_log_parser_test;
mod output_test;
