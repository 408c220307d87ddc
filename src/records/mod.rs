pub mod flow_log_record;
pub mod lookup_record;
pub mod protocol_record;
