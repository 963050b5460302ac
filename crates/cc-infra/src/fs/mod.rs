mod dns_record_file;

pub use dns_record_file::DnsRecordFile;
