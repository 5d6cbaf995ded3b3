pub mod fee_report_writer;
