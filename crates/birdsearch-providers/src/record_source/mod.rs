//! Record Source Implementations
//!
//! | Source | Storage |
//! |--------|---------|
//! | BlobRecordSource | CSV blob fetched over HTTP (optionally SAS-signed) |
//! | FileRecordSource | CSV file on local disk |

pub mod blob;
pub mod csv_decoder;
pub mod file;

pub use blob::BlobRecordSource;
pub use csv_decoder::decode_records;
pub use file::FileRecordSource;
