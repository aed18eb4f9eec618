mod csv_reader;
mod importer;

pub use csv_reader::{CsvError, DeviceRecord, read_device_records};
pub use importer::{ImportError, ImportReport, ImportSettings, import_devices};
