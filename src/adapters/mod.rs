pub mod dialoguer_prompt;
pub mod filesystem_path_probe;
pub mod http_downloader;
pub mod labkey_client_http;
pub mod system_process_runner;
pub mod table_reader;

pub use dialoguer_prompt::DialoguerPrompt;
pub use filesystem_path_probe::FilesystemPathProbe;
pub use http_downloader::HttpDownloader;
pub use labkey_client_http::HttpLabKeyClient;
pub use system_process_runner::SystemProcessRunner;
