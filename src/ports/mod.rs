mod confirmation_prompt;
mod downloader;
mod labkey_client;
mod path_probe;
mod process_runner;

pub use confirmation_prompt::ConfirmationPrompt;
pub use downloader::{Downloader, FetchedBody};
pub use labkey_client::{InsertRowsRequest, LabKeyClient};
pub use path_probe::PathProbe;
pub use process_runner::{ProcessExit, ProcessRunner};
