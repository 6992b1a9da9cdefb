mod fake_path_probe;
mod recording_labkey_client;
mod recording_runner;
mod scripted_prompt;
mod static_downloader;

pub use fake_path_probe::{FakePathProbe, ProbeCall};
pub use recording_labkey_client::RecordingLabKeyClient;
pub use recording_runner::RecordingRunner;
pub use scripted_prompt::ScriptedPrompt;
pub use static_downloader::StaticDownloader;
