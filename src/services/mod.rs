pub mod classifier;
pub mod completion;
pub mod identity;
pub mod openai;
pub mod relay;
pub mod relay_client;
pub mod transcript;
pub mod widget;
