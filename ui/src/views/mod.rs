mod home;
pub use home::Home;

mod jobs;
pub use jobs::Jobs;
