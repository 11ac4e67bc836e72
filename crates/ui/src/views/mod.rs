mod completed;
mod garden;
mod loading;
mod playing;
mod setup;
mod state;

pub use completed::CompletedView;
pub use garden::GardenPlot;
pub use loading::LoadingView;
pub use playing::PlayingView;
pub use setup::SetupView;
pub use state::ViewError;

#[cfg(test)]
mod smoke;
