pub mod actions;
mod apply;
mod home;
mod learn;
mod onboarding;
mod quiz;
mod teach;

pub use apply::ApplyView;
pub use home::HomeView;
pub use learn::LearnView;
pub use onboarding::OnboardingView;
pub use quiz::QuizView;
pub use teach::TeachView;

#[cfg(test)]
pub mod test_harness;
#[cfg(test)]
mod view_smoke;
