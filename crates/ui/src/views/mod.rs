mod home;
mod verbs;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use verbs::IrregularVerbsView;
