mod component;
mod home;

pub(crate) use component::ComponentPage;
pub(crate) use home::HomePage;
