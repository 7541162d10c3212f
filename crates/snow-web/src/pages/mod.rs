mod generate;
mod home;

pub use generate::GeneratePage;
pub use home::HomePage;
