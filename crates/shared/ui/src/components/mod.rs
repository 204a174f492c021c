mod article;
mod descent_chart;
mod footer;
mod hero;
mod home;
mod navbar;
mod philosophy;
mod projects;
mod skills;
mod writing;

pub use article::ArticlePage;
pub use descent_chart::DescentChart;
pub use footer::Footer;
pub use hero::Hero;
pub use home::HomePage;
pub use navbar::{LanguageSwitcher, Navbar};
pub use philosophy::Philosophy;
pub use projects::Projects;
pub use skills::Skills;
pub use writing::Writing;
