//! Presentational building blocks shared by the pages.

pub mod buttons;
pub mod cards;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod navbar;
pub mod references;
pub mod titles;

pub use buttons::BlogButtons;
pub use cards::{BigCard, BlogCard};
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::HeroPage;
pub use navbar::Navbar;
pub use references::BlogReferences;
pub use titles::Titles;
