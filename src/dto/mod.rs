pub mod characters;
pub mod favourites;
pub mod planets;
pub mod users;
pub mod vehicles;
