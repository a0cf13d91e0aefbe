pub mod characters;
pub mod favourites;
pub mod planets;
pub mod users;
pub mod vehicles;

pub use characters::Entity as Characters;
pub use favourites::Entity as Favourites;
pub use planets::Entity as Planets;
pub use users::Entity as Users;
pub use vehicles::Entity as Vehicles;
