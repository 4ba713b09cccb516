pub mod addresses;
pub mod categories;
pub mod color_variation_images;
pub mod color_variations;
pub mod colors;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod size_variations;
pub mod sizes;
pub mod stores;
pub mod users;

pub use addresses::Entity as Addresses;
pub use categories::Entity as Categories;
pub use color_variation_images::Entity as ColorVariationImages;
pub use color_variations::Entity as ColorVariations;
pub use colors::Entity as Colors;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use products::Entity as Products;
pub use size_variations::Entity as SizeVariations;
pub use sizes::Entity as Sizes;
pub use stores::Entity as Stores;
pub use users::Entity as Users;
