pub use super::event::Entity as Event;
pub use super::order_history::Entity as OrderHistory;
pub use super::product::Entity as Product;
pub use super::project::Entity as Project;
pub use super::project_section::Entity as ProjectSection;
pub use super::user::Entity as User;
