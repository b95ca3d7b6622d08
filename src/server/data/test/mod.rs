mod event;
mod order_history;
mod product;
mod project;
mod project_section;
mod user;
