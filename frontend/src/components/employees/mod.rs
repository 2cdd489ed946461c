//! Employee record components: the create/edit form and the listing table.

pub mod form;
pub mod list;
